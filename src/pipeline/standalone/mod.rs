//! Standalone single-file artifact generation.
//!
//! Merges the primary markup entry point with the inlined script bundle,
//! the concatenated style sheets and the minified configuration documents,
//! producing one HTML file that runs with no server and no file tree.
//!
//! This stage never fails the run: any error is converted into a warning
//! and the artifact is simply not produced.

mod markup;

use crate::pipeline::error::{Context, ErrorExt, Result};
use crate::pipeline::sources::SourceManifest;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name of the standalone artifact at the output root.
pub const STANDALONE_FILE: &str = "dashboard-standalone.html";

/// Result of the standalone stage.
#[derive(Debug, Default)]
pub struct StandaloneOutcome {
    /// Path of the written artifact, if it was produced.
    pub artifact: Option<PathBuf>,
    /// Warnings explaining why the artifact is missing or degraded.
    pub warnings: Vec<String>,
}

/// Generates the standalone artifact from the already-assembled output tree.
///
/// `minified_configs` are the output-relative config paths that passed
/// validation; each becomes a `window.<name>` global binding.
pub async fn generate(
    output_dir: &Path,
    sources: &SourceManifest,
    minified_configs: &[PathBuf],
) -> StandaloneOutcome {
    log::info!("Creating standalone single-file artifact");

    let mut outcome = StandaloneOutcome::default();
    match build_artifact(output_dir, sources, minified_configs).await {
        Ok(Some(path)) => outcome.artifact = Some(path),
        Ok(None) => {
            log::warn!("primary markup not found, skipping standalone artifact");
            outcome
                .warnings
                .push("primary markup not found, skipping standalone artifact".to_string());
        }
        Err(e) => {
            log::warn!("standalone artifact not produced: {e}");
            outcome
                .warnings
                .push(format!("standalone artifact not produced: {e}"));
        }
    }
    outcome
}

async fn build_artifact(
    output_dir: &Path,
    sources: &SourceManifest,
    minified_configs: &[PathBuf],
) -> Result<Option<PathBuf>> {
    let entry = output_dir.join(sources.primary_markup_output());
    if !entry.is_file() {
        return Ok(None);
    }
    let html = tokio::fs::read_to_string(&entry)
        .await
        .fs_context("reading primary markup", &entry)?;

    // Script bundle, preserving the declared load order. Later modules may
    // reference state set up by earlier ones.
    let mut script_bundle = String::new();
    for rel in &sources.inline_scripts {
        let path = output_dir.join(rel);
        if !path.is_file() {
            continue; // already reported during the copy stage
        }
        let text = tokio::fs::read_to_string(&path)
            .await
            .fs_context("reading script for inlining", &path)?;
        script_bundle.push_str(&format!("// {}\n{}\n", rel.display(), text));
    }

    // Style bundle; order is irrelevant for correctness but kept stable for
    // reproducibility.
    let mut style_bundle = String::new();
    for rel in sources.style_outputs() {
        let path = output_dir.join(&rel);
        if !path.is_file() {
            continue;
        }
        let text = tokio::fs::read_to_string(&path)
            .await
            .fs_context("reading style sheet for inlining", &path)?;
        style_bundle.push_str(&text);
        if !style_bundle.ends_with('\n') {
            style_bundle.push('\n');
        }
    }

    // Document-global bindings from the already-minified configs.
    let mut bindings = Vec::new();
    for rel in minified_configs {
        let path = output_dir.join(rel);
        if !path.is_file() {
            continue;
        }
        let text = tokio::fs::read_to_string(&path)
            .await
            .fs_context("reading minified config", &path)?;
        let stem = rel.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        bindings.push(format!("window.{} = {};", global_name(stem), text));
    }

    let rewritten = rewrite_markup(&html, sources, &script_bundle, &style_bundle, &bindings)?;

    let dest = output_dir.join(STANDALONE_FILE);
    tokio::fs::write(&dest, rewritten)
        .await
        .fs_context("writing standalone artifact", &dest)?;
    log::debug!("wrote {}", dest.display());
    Ok(Some(dest))
}

/// Rewrites the markup: removes reference tags for the bundled sources,
/// injects styles and config bindings before `</head>`, and inserts the
/// script bundle at the anchor comment (or before `</body>` if the anchor
/// is absent).
///
/// Reference tags whose target does not match a bundled source are left in
/// place; only recognized tags are removed.
fn rewrite_markup(
    html: &str,
    sources: &SourceManifest,
    script_bundle: &str,
    style_bundle: &str,
    bindings: &[String],
) -> Result<String> {
    let bundled_scripts: HashSet<String> = sources
        .inline_scripts
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let bundled_styles: HashSet<String> = sources
        .style_outputs()
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let spans: Vec<_> = markup::scan_ref_tags(html)
        .into_iter()
        .filter(|tag| is_bundled_ref(tag, &bundled_scripts, &bundled_styles))
        .map(|tag| tag.span)
        .collect();
    let mut output = markup::remove_spans(html, &spans);

    let head_block = format!(
        "\n    <style>\n{style_bundle}    </style>\n    <script>\n    {}\n    </script>\n",
        bindings.join("\n    ")
    );
    let head_pos = find_ci(&output, "</head>").context("markup has no closing head tag")?;
    output.insert_str(head_pos, &head_block);

    let script_block = format!("<script>\n{script_bundle}</script>");
    if let Some(pos) = output.find(&sources.script_anchor) {
        output.replace_range(pos..pos + sources.script_anchor.len(), &script_block);
    } else if let Some(pos) = find_ci(&output, "</body>") {
        output.insert_str(pos, &script_block);
    } else {
        output.push_str(&script_block);
    }

    Ok(output)
}

fn is_bundled_ref(
    tag: &markup::RefTag,
    bundled_scripts: &HashSet<String>,
    bundled_styles: &HashSet<String>,
) -> bool {
    match tag.name.as_str() {
        "script" => tag
            .attr("src")
            .map(normalize_ref)
            .is_some_and(|src| bundled_scripts.contains(&src)),
        "link" => {
            tag.attr("rel")
                .is_some_and(|rel| rel.eq_ignore_ascii_case("stylesheet"))
                && tag
                    .attr("href")
                    .map(normalize_ref)
                    .is_some_and(|href| bundled_styles.contains(&href))
        }
        _ => false,
    }
}

/// Strips leading `./` and `/` so tag targets compare against
/// output-relative paths.
fn normalize_ref(target: &str) -> String {
    target
        .trim()
        .trim_start_matches("./")
        .trim_start_matches('/')
        .to_string()
}

/// Derives the document-global name for a config file stem.
///
/// Kebab/snake stems are camelized and a `Config` suffix is appended unless
/// the stem already ends with one: `visuals` becomes `visualsConfig`,
/// `dashboard-config` becomes `dashboardConfig`.
fn global_name(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut upper_next = false;
    for c in stem.chars() {
        if c == '-' || c == '_' || c == '.' || c == ' ' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    if !name.to_ascii_lowercase().ends_with("config") {
        name.push_str("Config");
    }
    name
}

fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_names_are_valid_identifiers() {
        assert_eq!(global_name("visuals"), "visualsConfig");
        assert_eq!(global_name("behavior"), "behaviorConfig");
        assert_eq!(global_name("dashboard-config"), "dashboardConfig");
        assert_eq!(global_name("my_content"), "myContentConfig");
    }

    fn test_sources() -> SourceManifest {
        SourceManifest {
            inline_scripts: vec![PathBuf::from("core/app.js")],
            styles: vec![PathBuf::from("effects.css")],
            ..SourceManifest::default()
        }
    }

    #[test]
    fn rewrite_removes_bundled_tags_and_keeps_others() {
        let html = concat!(
            "<html><head>\n",
            "<script src=\"./core/app.js\"></script>\n",
            "<script src=\"https://cdn.example/lib.js\"></script>\n",
            "<link rel=\"stylesheet\" href=\"styles/effects.css\">\n",
            "</head><body>\n",
            "<!-- @embed:core-scripts -->\n",
            "</body></html>"
        );
        let rewritten = rewrite_markup(
            html,
            &test_sources(),
            "// core/app.js\nconsole.log(1);\n",
            "body { margin: 0; }\n",
            &["window.visualsConfig = {\"a\":1};".to_string()],
        )
        .unwrap();

        assert!(!rewritten.contains("src=\"./core/app.js\""));
        assert!(rewritten.contains("https://cdn.example/lib.js"));
        assert!(!rewritten.contains("styles/effects.css\">"));
        assert!(rewritten.contains("body { margin: 0; }"));
        assert_eq!(rewritten.matches("window.visualsConfig =").count(), 1);
        assert!(rewritten.contains("console.log(1);"));
        assert!(!rewritten.contains("@embed:core-scripts"));
    }

    #[test]
    fn rewrite_falls_back_to_body_close_without_anchor() {
        let html = "<html><head></head><body><p>x</p></body></html>";
        let rewritten =
            rewrite_markup(html, &test_sources(), "var a = 1;\n", "", &[]).unwrap();
        let script_pos = rewritten.find("var a = 1;").unwrap();
        let body_close = rewritten.find("</body>").unwrap();
        assert!(script_pos < body_close);
    }

    #[test]
    fn rewrite_requires_closing_head() {
        let html = "<html><body></body></html>";
        assert!(rewrite_markup(html, &test_sources(), "", "", &[]).is_err());
    }
}
