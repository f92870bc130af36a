//! Source manifest: the fixed set of inputs the pipeline looks for.

use std::path::{Path, PathBuf};

/// Relative paths the pipeline expects to find in the source tree,
/// partitioned by category.
///
/// Every entry is optional at the filesystem level; a missing entry is
/// recorded as a warning and the corresponding output is simply incomplete.
/// The [`Default`] set mirrors the dashboard layout this tool ships for;
/// library callers may supply their own.
#[derive(Debug, Clone)]
pub struct SourceManifest {
    /// Script modules under `core/`, copied with their relative path intact.
    pub core_scripts: Vec<PathBuf>,

    /// Root-level script modules relocated under `core/` in the output.
    pub extra_scripts: Vec<PathBuf>,

    /// Markup entry points copied to the output root.
    pub markup: Vec<PathBuf>,

    /// Primary entry point; additionally duplicated as `index.html` so a
    /// default-route server resolves to it. Must also appear in `markup`.
    pub primary_markup: PathBuf,

    /// JSON configuration documents, copied minified with their relative
    /// path intact.
    pub configs: Vec<PathBuf>,

    /// Style sheets relocated under `styles/` in the output.
    pub styles: Vec<PathBuf>,

    /// Server files copied to the output root.
    pub server_files: Vec<PathBuf>,

    /// Test files relocated under `tests/` in the output.
    pub test_files: Vec<PathBuf>,

    /// Output-relative script paths inlined into the standalone artifact.
    ///
    /// Order matters: later modules may reference state set up by earlier
    /// ones, so the merge never reorders this list.
    pub inline_scripts: Vec<PathBuf>,

    /// Anchor comment in the primary markup where the inlined script bundle
    /// is inserted.
    pub script_anchor: String,
}

impl SourceManifest {
    /// Output-relative destinations of the style sheets.
    pub fn style_outputs(&self) -> Vec<PathBuf> {
        self.styles
            .iter()
            .map(|p| Path::new("styles").join(file_name(p)))
            .collect()
    }

    /// Output-relative destination of the primary markup entry point.
    pub fn primary_markup_output(&self) -> PathBuf {
        file_name(&self.primary_markup)
    }
}

/// Last component of a relative path, as its own path.
fn file_name(path: &Path) -> PathBuf {
    path.file_name().map(PathBuf::from).unwrap_or_else(|| path.to_path_buf())
}

impl Default for SourceManifest {
    fn default() -> Self {
        let core_scripts: Vec<PathBuf> = [
            "core/InputRouter.js",
            "core/StateStore.js",
            "core/ReactivityBridge.js",
            "core/ShaderManager.js",
            "core/RenderCore.js",
            "core/GeometryRegistry.js",
            "core/ProjectionEngine.js",
            "core/VisualizerPool.js",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        Self {
            // All core modules are also inlined, preserving this load order.
            inline_scripts: core_scripts.clone(),
            core_scripts,
            extra_scripts: vec![
                PathBuf::from("ConfigSystem.js"),
                PathBuf::from("EffectsSystem.js"),
            ],
            markup: vec![
                PathBuf::from("dashboard.html"),
                PathBuf::from("editor.html"),
                PathBuf::from("demo.html"),
            ],
            primary_markup: PathBuf::from("dashboard.html"),
            configs: vec![
                PathBuf::from("config/visuals.json"),
                PathBuf::from("config/behavior.json"),
                PathBuf::from("config/content.json"),
                PathBuf::from("config/dashboard-config.json"),
            ],
            styles: vec![PathBuf::from("effects.css")],
            server_files: vec![PathBuf::from("server.py"), PathBuf::from("package.json")],
            test_files: vec![PathBuf::from("test-system.js")],
            script_anchor: "<!-- @embed:core-scripts -->".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_primary_markup_is_listed() {
        let manifest = SourceManifest::default();
        assert!(manifest.markup.contains(&manifest.primary_markup));
    }

    #[test]
    fn style_outputs_land_under_styles() {
        let manifest = SourceManifest::default();
        assert_eq!(
            manifest.style_outputs(),
            vec![PathBuf::from("styles/effects.css")]
        );
    }
}
