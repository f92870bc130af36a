//! Asset copying from the source tree into the package layout.

use crate::pipeline::error::Result;
use crate::pipeline::fs;
use crate::pipeline::sources::SourceManifest;
use std::path::{Path, PathBuf};

/// Result of the asset-copy stage.
#[derive(Debug, Default)]
pub struct CopyOutcome {
    /// Number of files copied.
    pub copied: usize,
    /// Warnings for manifest entries missing from the source tree.
    pub warnings: Vec<String>,
}

/// Copies every manifest-listed asset that exists, byte for byte.
///
/// Missing sources are recorded as warnings; the category may simply be
/// unused in a given source tree. The primary markup entry point is
/// additionally duplicated as `index.html` at the output root.
pub async fn copy_assets(
    source_dir: &Path,
    output_dir: &Path,
    sources: &SourceManifest,
) -> Result<CopyOutcome> {
    log::info!("Copying assets from {}", source_dir.display());

    let mut outcome = CopyOutcome::default();

    for (src_rel, dest_rel) in copy_plan(sources) {
        let src = source_dir.join(&src_rel);
        if !src.is_file() {
            log::warn!("missing source file: {}", src_rel.display());
            outcome
                .warnings
                .push(format!("missing source file: {}", src_rel.display()));
            continue;
        }

        let dest = output_dir.join(&dest_rel);
        fs::copy_file(&src, &dest).await?;
        log::debug!("copied {} -> {}", src_rel.display(), dest_rel.display());
        outcome.copied += 1;
    }

    // Canonical entry point for default-route servers and directory listings.
    let primary = source_dir.join(&sources.primary_markup);
    if primary.is_file() {
        fs::copy_file(&primary, &output_dir.join("index.html")).await?;
        outcome.copied += 1;
    } else {
        outcome.warnings.push(format!(
            "primary markup missing, no index.html created: {}",
            sources.primary_markup.display()
        ));
    }

    Ok(outcome)
}

/// Builds the (source-relative, output-relative) copy pairs for every
/// category except configuration, which has its own validating stage.
fn copy_plan(sources: &SourceManifest) -> Vec<(PathBuf, PathBuf)> {
    let mut plan = Vec::new();

    for path in &sources.core_scripts {
        plan.push((path.clone(), path.clone()));
    }
    for path in &sources.extra_scripts {
        plan.push((path.clone(), Path::new("core").join(file_name(path))));
    }
    for path in &sources.markup {
        plan.push((path.clone(), file_name(path)));
    }
    for path in &sources.styles {
        plan.push((path.clone(), Path::new("styles").join(file_name(path))));
    }
    for path in &sources.server_files {
        plan.push((path.clone(), file_name(path)));
    }
    for path in &sources.test_files {
        plan.push((path.clone(), Path::new("tests").join(file_name(path))));
    }

    plan
}

fn file_name(path: &Path) -> PathBuf {
    path.file_name().map(PathBuf::from).unwrap_or_else(|| path.to_path_buf())
}
