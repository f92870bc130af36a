//! Output directory assembly.

use crate::pipeline::error::{ErrorExt, Result};
use crate::pipeline::fs;
use std::path::Path;

/// Fixed top-level subdirectories of a package.
pub const OUTPUT_DIRS: &[&str] = &[
    "assets",
    "config",
    "core",
    "documentation",
    "scripts",
    "styles",
    "tests",
];

/// Destroys any pre-existing tree at `output_dir` and recreates the fixed
/// package layout.
///
/// Idempotent: running twice yields the same structure. This is the only
/// stage whose failure aborts the whole run; without a clean output root
/// nothing downstream can proceed.
pub async fn assemble(output_dir: &Path) -> Result<()> {
    log::info!("Creating package directory structure at {}", output_dir.display());

    fs::create_dir_all(output_dir, true).await?;

    for dir in OUTPUT_DIRS {
        let path = output_dir.join(dir);
        tokio::fs::create_dir_all(&path)
            .await
            .fs_context("creating package subdirectory", &path)?;
    }

    Ok(())
}
