//! Compressed archive creation.

use crate::bail;
use crate::pipeline::error::{Context, Error, ErrorExt, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// Writes every file under `output_dir` into a deflate-compressed zip.
///
/// The archive is placed next to the output root, never inside it, under
/// `<slug>-<unix-timestamp>.zip`, so a rerun keeps earlier archives around.
/// Entry paths are relative to the output root. Failures here propagate and
/// fail the run.
pub async fn create(output_dir: &Path, slug: &str) -> Result<PathBuf> {
    log::info!("Creating zip archive");

    if !output_dir.is_dir() {
        bail!("output root is not a directory: {}", output_dir.display());
    }

    let parent = output_dir.parent().unwrap_or_else(|| Path::new("."));
    let archive_path = parent.join(format!("{slug}-{}.zip", chrono::Utc::now().timestamp()));

    // Zip writing is synchronous and CPU-bound; run it off the async thread.
    let root = output_dir.to_path_buf();
    let dest = archive_path.clone();
    tokio::task::spawn_blocking(move || write_zip(&root, &dest))
        .await
        .map_err(|e| Error::GenericError(format!("archive task panicked: {e}")))??;

    log::info!("wrote {}", archive_path.display());
    Ok(archive_path)
}

fn write_zip(root: &Path, dest: &Path) -> Result<()> {
    let file = std::fs::File::create(dest).fs_context("creating archive", dest)?;
    let mut writer = zip::ZipWriter::new(file);

    // Sorted order keeps archives comparable between runs.
    let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();
    entries.sort();

    for path in entries {
        let rel = path
            .strip_prefix(root)
            .context("walked file outside the output root")?;
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        writer.start_file(rel.to_string_lossy().replace('\\', "/"), options)?;
        let bytes = std::fs::read(&path).fs_context("reading file for archive", &path)?;
        writer.write_all(&bytes)?;
    }

    writer.finish()?;
    Ok(())
}
