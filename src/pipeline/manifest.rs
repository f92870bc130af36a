//! Package manifest with per-file integrity metadata.

use crate::descriptor::PackageDescriptor;
use crate::pipeline::checksum;
use crate::pipeline::error::{Context, ErrorExt, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the manifest at the output root.
pub const MANIFEST_FILE: &str = "package-manifest.json";

/// Integrity metadata for one packaged file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileMeta {
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded MD5 checksum
    pub checksum: String,
}

/// The integrity record consumers use to verify a transferred package.
///
/// Built only after every output file has been written; the recorded
/// checksums reflect final, not intermediate, contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Product name
    pub name: String,
    /// Package version
    pub version: String,
    /// Creation timestamp (UTC)
    pub created: String,
    /// Package description
    pub description: String,
    /// Ordered feature list
    pub features: Vec<String>,
    /// Output-relative path to size and checksum
    pub files: BTreeMap<String, FileMeta>,
    /// Sum of all file sizes
    pub size_bytes: u64,
    /// Number of manifest entries
    pub total_files: usize,
    /// `size_bytes` in megabytes, rounded to two decimals
    pub size_mb: f64,
}

/// Walks the finished output tree and builds the manifest.
///
/// Entries are visited in sorted order so repeated runs over identical
/// contents produce identical manifests.
pub async fn build(output_dir: &Path, descriptor: &PackageDescriptor) -> Result<BundleManifest> {
    log::info!("Building package manifest");

    let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(output_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();
    entries.sort();

    let mut files = BTreeMap::new();
    let mut size_bytes = 0u64;

    for path in entries {
        let rel = path
            .strip_prefix(output_dir)
            .context("walked file outside the output root")?;
        let metadata = tokio::fs::metadata(&path)
            .await
            .fs_context("reading file metadata", &path)?;
        let checksum = checksum::file_md5(&path).await?;

        size_bytes += metadata.len();
        files.insert(
            rel.to_string_lossy().replace('\\', "/"),
            FileMeta {
                size: metadata.len(),
                checksum,
            },
        );
    }

    let total_files = files.len();
    let size_mb = (size_bytes as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0;
    log::info!("manifest covers {total_files} files, {size_mb} MB");

    Ok(BundleManifest {
        name: descriptor.name.clone(),
        version: descriptor.version.clone(),
        created: descriptor.created.clone(),
        description: descriptor.description.clone(),
        features: descriptor.features.clone(),
        files,
        size_bytes,
        total_files,
        size_mb,
    })
}

/// Writes the manifest as `package-manifest.json` at the output root.
///
/// The manifest file itself is intentionally not listed in `files`; it is
/// written after the walk.
pub async fn write(output_dir: &Path, manifest: &BundleManifest) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    tokio::fs::write(&path, json)
        .await
        .fs_context("writing package manifest", &path)?;
    Ok(path)
}
