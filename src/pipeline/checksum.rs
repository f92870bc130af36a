//! File checksum calculation for the integrity manifest.
//!
//! MD5 is deliberate: the manifest is an integrity/debugging record for
//! transferred packages, not a security boundary.

use crate::pipeline::error::{ErrorExt, Result};
use std::path::Path;

/// Computes the hex-encoded MD5 digest of a file's final on-disk bytes.
pub async fn file_md5(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .fs_context("reading file for checksum", path)?;
    Ok(format!("{:x}", md5::compute(&bytes)))
}
