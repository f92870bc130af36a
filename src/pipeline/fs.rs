//! File system helpers for the pipeline.
//!
//! Thin wrappers over `tokio::fs` that create parent directories as needed
//! and keep directory creation/removal idempotent.

use crate::pipeline::error::{Error, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if
/// specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        // Try removal, ignore NotFound (idempotent)
        match fs::remove_dir_all(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    Ok(fs::create_dir_all(path).await?)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_all_with_erase_clears_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        fs::create_dir_all(dir.join("stale")).await.unwrap();
        fs::write(dir.join("stale/file.txt"), b"old").await.unwrap();

        create_dir_all(&dir, true).await.unwrap();

        assert!(dir.exists());
        assert!(!dir.join("stale").exists());
    }

    #[tokio::test]
    async fn copy_file_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, b"hello").await.unwrap();

        let dst = tmp.path().join("nested/deep/a.txt");
        copy_file(&src, &dst).await.unwrap();

        assert_eq!(fs::read(&dst).await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn copy_file_rejects_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let result = copy_file(&tmp.path().join("nope"), &tmp.path().join("out")).await;
        assert!(result.is_err());
    }
}
