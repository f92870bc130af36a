//! Configuration validation and minification.

use crate::pipeline::error::{ErrorExt, Result};
use crate::pipeline::sources::SourceManifest;
use std::path::{Path, PathBuf};

/// Result of the configuration stage.
#[derive(Debug, Default)]
pub struct ConfigOutcome {
    /// Output-relative paths of configs that validated and were written.
    pub written: Vec<PathBuf>,
    /// Warnings for missing or syntactically invalid documents.
    pub warnings: Vec<String>,
}

/// Validates each configuration document and writes it minified.
///
/// A document that fails to read or parse is reported and excluded; the
/// packaged output never contains malformed JSON. Downstream consumers treat
/// a missing config file as "use defaults".
pub async fn process_configs(
    source_dir: &Path,
    output_dir: &Path,
    sources: &SourceManifest,
) -> Result<ConfigOutcome> {
    log::info!("Validating configuration files");

    let mut outcome = ConfigOutcome::default();

    for rel in &sources.configs {
        let src = source_dir.join(rel);
        if !src.is_file() {
            log::warn!("missing config file: {}", rel.display());
            outcome
                .warnings
                .push(format!("missing config file: {}", rel.display()));
            continue;
        }

        let raw = match tokio::fs::read_to_string(&src).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("unreadable config file {}: {e}", rel.display());
                outcome
                    .warnings
                    .push(format!("unreadable config file {}: {e}", rel.display()));
                continue;
            }
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => {
                let minified = serde_json::to_string(&value)?;
                let dest = output_dir.join(rel);
                tokio::fs::write(&dest, minified)
                    .await
                    .fs_context("writing minified config", &dest)?;
                log::debug!("validated and minified {}", rel.display());
                outcome.written.push(rel.clone());
            }
            Err(e) => {
                log::warn!("invalid JSON in {}: {e}", rel.display());
                outcome
                    .warnings
                    .push(format!("invalid JSON in {}: {e}", rel.display()));
            }
        }
    }

    Ok(outcome)
}
