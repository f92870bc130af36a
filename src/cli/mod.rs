//! Command line interface for the packaging pipeline.
//!
//! Parses and validates arguments, builds the immutable package descriptor,
//! runs the pipeline, and reports warnings and results.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::descriptor::PackageDescriptor;
use crate::error::{CliError, Result};
use crate::pipeline::{Packager, SourceManifest};

/// Default feature list embedded into docs and the manifest.
const DEFAULT_FEATURES: &[&str] = &[
    "Multi-face dashboard navigation",
    "WebGL visualizers",
    "JSON configuration system",
    "Standalone single-file build",
    "Integrity-checked deployment packages",
];

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let config = RuntimeConfig::from(&args);
    let out = config.output();

    let descriptor = PackageDescriptor::builder()
        .name(args.name.clone())
        .version(args.package_version.clone())
        .description(args.description.clone())
        .features(DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect())
        .build()?;

    out.info(&format!(
        "Packaging {} v{} from {}",
        descriptor.name,
        descriptor.version,
        args.source_dir.display()
    ));

    let packager = Packager::new(
        descriptor,
        SourceManifest::default(),
        &args.source_dir,
        &args.output_dir,
    );
    let report = packager.run().await?;

    for warning in &report.warnings {
        out.warn(warning);
    }
    if !report.warnings.is_empty() {
        out.info(&format!(
            "{} warning(s); package is best-effort complete",
            report.warnings.len()
        ));
    }

    out.success(&format!("Package directory: {}", report.output_dir.display()));
    out.success(&format!("Archive: {}", report.archive_path.display()));
    if let Some(standalone) = &report.standalone {
        out.verbose(&format!("Standalone artifact: {}", standalone.display()));
    }
    out.info(&format!(
        "{} files, {} MB in {:.1}s",
        report.manifest.total_files,
        report.manifest.size_mb,
        report.duration.as_secs_f64()
    ));

    Ok(0)
}

/// Parse arguments without executing (for testing)
#[allow(dead_code)] // Public API - preserved for external consumers
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Validate arguments without executing (for testing)
#[allow(dead_code)] // Public API - preserved for external consumers
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}
