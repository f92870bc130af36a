//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Packaging pipeline for browser-based visualization dashboards
#[derive(Parser, Debug)]
#[command(
    name = "vizpack",
    version,
    about = "Packaging pipeline for browser-based visualization dashboards",
    long_about = "Assembles a deployable dashboard package from a source tree.

Recreates a clean output layout, copies manifest-listed assets, validates and
minifies JSON configuration, generates launcher scripts, a standalone
single-file HTML artifact and documentation, writes a package-manifest.json
integrity record, and zips the result.

Usage:
  vizpack --source-dir . --output-dir production-package
  vizpack -s ./dashboard -o ./dist --name \"My Dashboard\" --package-version 2.0.0

Exit code 0 = package directory and archive exist; per-file problems are
reported as warnings and do not change the exit code."
)]
pub struct Args {
    /// Source tree to package
    #[arg(short = 's', long, value_name = "DIR", default_value = ".")]
    pub source_dir: PathBuf,

    /// Output directory for the assembled package
    ///
    /// Any pre-existing tree at this path is destroyed and recreated.
    /// The zip archive is written next to this directory.
    #[arg(short = 'o', long, value_name = "DIR", default_value = "production-package")]
    pub output_dir: PathBuf,

    /// Package name embedded in the manifest and generated docs
    #[arg(long, value_name = "NAME", default_value = "Visualization Dashboard")]
    pub name: String,

    /// Package version embedded in the manifest and generated docs
    #[arg(long, value_name = "VERSION", default_value = "1.0.0")]
    pub package_version: String,

    /// Package description embedded in the manifest and generated docs
    #[arg(
        long,
        value_name = "TEXT",
        default_value = "Browser-based visualization dashboard with WebGL renderers"
    )]
    pub description: String,

    /// Suppress progress output (warnings and errors still print)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Package name cannot be empty".to_string());
        }

        if self.output_dir == self.source_dir {
            return Err(
                "Output directory cannot be the source directory: the output tree is destroyed before packaging".to_string(),
            );
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for styled terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(
            log::log_enabled!(log::Level::Debug),
            args.quiet,
        );

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
