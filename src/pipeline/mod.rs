//! Sequential packaging pipeline.
//!
//! # Overview
//!
//! The pipeline turns a dashboard source tree into a deployable package:
//!
//! 1. Recreates the output directory layout ([`layout`])
//! 2. Copies manifest-listed assets ([`assets`])
//! 3. Validates and minifies JSON configuration ([`configs`])
//! 4. Generates launcher scripts, the standalone single-file artifact and
//!    documentation ([`launchers`], [`standalone`], [`docs`])
//! 5. Builds the integrity manifest ([`manifest`], [`checksum`])
//! 6. Writes the timestamped zip archive ([`archive`])
//!
//! Stages run strictly in sequence; each commits fully before the next
//! starts. Only the layout stage and the archive writer can fail the run;
//! everything else degrades to warnings collected in the final
//! [`PackageReport`].
//!
//! The output directory is owned exclusively by one running pipeline. No
//! locking is provided; callers must not run two packaging instances against
//! the same output path concurrently.

mod archive;
mod assets;
mod checksum;
mod configs;
mod docs;
mod error;
mod fs;
mod launchers;
mod layout;
mod manifest;
mod runner;
mod sources;
mod standalone;

pub use error::{Context, Error, ErrorExt, Result};
pub use manifest::{BundleManifest, FileMeta, MANIFEST_FILE};
pub use runner::{PackageReport, Packager, RunStage};
pub use sources::SourceManifest;
pub use standalone::STANDALONE_FILE;
