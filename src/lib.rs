//! Packaging pipeline library for browser-based visualization dashboards.
//!
//! This library assembles a self-contained deployable package from a larger
//! source tree:
//! - a clean output directory with a fixed layout and a canonical `index.html`
//! - validated and minified JSON configuration documents
//! - a standalone single-file HTML artifact embedding scripts, styles and config
//! - a `package-manifest.json` integrity record (per-file size + checksum)
//! - a timestamped, compressed zip archive of the whole tree
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod descriptor;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use descriptor::PackageDescriptor;
pub use error::{CliError, PackagerError, Result};
pub use pipeline::{BundleManifest, PackageReport, Packager, SourceManifest};
