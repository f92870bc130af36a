//! Vizpack - production packaging pipeline for browser-based dashboards.
//!
//! This binary assembles a deployable package from a dashboard source tree:
//! directory layout, validated/minified JSON configuration, a standalone
//! single-file HTML artifact, an integrity manifest, and a compressed archive.

mod cli;
mod descriptor;
mod error;
mod pipeline;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
