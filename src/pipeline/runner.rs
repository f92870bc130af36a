//! Pipeline orchestration.

use crate::descriptor::PackageDescriptor;
use crate::pipeline::error::Result;
use crate::pipeline::manifest::BundleManifest;
use crate::pipeline::sources::SourceManifest;
use crate::pipeline::{archive, assets, configs, docs, launchers, layout, manifest, standalone};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Stages of a packaging run, in order.
///
/// Any stage may emit non-fatal warnings; only the directory-assembly stage
/// and the archive writer abort the run on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStage {
    /// Packager constructed, nothing on disk yet
    Initialized,
    /// Output layout destroyed and recreated
    DirectoryReady,
    /// Manifest-listed assets copied
    AssetsCopied,
    /// Configuration validated and minified
    ConfigProcessed,
    /// Launchers, standalone artifact and docs written
    DerivedArtifactsGenerated,
    /// Integrity manifest written
    ManifestBuilt,
    /// Zip archive written
    Archived,
    /// Run complete
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Initialized => "initialized",
            RunStage::DirectoryReady => "directory-ready",
            RunStage::AssetsCopied => "assets-copied",
            RunStage::ConfigProcessed => "config-processed",
            RunStage::DerivedArtifactsGenerated => "derived-artifacts-generated",
            RunStage::ManifestBuilt => "manifest-built",
            RunStage::Archived => "archived",
            RunStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Summary of a completed packaging run.
#[derive(Debug)]
pub struct PackageReport {
    /// The assembled package directory
    pub output_dir: PathBuf,
    /// The timestamped zip archive
    pub archive_path: PathBuf,
    /// The standalone artifact, when it was produced
    pub standalone: Option<PathBuf>,
    /// The integrity manifest that was written
    pub manifest: BundleManifest,
    /// Non-fatal warnings collected across all stages
    pub warnings: Vec<String>,
    /// Wall-clock build time
    pub duration: Duration,
}

/// Sequential packaging pipeline runner.
///
/// Owns the entire output directory tree for the duration of a run. Stages
/// execute strictly in order; each commits fully before the next starts.
///
/// # Examples
///
/// ```no_run
/// use vizpack::descriptor::PackageDescriptor;
/// use vizpack::pipeline::{Packager, SourceManifest};
///
/// # async fn example() -> vizpack::pipeline::Result<()> {
/// let descriptor = PackageDescriptor::builder()
///     .name("My Dashboard")
///     .version("1.0.0")
///     .build()?;
///
/// let packager = Packager::new(descriptor, SourceManifest::default(), ".", "production-package");
/// let report = packager.run().await?;
/// println!("{} files packaged", report.manifest.total_files);
/// # Ok(())
/// # }
/// ```
pub struct Packager {
    descriptor: PackageDescriptor,
    sources: SourceManifest,
    source_dir: PathBuf,
    output_dir: PathBuf,
    stage: RunStage,
}

impl Packager {
    /// Creates a packager for one source tree and output root.
    pub fn new(
        descriptor: PackageDescriptor,
        sources: SourceManifest,
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            descriptor,
            sources,
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            stage: RunStage::Initialized,
        }
    }

    /// Current stage of the run.
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn stage(&self) -> RunStage {
        self.stage
    }

    /// Executes the full pipeline and returns the run report.
    ///
    /// Per-file problems surface as warnings in the report; an `Err` here
    /// means the output directory could not be prepared, a write to the
    /// prepared tree failed, or the archive could not be created.
    pub async fn run(mut self) -> Result<PackageReport> {
        let started = std::time::Instant::now();
        let mut warnings = Vec::new();

        layout::assemble(&self.output_dir).await?;
        self.advance(RunStage::DirectoryReady);

        let copied = assets::copy_assets(&self.source_dir, &self.output_dir, &self.sources).await?;
        warnings.extend(copied.warnings);
        self.advance(RunStage::AssetsCopied);

        let config_outcome =
            configs::process_configs(&self.source_dir, &self.output_dir, &self.sources).await?;
        warnings.extend(config_outcome.warnings.clone());
        self.advance(RunStage::ConfigProcessed);

        launchers::create_launchers(&self.output_dir, &self.descriptor).await?;
        let standalone_outcome =
            standalone::generate(&self.output_dir, &self.sources, &config_outcome.written).await;
        warnings.extend(standalone_outcome.warnings);
        docs::generate(&self.output_dir, &self.descriptor).await?;
        self.advance(RunStage::DerivedArtifactsGenerated);

        let bundle_manifest = manifest::build(&self.output_dir, &self.descriptor).await?;
        manifest::write(&self.output_dir, &bundle_manifest).await?;
        self.advance(RunStage::ManifestBuilt);

        let archive_path = archive::create(&self.output_dir, &self.descriptor.slug()).await?;
        self.advance(RunStage::Archived);

        self.advance(RunStage::Done);
        Ok(PackageReport {
            output_dir: self.output_dir,
            archive_path,
            standalone: standalone_outcome.artifact,
            manifest: bundle_manifest,
            warnings,
            duration: started.elapsed(),
        })
    }

    fn advance(&mut self, stage: RunStage) {
        log::debug!("stage: {} -> {}", self.stage, stage);
        self.stage = stage;
    }
}
