//! Package metadata descriptor.

use chrono::Utc;

use crate::pipeline::{Context, Result};

/// Package metadata embedded into generated documentation and the manifest.
///
/// Immutable once constructed; every pipeline stage receives it by reference
/// rather than mutating shared packager state.
///
/// # Examples
///
/// ```no_run
/// use vizpack::descriptor::PackageDescriptor;
///
/// # fn example() -> vizpack::pipeline::Result<()> {
/// let descriptor = PackageDescriptor::builder()
///     .name("My Dashboard")
///     .version("1.0.0")
///     .description("A WebGL visualization dashboard")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PackageDescriptor {
    /// Product name displayed to users.
    pub name: String,

    /// Version string in semantic versioning format.
    pub version: String,

    /// Creation timestamp, UTC, human readable.
    pub created: String,

    /// Brief description of the package.
    pub description: String,

    /// Ordered feature list embedded into docs and the manifest.
    pub features: Vec<String>,
}

impl PackageDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// File-name friendly form of the package name, used in archive names.
    ///
    /// Lowercases the name and collapses runs of non-alphanumeric characters
    /// into single hyphens: `"My Dashboard"` becomes `"my-dashboard"`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }
}

/// Builder for constructing [`PackageDescriptor`].
#[derive(Default)]
pub struct DescriptorBuilder {
    name: Option<String>,
    version: Option<String>,
    created: Option<String>,
    description: Option<String>,
    features: Vec<String>,
}

impl DescriptorBuilder {
    /// Sets the product name.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the version string.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Overrides the creation timestamp.
    ///
    /// Default: current UTC time at `build()`.
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Sets the package description.
    ///
    /// Default: empty string.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the ordered feature list.
    ///
    /// Default: empty.
    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `version` is missing.
    pub fn build(self) -> Result<PackageDescriptor> {
        let created = self
            .created
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string());

        Ok(PackageDescriptor {
            name: self.name.context("name is required")?,
            version: self.version.context("version is required")?,
            created,
            description: self.description.unwrap_or_default(),
            features: self.features,
        })
    }
}
