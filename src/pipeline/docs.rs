//! Generated package documentation.
//!
//! Renders the package README and installation guide from Handlebars
//! templates, embedding the descriptor verbatim. Content-only output; the
//! docs are never consumed programmatically.

use crate::descriptor::PackageDescriptor;
use crate::pipeline::error::{ErrorExt, Result};
use handlebars::Handlebars;
use std::path::Path;

const README_TEMPLATE: &str = r#"# {{name}}

{{description}}

## Features

{{#each features}}
- {{this}}
{{/each}}

## Quick Start

### Option 1: Server-based (recommended)

```bash
# Windows
launch-dashboard.bat

# macOS/Linux
./launch-dashboard.sh
```

### Option 2: Single file

Open `dashboard-standalone.html` in a modern browser with WebGL support.

## Configuration

Edit the JSON files in the `config/` directory. Invalid documents are
excluded at packaging time; a missing file means built-in defaults apply.

## Package Contents

- `index.html` - main dashboard entry point
- `core/` - core script modules
- `config/` - validated, minified configuration
- `styles/` - style sheets
- `dashboard-standalone.html` - single-file version
- `package-manifest.json` - per-file sizes and checksums
- `tests/` - test suite
- `documentation/` - additional documentation

## Testing

```bash
./run-tests.sh
```

---

**Created**: {{created}}
**Version**: {{version}}
"#;

const INSTALL_TEMPLATE: &str = r#"# Installation Guide

## Prerequisites

1. A modern web browser with WebGL support and hardware acceleration
2. Python 3 for running the bundled server
3. Node.js for running the test suite (optional)

## Installation Steps

### 1. Extract

Extract the {{name}} package ({{version}}) to your desired location.

### 2. Verify integrity (optional)

Compare file checksums against `package-manifest.json`.

### 3. Choose a deployment method

#### Server mode

```bash
./launch-dashboard.sh
```

#### Single file

Open `dashboard-standalone.html` directly in your browser.

## Troubleshooting

- Blank page: enable hardware acceleration and check the browser console.
- Missing configuration: the dashboard falls back to built-in defaults for
  any config file absent from `config/`.
- Modified files: re-verify against `package-manifest.json` before
  reporting rendering problems.
"#;

/// Renders `README.md` and `documentation/INSTALLATION.md`.
pub async fn generate(output_dir: &Path, descriptor: &PackageDescriptor) -> Result<()> {
    log::info!("Generating documentation");

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let data = serde_json::json!({
        "name": descriptor.name,
        "version": descriptor.version,
        "created": descriptor.created,
        "description": descriptor.description,
        "features": descriptor.features,
    });

    let readme = handlebars.render_template(README_TEMPLATE, &data)?;
    let readme_path = output_dir.join("README.md");
    tokio::fs::write(&readme_path, readme)
        .await
        .fs_context("writing README", &readme_path)?;

    let install = handlebars.render_template(INSTALL_TEMPLATE, &data)?;
    let install_path = output_dir.join("documentation").join("INSTALLATION.md");
    tokio::fs::write(&install_path, install)
        .await
        .fs_context("writing installation guide", &install_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn docs_embed_descriptor_fields() {
        let tmp = tempfile::tempdir().unwrap();
        tokio::fs::create_dir_all(tmp.path().join("documentation"))
            .await
            .unwrap();
        let descriptor = PackageDescriptor::builder()
            .name("Test Dashboard")
            .version("2.1.0")
            .description("A test dashboard")
            .features(vec!["WebGL visualizers".to_string(), "JSON config".to_string()])
            .build()
            .unwrap();

        generate(tmp.path(), &descriptor).await.unwrap();

        let readme = tokio::fs::read_to_string(tmp.path().join("README.md"))
            .await
            .unwrap();
        assert!(readme.contains("# Test Dashboard"));
        assert!(readme.contains("**Version**: 2.1.0"));
        assert!(readme.contains("- WebGL visualizers"));

        let install =
            tokio::fs::read_to_string(tmp.path().join("documentation/INSTALLATION.md"))
                .await
                .unwrap();
        assert!(install.contains("Test Dashboard"));
        assert!(install.contains("2.1.0"));
    }
}
