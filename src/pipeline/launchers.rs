//! Launcher script generation.
//!
//! Writes small cross-platform launchers at the output root so the packaged
//! dashboard can be started without remembering server invocations.

use crate::descriptor::PackageDescriptor;
use crate::pipeline::error::{ErrorExt, Result};
use std::path::Path;

/// Generates `launch-dashboard.bat`, `launch-dashboard.sh` and
/// `run-tests.sh` at the output root. Shell scripts are marked executable
/// on Unix.
pub async fn create_launchers(output_dir: &Path, descriptor: &PackageDescriptor) -> Result<()> {
    log::info!("Creating launcher scripts");

    let windows_script = format!(
        "@echo off\r\necho Starting {name}...\r\necho =========================================\r\n\r\npython server.py\r\npause\r\n",
        name = descriptor.name
    );
    write_script(&output_dir.join("launch-dashboard.bat"), &windows_script, false).await?;

    let unix_script = format!(
        "#!/bin/bash\necho \"Starting {name}...\"\necho \"=========================================\"\n\npython3 server.py\n",
        name = descriptor.name
    );
    write_script(&output_dir.join("launch-dashboard.sh"), &unix_script, true).await?;

    let test_script = format!(
        "#!/bin/bash\necho \"Running {name} tests...\"\necho \"==================================\"\n\ncd tests\nnode test-system.js\n",
        name = descriptor.name
    );
    write_script(&output_dir.join("run-tests.sh"), &test_script, true).await?;

    Ok(())
}

async fn write_script(path: &Path, content: &str, executable: bool) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .fs_context("writing launcher script", path)?;

    #[cfg(unix)]
    if executable {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .await
            .fs_context("setting launcher permissions", path)?;
    }

    #[cfg(not(unix))]
    let _ = executable;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn launchers_are_written_and_executable() {
        let tmp = tempfile::tempdir().unwrap();
        let descriptor = PackageDescriptor::builder()
            .name("Test Dashboard")
            .version("1.0.0")
            .build()
            .unwrap();

        create_launchers(tmp.path(), &descriptor).await.unwrap();

        let sh = tmp.path().join("launch-dashboard.sh");
        let content = tokio::fs::read_to_string(&sh).await.unwrap();
        assert!(content.contains("Test Dashboard"));
        assert!(tmp.path().join("launch-dashboard.bat").is_file());
        assert!(tmp.path().join("run-tests.sh").is_file());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = tokio::fs::metadata(&sh).await.unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }
}
