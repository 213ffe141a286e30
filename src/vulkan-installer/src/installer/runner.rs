use crate::types::InstallerExit;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Executes the downloaded installer and reports how it exited.
#[async_trait::async_trait]
pub trait InstallerRunner: Send + Sync {
    async fn run(&self, installer: &Path, args: &[&str]) -> Result<InstallerExit>;
}

/// Launches the installer directly with an argument vector; no shell is involved.
pub struct ProcessRunner;

#[async_trait::async_trait]
impl InstallerRunner for ProcessRunner {
    async fn run(&self, installer: &Path, args: &[&str]) -> Result<InstallerExit> {
        let status = Command::new(installer)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .await
            .with_context(|| format!("Failed to launch installer {:?}", installer))?;

        Ok(InstallerExit {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let program = which::which("true").unwrap();
        let exit = ProcessRunner.run(&program, &["/S"]).await.unwrap();
        assert!(exit.success());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let program = which::which("false").unwrap();
        let exit = ProcessRunner.run(&program, &["/S"]).await.unwrap();
        assert_eq!(exit.code, Some(1));
        assert!(!exit.success());
    }

    #[tokio::test]
    async fn test_missing_installer_is_an_error() {
        let result = ProcessRunner
            .run(Path::new("/nonexistent/vulkan-installer.exe"), &["/S"])
            .await;
        assert!(result.is_err());
    }
}
