use super::fetcher::{HttpInstallerFetcher, InstallerFetcher};
use super::resolver::{HttpVersionResolver, VersionResolver};
use super::runner::{InstallerRunner, ProcessRunner};
use super::url::TrustedUrl;
use crate::ci::GithubActions;
use crate::config::InstallerConfig;
use crate::constants::{INSTALLER_FILE_NAME, SILENT_INSTALL_FLAG};
use crate::fs::TrustedDir;
use crate::platform::PlatformInfo;
use crate::types::InstallOutcome;
use crate::utils::{print_message, print_title, TagColor};
use crate::{error_message, success_message, warning_message};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info, warn};

pub struct Installer {
    pub platform: PlatformInfo,
    pub download_base_url: String,
    pub keep_temp_on_failure: bool,
    pub resolver: Box<dyn VersionResolver>,
    pub fetcher: Box<dyn InstallerFetcher>,
    pub runner: Box<dyn InstallerRunner>,
}

impl Installer {
    /// Wires the HTTP resolver, HTTP fetcher and process runner from `config`.
    pub fn from_config(platform: PlatformInfo, config: &InstallerConfig) -> Result<Self> {
        let client = super::http_client()?;
        let marker_url = TrustedUrl::version_marker(&config.version_url)?;

        Ok(Self {
            platform,
            download_base_url: config.download_base_url.clone(),
            keep_temp_on_failure: config.keep_temp_on_failure,
            resolver: Box::new(HttpVersionResolver::new(client.clone(), marker_url)),
            fetcher: Box::new(HttpInstallerFetcher::new(client)),
            runner: Box::new(ProcessRunner),
        })
    }

    /// Executes the SDK install:
    /// - Refuses to do anything on a non-Windows host
    /// - Resolves the latest SDK version
    /// - Downloads the installer into a fresh temporary directory
    /// - Runs it silently and removes the temporary directory if it succeeded
    pub async fn run(&self) -> Result<InstallOutcome> {
        if !self.platform.is_supported() {
            warn!("Refusing to install on {:?}", self.platform.os);
            return Ok(InstallOutcome::UnsupportedPlatform {
                os: self.platform.full_os.clone(),
            });
        }

        let version = self
            .resolver
            .resolve()
            .await
            .context("Failed to resolve the latest Vulkan SDK version")?;
        info!("Resolved Vulkan SDK version {}", version);
        print_message("VERSION", version.as_str(), TagColor::Cyan);

        let url = TrustedUrl::sdk_installer(&self.download_base_url, &version)?;
        let temp_dir = TrustedDir::tempdir()?;
        debug!("Created temporary directory {}", temp_dir);

        print_message("DOWNLOADING", url.as_str(), TagColor::Blue);
        let payload = self
            .fetcher
            .fetch(&url)
            .await
            .with_context(|| format!("Failed to download installer from {url}"))?;

        let installer = temp_dir.join_file(INSTALLER_FILE_NAME)?;
        installer.write_async(&payload).await?;
        info!("Wrote {} bytes to {}", payload.len(), installer);
        drop(payload);

        print_message("INSTALLING", &installer.to_string(), TagColor::Blue);
        let exit = self
            .runner
            .run(installer.as_path(), &[SILENT_INSTALL_FLAG])
            .await?;
        info!("Installer finished with {}", exit);

        if !exit.success() {
            let preserved_dir = if self.keep_temp_on_failure {
                let dir = temp_dir.preserve();
                Some(dir.as_path()?)
            } else {
                temp_dir.remove()?;
                None
            };

            return Ok(InstallOutcome::InstallerFailed {
                version,
                exit,
                preserved_dir,
            });
        }

        temp_dir.remove()?;
        debug!("Removed temporary directory");

        Ok(InstallOutcome::Installed { version })
    }
}

/// Prints the result of a run. `github` is set when `--gh-actions` was passed and only
/// matters for a successful install.
pub fn report_outcome<W: Write>(
    outcome: &InstallOutcome,
    github: Option<&GithubActions>,
    out: &mut W,
) -> Result<()> {
    match outcome {
        InstallOutcome::UnsupportedPlatform { os } => {
            writeln!(out, "This installer must only be run on Windows! (detected: {os})")?;
        }
        InstallOutcome::InstallerFailed {
            version,
            exit,
            preserved_dir,
        } => {
            error_message!("Vulkan SDK {} installer failed with {}", version, exit);
            if let Some(dir) = preserved_dir {
                warning_message!("Installer left in {} for inspection", dir.display());
            }
        }
        InstallOutcome::Installed { version } => {
            success_message!("Vulkan SDK {} installed", version);
            if let Some(github) = github {
                print_title("GitHub Actions");
                github.export_sdk(version, out)?;
            }
        }
    }
    Ok(())
}
