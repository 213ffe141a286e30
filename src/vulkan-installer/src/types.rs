use anyhow::{bail, Result};
use clap::Parser;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "vulkan-sdk-installer",
    version,
    about = "Downloads and silently installs the latest Vulkan SDK on Windows"
)]
pub struct InstallVulkanSdkCli {
    /// Export the installed SDK location as `VULKAN_SDK` for subsequent GitHub Actions steps.
    #[arg(long)]
    pub gh_actions: bool,

    /// Remove the downloaded installer even if the installation fails.
    #[arg(long)]
    pub clean_on_failure: bool,
}

/// A Vulkan SDK release identifier such as `1.3.290.0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdkVersion(String);

impl SdkVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SdkVersion {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let version = input.trim();

        if version.is_empty() {
            bail!("empty SDK version");
        }

        let valid = version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            bail!("malformed SDK version: {:?}", version);
        }

        Ok(Self(version.to_string()))
    }
}

impl Display for SdkVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exit status reported by the installer process. `code` is `None` when the process was
/// terminated without one (e.g. by a signal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstallerExit {
    pub code: Option<i32>,
}

impl InstallerExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl Display for InstallerExit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("terminated without an exit code"),
        }
    }
}

#[derive(Debug)]
pub enum InstallOutcome {
    /// The host is not a Windows machine; nothing was downloaded or written.
    UnsupportedPlatform { os: String },
    Installed {
        version: SdkVersion,
    },
    InstallerFailed {
        version: SdkVersion,
        exit: InstallerExit,
        /// Temporary directory left on disk for inspection, if it was preserved.
        preserved_dir: Option<PathBuf>,
    },
}

impl InstallOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Installed { .. } => 0,
            Self::UnsupportedPlatform { .. } | Self::InstallerFailed { .. } => 1,
        }
    }
}
