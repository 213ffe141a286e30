use crate::constants::{SDK_ENV_VAR, SDK_INSTALL_ROOT};
use crate::types::SdkVersion;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Where the LunarG installer places a given SDK version.
pub fn sdk_install_path(version: &SdkVersion) -> String {
    format!(r"{SDK_INSTALL_ROOT}\{version}")
}

/// Exports `VULKAN_SDK` to later GitHub Actions steps.
pub struct GithubActions {
    /// Value of `GITHUB_ENV`, the file runners read environment exports from.
    env_file: Option<PathBuf>,
}

impl GithubActions {
    pub fn new(env_file: Option<PathBuf>) -> Self {
        Self { env_file }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var_os("GITHUB_ENV").map(PathBuf::from))
    }

    pub fn set_env_directive(name: &str, value: &str) -> String {
        format!("::set-env name={name}::{value}")
    }

    /// Prints the `set-env` workflow command and, when the runner exposes one, appends the
    /// same assignment to the `GITHUB_ENV` file.
    pub fn export_sdk<W: Write>(&self, version: &SdkVersion, out: &mut W) -> Result<()> {
        let path = sdk_install_path(version);

        writeln!(out, "{}", Self::set_env_directive(SDK_ENV_VAR, &path))?;

        if let Some(env_file) = &self.env_file {
            debug!("Appending {} to {:?}", SDK_ENV_VAR, env_file);
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(env_file)
                .with_context(|| format!("Failed to open GITHUB_ENV file {:?}", env_file))?;
            writeln!(file, "{SDK_ENV_VAR}={path}")?;
        }

        Ok(())
    }
}
