use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_LOG_LEVEL, SDK_DOWNLOAD_BASE_URL, VERSION_MARKER_URL,
};
use anyhow::{Context, Result};
use config::{Config as RConfig, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InstallerConfig {
    /// Plain-text endpoint returning the latest Windows SDK version.
    pub version_url: String,
    /// Root under which `{version}/windows/VulkanSDK-{version}-Installer.exe` is served.
    pub download_base_url: String,
    pub log_level: String,
    /// Leave the temporary directory on disk when the installer fails.
    pub keep_temp_on_failure: bool,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Builds the configuration from defaults, overridden by `VULKAN_INSTALLER_*` environment
    /// variables.
    pub fn load() -> Result<InstallerConfig> {
        let builder = Self::defaults()?.add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        builder
            .build()?
            .try_deserialize()
            .context("failed to parse installer configuration")
    }

    #[cfg(test)]
    fn load_default_config() -> Result<InstallerConfig> {
        Self::defaults()?
            .build()?
            .try_deserialize()
            .context("failed to parse installer configuration")
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(RConfig::builder()
            .set_default("version_url", VERSION_MARKER_URL)?
            .set_default("download_base_url", SDK_DOWNLOAD_BASE_URL)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("keep_temp_on_failure", true)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = ConfigLoader::load_default_config().unwrap();
        assert_eq!(config.version_url, VERSION_MARKER_URL);
        assert_eq!(config.download_base_url, SDK_DOWNLOAD_BASE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.keep_temp_on_failure);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("VULKAN_INSTALLER_VERSION_URL", "http://127.0.0.1:9/latest.txt");
        std::env::set_var("VULKAN_INSTALLER_KEEP_TEMP_ON_FAILURE", "false");

        let config = ConfigLoader::load();

        std::env::remove_var("VULKAN_INSTALLER_VERSION_URL");
        std::env::remove_var("VULKAN_INSTALLER_KEEP_TEMP_ON_FAILURE");

        let config = config.unwrap();
        assert_eq!(config.version_url, "http://127.0.0.1:9/latest.txt");
        assert_eq!(config.download_base_url, SDK_DOWNLOAD_BASE_URL);
        assert!(!config.keep_temp_on_failure);
    }

    #[test]
    #[serial]
    fn test_load_without_overrides_matches_defaults() {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.version_url, VERSION_MARKER_URL);
    }
}
