use crate::types::SdkVersion;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::fmt::{self, Display, Formatter};
use url::Url;

/// A URL built by this crate from a fixed endpoint and, at most, a validated `SdkVersion`.
#[derive(Clone, Debug)]
pub struct TrustedUrl(Url);

impl TrustedUrl {
    pub fn version_marker(endpoint: &str) -> Result<Self> {
        let url = endpoint
            .parse()
            .with_context(|| format!("Invalid version marker URL: {endpoint}"))?;
        Ok(Self(url))
    }

    /// `{base}/{version}/windows/VulkanSDK-{version}-Installer.exe`
    pub fn sdk_installer(base: &str, version: &SdkVersion) -> Result<Self> {
        let base = base.trim_end_matches('/');
        let url = format!("{base}/{version}/windows/VulkanSDK-{version}-Installer.exe");

        let url = url
            .parse()
            .with_context(|| format!("Invalid installer URL: {url}"))?;

        Ok(Self(url))
    }

    /// SAFETY: we only open URLs assembled from fixed endpoints
    pub async fn get(&self, client: &Client) -> Result<Response> {
        Ok(client.get(self.0.clone()).send().await?)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TrustedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SDK_DOWNLOAD_BASE_URL, VERSION_MARKER_URL};

    #[test]
    fn test_sdk_installer_url() {
        let version: SdkVersion = "1.2.3.4".parse().unwrap();
        let url = TrustedUrl::sdk_installer(SDK_DOWNLOAD_BASE_URL, &version).unwrap();
        assert_eq!(
            url.as_str(),
            "https://sdk.lunarg.com/sdk/download/1.2.3.4/windows/VulkanSDK-1.2.3.4-Installer.exe"
        );
    }

    #[test]
    fn test_sdk_installer_url_uses_trimmed_version() {
        let version: SdkVersion = "1.3.290.0\n".parse().unwrap();
        let url = TrustedUrl::sdk_installer("http://127.0.0.1:8080/mirror/", &version).unwrap();
        assert_eq!(
            url.to_string(),
            "http://127.0.0.1:8080/mirror/1.3.290.0/windows/VulkanSDK-1.3.290.0-Installer.exe"
        );
    }

    #[test]
    fn test_version_marker_url() {
        let url = TrustedUrl::version_marker(VERSION_MARKER_URL).unwrap();
        assert_eq!(url.as_str(), VERSION_MARKER_URL);
        assert!(TrustedUrl::version_marker("not a url").is_err());
    }
}
