use super::url::TrustedUrl;
use crate::types::SdkVersion;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

/// Looks up the SDK version to install.
#[async_trait::async_trait]
pub trait VersionResolver: Send + Sync {
    async fn resolve(&self) -> Result<SdkVersion>;
}

/// Reads the plain-text "latest version" marker published by LunarG.
pub struct HttpVersionResolver {
    client: Client,
    url: TrustedUrl,
}

impl HttpVersionResolver {
    pub fn new(client: Client, url: TrustedUrl) -> Self {
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl VersionResolver for HttpVersionResolver {
    async fn resolve(&self) -> Result<SdkVersion> {
        debug!("Fetching version marker from {}", self.url);

        let body = self
            .url
            .get(&self.client)
            .await
            .context("Failed to request the latest SDK version")?
            .error_for_status()
            .context("Version marker request failed")?
            .text()
            .await
            .context("Failed to read the version marker body")?;

        body.parse()
    }
}
