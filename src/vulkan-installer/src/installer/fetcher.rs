use super::url::TrustedUrl;
use anyhow::{Context, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

/// Downloads the installer payload.
#[async_trait::async_trait]
pub trait InstallerFetcher: Send + Sync {
    async fn fetch(&self, url: &TrustedUrl) -> Result<Vec<u8>>;
}

pub struct HttpInstallerFetcher {
    client: Client,
}

impl HttpInstallerFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl InstallerFetcher for HttpInstallerFetcher {
    /// The whole payload is buffered in memory; it is written to disk in one go by the caller.
    /// `Content-Length` only drives the progress bar, it is never trusted for allocation.
    async fn fetch(&self, url: &TrustedUrl) -> Result<Vec<u8>> {
        let response = url
            .get(&self.client)
            .await
            .context("Failed to initiate download")?
            .error_for_status()
            .context("Download request failed, installer not found")?;

        let total = response.content_length().unwrap_or(0);

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )?
        );

        let mut payload = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Download interrupted")?;
            payload.extend_from_slice(&chunk);
            pb.inc(chunk.len() as u64);
        }

        pb.finish_with_message("Download complete");

        Ok(payload)
    }
}
