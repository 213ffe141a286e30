mod fetcher;
mod install;
mod resolver;
mod runner;
mod url;

pub use fetcher::{HttpInstallerFetcher, InstallerFetcher};
pub use install::{report_outcome, Installer};
pub use resolver::{HttpVersionResolver, VersionResolver};
pub use runner::{InstallerRunner, ProcessRunner};
pub use url::TrustedUrl;

use anyhow::{Context, Result};
use reqwest::redirect::Policy;
use reqwest::Client;

/// Shared client for both downloads. Redirects are followed; no timeout is set.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .redirect(Policy::limited(10))
        .build()
        .context("Failed to build HTTP client")
}
