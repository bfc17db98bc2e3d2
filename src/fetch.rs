//! HTTP retrieval of the reference images.
//!
//! One GET per job, no retries, no redirect following. Success is exactly
//! HTTP 200; everything else — redirects included — is a [`FetchError`]
//! carrying the URL, so a failed job names the reference image it wanted.

use std::time::Duration;
use thiserror::Error;

/// Where the reference images live. Overridable per run (`--base-url`),
/// which is how tests point the generator at a local stub server.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/recurser/exif-orientation-examples/refs/heads/master";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to get '{url}' ({status})")]
    Status { url: String, status: u16 },

    #[error("request for '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin wrapper around a shared [`reqwest::Client`]. Cheap to clone.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Fetch `url`, returning the body bytes of a 200 response.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;
        Ok(body.to_vec())
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
