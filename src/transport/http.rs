use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Error, Result};

/// HTTP fetch primitive bound to one base URL.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport with its own HTTP client and the given per-request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Self::with_client(base_url, client)
    }

    /// Build a transport around a preconfigured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| Error::configuration(format!("error parsing base URL: {}", e)))?;

        // Url::join drops the last path segment unless it ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    ///
    /// Returns the decoded payload together with the response status; status
    /// interpretation is left to the caller.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<(T, StatusCode)> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::configuration(format!("error building URL for {:?}: {}", path, e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::Http)?;
        let status = response.status();

        let body = response.bytes().await.map_err(TransportError::Http)?;
        let payload = serde_json::from_slice(&body)?;

        Ok((payload, status))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
