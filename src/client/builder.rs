use std::time::Duration;

use crate::batch::BatchResolver;
use crate::client::core::Client;
use crate::transport::HttpTransport;
use crate::Result;

const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    max_concurrent: Option<usize>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_concurrent: None,
            http_client: None,
        }
    }

    /// Override the base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout applied to the underlying HTTP client.
    ///
    /// Ignored when a client is injected via
    /// [`http_client`](Self::http_client); deadlines then belong to that
    /// client's own configuration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap on concurrently in-flight fetches within one batch.
    pub fn max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = Some(n);
        self
    }

    /// Inject a preconfigured `reqwest::Client` (custom pooling, proxies).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(base_url, client)?,
            None => HttpTransport::new(base_url, self.timeout)?,
        };

        let mut resolver = BatchResolver::new();
        if let Some(n) = self.max_concurrent {
            resolver = resolver.with_max_concurrent(n);
        }

        Ok(Client {
            transport,
            resolver,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
