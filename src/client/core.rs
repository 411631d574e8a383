use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::batch::BatchResolver;
use crate::transport::HttpTransport;
use crate::types::{Item, User};
use crate::{Error, Result};

const API_PATH_ITEM: &str = "item";
const API_PATH_USER: &str = "user";
const API_PATH_MAX_ITEM: &str = "maxitem.json";

/// Read-only handle to the Hacker News API.
pub struct Client {
    pub(crate) transport: HttpTransport,
    pub(crate) resolver: BatchResolver,
}

impl Client {
    /// Build a client against the public API with default settings.
    pub fn new() -> Result<Self> {
        crate::client::ClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::ClientBuilder {
        crate::client::ClientBuilder::new()
    }

    /// Fetch one item by numeric ID.
    pub async fn item(&self, id: u64) -> Result<Item> {
        let path = format!("{}/{}.json", API_PATH_ITEM, id);
        self.fetch_resource(&path, id).await
    }

    /// Fetch one user profile by username.
    pub async fn user(&self, id: &str) -> Result<User> {
        let path = format!("{}/{}.json", API_PATH_USER, id);
        self.fetch_resource(&path, id).await
    }

    /// Highest item ID currently known to the API.
    pub async fn max_item_id(&self) -> Result<u64> {
        let (id, status) = self.transport.get_json::<u64>(API_PATH_MAX_ITEM).await?;
        if status != StatusCode::OK {
            return Err(Error::unexpected_status(status));
        }
        Ok(id)
    }

    /// Fetch many items concurrently.
    ///
    /// Follows the batch contract: successes come back in input order, failed
    /// IDs are dropped, and only a batch with zero successes is an error.
    pub async fn items(&self, ids: &[u64]) -> Result<Vec<Item>> {
        self.resolver.resolve_all(ids, |id| self.item(*id)).await
    }

    /// Fetch many user profiles concurrently, under the same contract as
    /// [`items`](Self::items).
    pub async fn users(&self, ids: &[String]) -> Result<Vec<User>> {
        self.resolver.resolve_all(ids, |id| self.user(id)).await
    }

    /// One resource GET with status checking and null-body detection.
    async fn fetch_resource<T, I>(&self, path: &str, id: I) -> Result<T>
    where
        T: DeserializeOwned,
        I: ToString,
    {
        let (payload, status) = self.transport.get_json::<Option<T>>(path).await?;
        if status != StatusCode::OK {
            return Err(Error::unexpected_status(status));
        }
        payload.ok_or_else(|| Error::NotFound { id: id.to_string() })
    }
}
