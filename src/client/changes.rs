//! The `updates.json` delta feed.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::client::core::Client;
use crate::types::Changes;
use crate::{Error, Result};

const API_PATH_UPDATES: &str = "updates.json";

/// Raw delta document: two parallel identifier lists.
#[derive(Debug, Default, Deserialize)]
struct UpdatesDoc {
    #[serde(default)]
    items: Vec<u64>,
    #[serde(default)]
    profiles: Vec<String>,
}

impl Client {
    /// Recently changed items and user profiles, resolved to full records.
    ///
    /// Fetching the delta document is fatal on failure. The two ID lists are
    /// then resolved concurrently; a full-batch failure of either list fails
    /// the whole call and cancels the other resolution.
    pub async fn changes(&self) -> Result<Changes> {
        let (doc, status) = self.transport.get_json::<UpdatesDoc>(API_PATH_UPDATES).await?;
        if status != StatusCode::OK {
            return Err(Error::unexpected_status(status));
        }

        let (items, users) = tokio::try_join!(self.items(&doc.items), self.users(&doc.profiles))?;

        Ok(Changes { items, users })
    }
}
