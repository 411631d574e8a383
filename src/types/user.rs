//! User profiles.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// One user profile as served by `user/{id}.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Account creation time in unix seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub karma: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submitted: Vec<u64>,
}

impl User {
    /// Account creation time as a `SystemTime`.
    pub fn created_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.created.max(0) as u64)
    }
}
