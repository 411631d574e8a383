//! Materialized `updates.json` delta.

use super::{Item, User};

/// Recently changed items and user profiles, resolved to full records.
#[derive(Debug, Clone, Default)]
pub struct Changes {
    pub items: Vec<Item>,
    pub users: Vec<User>,
}
