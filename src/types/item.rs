//! Items: stories, comments, jobs, polls, and poll options.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// One item as served by `item/{id}.json`.
///
/// Fields are optional wherever the API omits them; a bare `{"id": N}` is a
/// valid (deleted or dangling) item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    /// Submission time in unix seconds.
    #[serde(default)]
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub dead: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<u64>,
}

impl Item {
    /// Submission time as a `SystemTime`.
    pub fn posted_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.time.max(0) as u64)
    }

    pub fn is_story(&self) -> bool {
        self.item_type == Some(ItemType::Story)
    }

    pub fn is_comment(&self) -> bool {
        self.item_type == Some(ItemType::Comment)
    }
}

/// Item kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Job,
    Story,
    Comment,
    Poll,
    PollOpt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_story() {
        let body = r#"{
            "id": 8863,
            "type": "story",
            "by": "dhouston",
            "time": 1175714200,
            "kids": [9224, 8952],
            "url": "http://www.getdropbox.com/u/2/screencast.html",
            "score": 104,
            "title": "My YC app: Dropbox - Throw away your USB drive",
            "descendants": 71
        }"#;

        let item: Item = serde_json::from_str(body).unwrap();
        assert_eq!(item.id, 8863);
        assert!(item.is_story());
        assert_eq!(item.by.as_deref(), Some("dhouston"));
        assert_eq!(item.kids, vec![9224, 8952]);
        assert_eq!(item.score, Some(104));
        assert!(!item.deleted);
        assert_eq!(
            item.posted_at(),
            UNIX_EPOCH + Duration::from_secs(1175714200)
        );
    }

    #[test]
    fn decodes_a_sparse_deleted_item() {
        let item: Item = serde_json::from_str(r#"{"id": 101, "deleted": true}"#).unwrap();
        assert_eq!(item.id, 101);
        assert!(item.deleted);
        assert_eq!(item.item_type, None);
        assert!(item.kids.is_empty());
    }

    #[test]
    fn item_type_names_round_trip() {
        for (kind, name) in [
            (ItemType::Job, "\"job\""),
            (ItemType::Story, "\"story\""),
            (ItemType::Comment, "\"comment\""),
            (ItemType::Poll, "\"poll\""),
            (ItemType::PollOpt, "\"pollopt\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), name);
            assert_eq!(serde_json::from_str::<ItemType>(name).unwrap(), kind);
        }
    }
}
