//! Named story feeds: ranked and curated ID lists materialized into items.

use reqwest::StatusCode;

use crate::client::core::Client;
use crate::types::Item;
use crate::{Error, Result};

/// Ranked story feeds, served at `{sort}stories.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorySort {
    Top,
    New,
    Best,
}

impl StorySort {
    fn path(self) -> &'static str {
        match self {
            StorySort::Top => "topstories.json",
            StorySort::New => "newstories.json",
            StorySort::Best => "beststories.json",
        }
    }
}

/// Curated story feeds, served at `{filter}stories.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFilter {
    Ask,
    Show,
    Job,
}

impl StoryFilter {
    fn path(self) -> &'static str {
        match self {
            StoryFilter::Ask => "askstories.json",
            StoryFilter::Show => "showstories.json",
            StoryFilter::Job => "jobstories.json",
        }
    }
}

impl Client {
    pub async fn top_stories(&self) -> Result<Vec<Item>> {
        self.sorted_stories(StorySort::Top).await
    }

    pub async fn new_stories(&self) -> Result<Vec<Item>> {
        self.sorted_stories(StorySort::New).await
    }

    pub async fn best_stories(&self) -> Result<Vec<Item>> {
        self.sorted_stories(StorySort::Best).await
    }

    pub async fn ask_stories(&self) -> Result<Vec<Item>> {
        self.filtered_stories(StoryFilter::Ask).await
    }

    pub async fn show_stories(&self) -> Result<Vec<Item>> {
        self.filtered_stories(StoryFilter::Show).await
    }

    pub async fn job_stories(&self) -> Result<Vec<Item>> {
        self.filtered_stories(StoryFilter::Job).await
    }

    /// Materialize a ranked feed.
    pub async fn sorted_stories(&self, sort: StorySort) -> Result<Vec<Item>> {
        self.stories(sort.path()).await
    }

    /// Materialize a curated feed.
    pub async fn filtered_stories(&self, filter: StoryFilter) -> Result<Vec<Item>> {
        self.stories(filter.path()).await
    }

    /// Fetch a feed's ID list, then resolve it. The list fetch is fatal on any
    /// failure; the item resolution follows the batch partial-failure
    /// contract, so the output is the feed's order minus whatever failed.
    async fn stories(&self, path: &str) -> Result<Vec<Item>> {
        let ids = self.story_ids(path).await?;
        self.items(&ids).await
    }

    async fn story_ids(&self, path: &str) -> Result<Vec<u64>> {
        let (ids, status) = self.transport.get_json::<Vec<u64>>(path).await?;
        if status != StatusCode::OK {
            return Err(Error::unexpected_status(status));
        }
        Ok(ids)
    }
}
