//! # hn-client
//!
//! Async, read-only client for the Hacker News Firebase API.
//!
//! ## Overview
//!
//! The API serves a tree of items (stories, comments, jobs, polls) and user
//! profiles that cross-reference each other by ID. This crate fetches single
//! resources and, more importantly, resolves whole ID lists concurrently with
//! partial-failure tolerance: a feed of 500 stories where a handful of fetches
//! fail still materializes into the stories that resolved, in feed order.
//!
//! ## Key Features
//!
//! - **Single resources**: [`Client::item`], [`Client::user`],
//!   [`Client::max_item_id`]
//! - **Batch resolution**: [`Client::items`] and [`Client::users`] fan out
//!   concurrent fetches through [`batch::BatchResolver`], preserving input
//!   order and absorbing per-ID failures
//! - **Story feeds**: top/new/best and ask/show/job collections
//! - **Change feed**: [`Client::changes`] resolves the `updates.json` delta
//!   into full items and profiles
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hn_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> hn_client::Result<()> {
//!     let client = Client::new()?;
//!
//!     let stories = client.top_stories().await?;
//!     for story in stories.iter().take(10) {
//!         println!("{}", story.title.as_deref().unwrap_or("(untitled)"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Public client and its builder |
//! | [`batch`] | Concurrent batch resolution and failure aggregation |
//! | [`transport`] | Single-resource HTTP fetch primitive |
//! | [`types`] | Data records (items, users, changes) |

pub mod batch;
pub mod client;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use batch::{BatchFailure, BatchResolver};
pub use client::{Client, ClientBuilder, StoryFilter, StorySort};
pub use types::{Changes, Item, ItemType, User};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
