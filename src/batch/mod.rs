//! Concurrent batch resolution.
//!
//! This module turns a list of identifiers into a list of resources by
//! fanning the identifiers out to concurrent fetches, joining every outcome,
//! and reassembling the successes in the caller's original order.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`BatchResolver`] | Capped concurrent fan-out with order-preserving reassembly |
//! | [`BatchFailure`] | Per-identifier failures aggregated behind one error value |
//!
//! ## Partial-failure contract
//!
//! A batch where every fetch fails resolves to an error carrying all of the
//! individual failures. A batch where at least one fetch succeeds resolves to
//! the survivors, in input order, and the failures are only reported through a
//! `tracing` warning. A caller requesting 50 resources where 2 fail still gets
//! 48 usable results.
//!
//! ## Example
//!
//! ```rust
//! use hn_client::batch::BatchResolver;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> hn_client::Result<()> {
//! let resolver = BatchResolver::new().with_max_concurrent(8);
//! let doubled = resolver
//!     .resolve_all(&[1u64, 2, 3], |n| {
//!         let n = *n;
//!         async move { Ok(n * 2) }
//!     })
//!     .await?;
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # Ok(())
//! # }
//! ```

mod failure;
mod resolver;

pub use failure::{BatchFailure, FailedResolution};
pub use resolver::BatchResolver;
