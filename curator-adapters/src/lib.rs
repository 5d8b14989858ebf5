//! # curator-adapters
//!
//! Pre-built collectors for gathering team activity counts from popular
//! platforms, plus the Claude-backed narrative advisor.
//!
//! Collectors report *partial* counts - only the fields their platform can
//! see - and the [`Aggregator`] sums them field-wise into one
//! [`ActivitySnapshot`](curator_types::ActivitySnapshot). The counter schema
//! is fixed; a source reporting unknown keys fails deserialization instead
//! of being silently absorbed.
//!
//! ## Supported Platforms
//!
//! - **Slack** (`slack` feature) - counts channel messages via the
//!   `conversations.history` Web API
//! - **Discord** (`discord` feature) - counts channel messages via the REST
//!   API
//! - **Claude advisor** (`advisor` feature) - narrative recommendations via
//!   the Anthropic Messages API
//!
//! ## Quick Start
//!
//! ```rust
//! use curator_adapters::{ActivityCounts, Aggregator, StaticCollector};
//!
//! #[tokio::main]
//! async fn main() {
//!     let manual = StaticCollector::new(
//!         "manual",
//!         ActivityCounts::builder().slack_messages(150).emails(25).build(),
//!     );
//!
//!     let mut aggregator = Aggregator::new();
//!     aggregator.register(Box::new(manual));
//!
//!     let snapshot = aggregator.collect().await;
//!     assert_eq!(snapshot.total_items(), 175);
//! }
//! ```

pub mod collector;
pub mod error;

#[cfg(feature = "slack")]
pub mod slack;

#[cfg(feature = "discord")]
pub mod discord;

#[cfg(feature = "advisor")]
pub mod advisor;

pub use collector::{Aggregator, Collector, StaticCollector};
pub use error::CollectError;

// Re-export types for convenience
pub use curator_types::{ActivityCounts, ActivitySnapshot};
