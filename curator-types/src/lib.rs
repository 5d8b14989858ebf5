//! # curator-types
//!
//! Core types for cognitive impedance monitoring. This crate defines the
//! schema shared by the curator engine, the platform collectors, and any
//! external tool that consumes classification records.
//!
//! ## Design Goals
//!
//! - **Plain data**: no decision logic lives here, only the shapes
//! - **Fixed counter schema**: activity counts are a closed set of named
//!   fields, summed field-wise during aggregation
//! - **Optional serialization**: enable the `serde` feature as needed
//! - **Ergonomic builders**: fluent API for constructing snapshots
//!
//! ## Example
//!
//! ```rust
//! use curator_types::ActivitySnapshot;
//!
//! let snapshot = ActivitySnapshot::builder()
//!     .counts(|c| {
//!         c.slack_messages(150)
//!          .notion_updates(20)
//!          .ai_outputs(30)
//!     })
//!     .build();
//!
//! assert_eq!(snapshot.total_items(), 200);
//! ```

mod capacity;
mod counts;
mod result;
mod snapshot;

pub use capacity::*;
pub use counts::*;
pub use result::*;
pub use snapshot::*;
