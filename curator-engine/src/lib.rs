//! # curator-engine
//!
//! The cognitive impedance engine: converts team activity snapshots into a
//! zone classification with trend, confidence, and a recommendation.
//!
//! ## Quick Start
//!
//! ```rust
//! use curator_engine::ImpedanceEngine;
//! use curator_types::ActivitySnapshot;
//!
//! let engine = ImpedanceEngine::builder()
//!     .team_size(10)
//!     .processing_hours_per_person(3.0)
//!     .build();
//!
//! let snapshot = ActivitySnapshot::builder()
//!     .counts(|c| c.slack_messages(150).notion_updates(20).ai_outputs(30))
//!     .build();
//!
//! let result = engine.classify(&snapshot).unwrap();
//! assert_eq!(result.zc, 0.28);
//! ```
//!
//! ## Design
//!
//! - **Synchronous core**: `classify` is a short CPU-only computation. The
//!   engine serializes history access through one mutex held for the
//!   read-trend + compute + append sequence, so concurrent callers see a
//!   consistent ordering.
//! - **Typed failure**: capacity and import problems surface as
//!   [`EngineError`]; there are no silent defaults.
//! - **Optional advisor**: the [`NarrativeAdvisor`] capability can enrich
//!   recommendations with free-text guidance. Every advisor failure is
//!   absorbed into the static fallback table and never reaches the caller.

mod advisor;
mod engine;
mod error;
mod history;
mod recommend;
mod trend;

pub use advisor::{narrative_or_fallback, AdvisorError, Narrative, NarrativeAdvisor};
pub use engine::{ImpedanceEngine, ImpedanceEngineBuilder, DEFAULT_TIMEFRAME_HOURS};
pub use error::EngineError;
pub use history::HistoryStore;
pub use recommend::{recommend, FALLBACK};
pub use trend::analyze as analyze_trend;

// Re-export types for convenience
pub use curator_types::{
    ActivityCounts, ActivitySnapshot, Mode, TeamCapacity, Trend, ZcResult, Zone,
};
