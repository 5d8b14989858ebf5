//! Engine error types.

use thiserror::Error;

/// Errors returned by the impedance engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured capacity yields no processing budget. Supply a team
    /// size greater than zero and positive processing hours.
    #[error("invalid capacity: b_social must be greater than 0 (got {b_social})")]
    InvalidCapacity {
        /// The rejected capacity value.
        b_social: f64,
    },

    /// A history import encountered a structurally invalid record. The whole
    /// batch is rejected and the store is left untouched.
    #[error("malformed history record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}
