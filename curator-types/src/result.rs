//! Classification results and their enums.

use core::fmt;

use chrono::{DateTime, Utc};

/// Workload zone classified from the impedance ratio.
///
/// Ordered by severity so the worst of several zones can be taken with
/// `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Zone {
    /// Zc below 0.7 - the team absorbs what it generates.
    Green,
    /// Zc in [0.7, 1.0) - approaching overload.
    Yellow,
    /// Zc at or above 1.0 - generation outruns processing capacity.
    Red,
}

impl Zone {
    /// The operating mode recommended for this zone (1:1 mapping).
    pub fn mode(&self) -> Mode {
        match self {
            Zone::Green => Mode::StudyHall,
            Zone::Yellow => Mode::Gush,
            Zone::Red => Mode::Jam,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Zone::Green => "GREEN",
            Zone::Yellow => "YELLOW",
            Zone::Red => "RED",
        };
        f.write_str(s)
    }
}

/// Recommended team operating mode, one per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Mode {
    /// Async-first deep work; no forced synchronization.
    StudyHall,
    /// Forced-convergence session to close pending decisions.
    Gush,
    /// Full overload protocol: declared forks and a pulsed work rhythm.
    Jam,
}

impl Mode {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::StudyHall => "Study Hall",
            Mode::Gush => "GUSH",
            Mode::Jam => "The Jam",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::StudyHall => "STUDY_HALL",
            Mode::Gush => "GUSH",
            Mode::Jam => "JAM",
        };
        f.write_str(s)
    }
}

/// Short-window directional movement of Zc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Trend {
    /// Zc rose across the last three measurements.
    Increasing,
    /// No strict movement either way (includes ties and oscillation).
    Stable,
    /// Zc fell across the last three measurements.
    Decreasing,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Increasing => "INCREASING",
            Trend::Stable => "STABLE",
            Trend::Decreasing => "DECREASING",
        };
        f.write_str(s)
    }
}

/// One classification produced by the impedance engine.
///
/// Records are created only by the engine, appended to its history in
/// creation order, and never mutated. All rates are rounded to two decimals
/// as stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZcResult {
    /// When the classification was computed.
    pub timestamp: DateTime<Utc>,

    /// Impedance ratio: `v_generation / b_social`.
    pub zc: f64,

    /// Information generation rate, items per hour.
    pub v_generation: f64,

    /// Team processing capacity, items per hour.
    pub b_social: f64,

    /// Classified workload zone.
    pub zone: Zone,

    /// Recommended operating mode for the zone.
    pub mode: Mode,

    /// Confidence in the classification, in [0.5, 1.0].
    pub confidence: f64,

    /// Directional movement across the preceding measurements.
    pub trend: Trend,

    /// Canned guidance for the (zone, trend) pair.
    pub recommendation: String,
}
