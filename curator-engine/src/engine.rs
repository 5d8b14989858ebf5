//! The impedance engine: Zc classification over activity snapshots.

use chrono::Utc;
use parking_lot::Mutex;

use curator_types::{ActivitySnapshot, TeamCapacity, Trend, ZcResult, Zone};

use crate::error::EngineError;
use crate::history::HistoryStore;
use crate::recommend;
use crate::trend;

/// Measurement window used by [`ImpedanceEngine::classify`].
pub const DEFAULT_TIMEFRAME_HOURS: u32 = 24;

/// Upper bound of the GREEN zone.
const GREEN_THRESHOLD: f64 = 0.7;

/// Upper bound of the YELLOW zone.
const YELLOW_THRESHOLD: f64 = 1.0;

/// Zc within this distance of a threshold lowers confidence.
const NEAR_THRESHOLD_BAND: f64 = 0.1;

const BASE_CONFIDENCE: f64 = 0.8;

/// The cognitive impedance engine.
///
/// Holds the team capacity parameters and the classification history. Each
/// successful [`classify`](Self::classify) call appends exactly one record
/// to the history; a failed call appends nothing.
///
/// The engine is safe to share across threads: history access is serialized
/// through an internal mutex held for the read-trend + compute + append
/// sequence, so two concurrent classifications cannot interleave their
/// trend reads and appends.
///
/// # Example
///
/// ```rust
/// use curator_engine::ImpedanceEngine;
/// use curator_types::{ActivitySnapshot, TeamCapacity};
///
/// let engine = ImpedanceEngine::new(TeamCapacity::new(10));
///
/// let snapshot = ActivitySnapshot::builder()
///     .counts(|c| c.slack_messages(150).notion_updates(20).ai_outputs(30))
///     .build();
///
/// let result = engine.classify(&snapshot).unwrap();
/// assert_eq!(result.b_social, 30.0);
/// ```
#[derive(Debug)]
pub struct ImpedanceEngine {
    capacity: TeamCapacity,
    history: Mutex<HistoryStore>,
}

impl ImpedanceEngine {
    /// Create an engine with the given capacity and an empty history.
    pub fn new(capacity: TeamCapacity) -> Self {
        tracing::info!(
            team_size = capacity.team_size,
            processing_hours = capacity.processing_hours_per_person,
            "impedance engine initialized"
        );
        Self {
            capacity,
            history: Mutex::new(HistoryStore::new()),
        }
    }

    /// Create a builder for configuring the engine.
    pub fn builder() -> ImpedanceEngineBuilder {
        ImpedanceEngineBuilder::new()
    }

    /// The capacity parameters supplied at construction.
    pub fn capacity(&self) -> TeamCapacity {
        self.capacity
    }

    /// Classify a snapshot over the default 24-hour window.
    pub fn classify(&self, snapshot: &ActivitySnapshot) -> Result<ZcResult, EngineError> {
        self.classify_within(snapshot, DEFAULT_TIMEFRAME_HOURS)
    }

    /// Classify a snapshot over an explicit measurement window.
    ///
    /// Computes `v_generation = total_items / timeframe_hours` and
    /// `zc = v_generation / b_social`, maps Zc onto a zone, derives the
    /// trend from the preceding measurements, and appends the finished
    /// record to the history.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidCapacity`] when the derived `b_social` is not a
    /// positive finite number (zero team size, non-positive processing
    /// hours, or a zero timeframe). No record is appended on error.
    pub fn classify_within(
        &self,
        snapshot: &ActivitySnapshot,
        timeframe_hours: u32,
    ) -> Result<ZcResult, EngineError> {
        let b_social = self.capacity.b_social(timeframe_hours);
        if !b_social.is_finite() || b_social <= 0.0 {
            return Err(EngineError::InvalidCapacity { b_social });
        }

        let v_generation = snapshot.total_items() as f64 / f64::from(timeframe_hours);
        let zc = v_generation / b_social;
        let zone = zone_for(zc);
        let mode = zone.mode();

        // Exclusive section: the trend must be read against the same history
        // the new record is appended to.
        let result = {
            let mut history = self.history.lock();

            let window = trend_window(history.entries(), round2(zc));
            let trend = trend::analyze(&window);
            let confidence = confidence_for(zc, trend);
            let recommendation = recommend::recommend(zone, trend).to_string();

            let result = ZcResult {
                timestamp: Utc::now(),
                zc: round2(zc),
                v_generation: round2(v_generation),
                b_social: round2(b_social),
                zone,
                mode,
                confidence,
                trend,
                recommendation,
            };
            history.append(result.clone());
            result
        };

        tracing::info!(
            zc = result.zc,
            zone = %result.zone,
            mode = %result.mode,
            trend = %result.trend,
            "zc classified"
        );

        Ok(result)
    }

    /// Number of stored classification results.
    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }

    /// The most recent classification, if any.
    pub fn last_result(&self) -> Option<ZcResult> {
        self.history.lock().last().cloned()
    }

    /// Results from the last `hours` hours, in classification order.
    pub fn recent(&self, hours: u32) -> Vec<ZcResult> {
        self.history.lock().recent(hours)
    }

    /// Clone the full history as a flat sequence of records.
    pub fn export(&self) -> Vec<ZcResult> {
        self.history.lock().export()
    }

    /// Replace the history wholesale with already-parsed records.
    pub fn import(&self, records: Vec<ZcResult>) {
        let mut history = self.history.lock();
        history.import(records);
        tracing::info!(count = history.len(), "history imported");
    }

    /// Replace the history with records parsed from a JSON array.
    ///
    /// Fails closed on any structurally invalid record, leaving the current
    /// history untouched. Returns the number of imported records.
    pub fn import_json(&self, json: &str) -> Result<usize, EngineError> {
        let count = self.history.lock().import_json(json)?;
        tracing::info!(count, "history imported");
        Ok(count)
    }
}

/// The trend window: up to two preceding Zc values plus the one being
/// classified, oldest first.
fn trend_window(prior: &[ZcResult], current_zc: f64) -> Vec<f64> {
    let mut window: Vec<f64> = prior
        .iter()
        .rev()
        .take(2)
        .map(|r| r.zc)
        .collect();
    window.reverse();
    window.push(current_zc);
    window
}

fn zone_for(zc: f64) -> Zone {
    if zc < GREEN_THRESHOLD {
        Zone::Green
    } else if zc < YELLOW_THRESHOLD {
        Zone::Yellow
    } else {
        Zone::Red
    }
}

/// Confidence in a classification.
///
/// Starts at 0.8, drops by 0.2 when Zc sits within +-0.1 of either zone
/// threshold, shifts by 0.1 with the trend direction, and is clamped to
/// [0.5, 1.0]. The near-threshold rule is a flat band, not a gradient.
fn confidence_for(zc: f64, trend: Trend) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if (zc - GREEN_THRESHOLD).abs() <= NEAR_THRESHOLD_BAND
        || (zc - YELLOW_THRESHOLD).abs() <= NEAR_THRESHOLD_BAND
    {
        confidence -= 0.2;
    }

    match trend {
        Trend::Increasing => confidence -= 0.1,
        Trend::Decreasing => confidence += 0.1,
        Trend::Stable => {}
    }

    confidence.clamp(0.5, 1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Builder for configuring an [`ImpedanceEngine`].
#[derive(Debug, Default)]
pub struct ImpedanceEngineBuilder {
    team_size: u32,
    processing_hours_per_person: Option<f64>,
    seed: Vec<ZcResult>,
}

impl ImpedanceEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of team members.
    pub fn team_size(mut self, team_size: u32) -> Self {
        self.team_size = team_size;
        self
    }

    /// Set the effective processing hours per person per day (default 3.0).
    pub fn processing_hours_per_person(mut self, hours: f64) -> Self {
        self.processing_hours_per_person = Some(hours);
        self
    }

    /// Pre-seed the engine's history, e.g. from a previous export.
    pub fn seed_history(mut self, records: Vec<ZcResult>) -> Self {
        self.seed = records;
        self
    }

    /// Build the engine.
    pub fn build(self) -> ImpedanceEngine {
        let mut capacity = TeamCapacity::new(self.team_size);
        if let Some(hours) = self.processing_hours_per_person {
            capacity = capacity.processing_hours_per_person(hours);
        }
        let engine = ImpedanceEngine::new(capacity);
        if !self.seed.is_empty() {
            *engine.history.lock() = HistoryStore::from_records(self.seed);
        }
        engine
    }
}
