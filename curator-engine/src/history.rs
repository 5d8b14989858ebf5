//! Append-only history of classification results.

use chrono::{Duration, Utc};
use curator_types::ZcResult;

use crate::error::EngineError;

/// Ordered log of classification results.
///
/// Insertion order is chronological order. The log does not deduplicate and
/// does not bound its growth; retention is the caller's concern. Durable
/// storage happens outside the engine through [`export`](Self::export) /
/// [`import_json`](Self::import_json).
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<ZcResult>,
}

impl HistoryStore {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history pre-seeded with records, preserving their order.
    pub fn from_records(records: Vec<ZcResult>) -> Self {
        Self { entries: records }
    }

    /// Append one result. Always succeeds.
    pub fn append(&mut self, result: ZcResult) {
        self.entries.push(result);
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored results, oldest first.
    pub fn entries(&self) -> &[ZcResult] {
        &self.entries
    }

    /// The most recently appended result.
    pub fn last(&self) -> Option<&ZcResult> {
        self.entries.last()
    }

    /// Results from the last `hours` hours, in insertion order.
    ///
    /// The cutoff is `now - hours`; results stamped exactly at the cutoff
    /// are included.
    pub fn recent(&self, hours: u32) -> Vec<ZcResult> {
        let cutoff = Utc::now() - Duration::hours(i64::from(hours));
        self.entries
            .iter()
            .filter(|r| r.timestamp >= cutoff)
            .cloned()
            .collect()
    }

    /// Clone the full log as a flat sequence of records, oldest first.
    ///
    /// The serialized form of these records (a flat JSON array) belongs to
    /// the persistence layer; the engine only owns their shape.
    pub fn export(&self) -> Vec<ZcResult> {
        self.entries.clone()
    }

    /// Replace the log wholesale with already-parsed records.
    ///
    /// No merging: the previous contents are discarded.
    pub fn import(&mut self, records: Vec<ZcResult>) {
        self.entries = records;
    }

    /// Replace the log with records parsed from a JSON array.
    ///
    /// Fails closed: if any element of the batch is structurally invalid
    /// (missing field, wrong type) the whole import is rejected with
    /// [`EngineError::MalformedRecord`] and the store is left untouched.
    /// Returns the number of imported records.
    pub fn import_json(&mut self, json: &str) -> Result<usize, EngineError> {
        let records: Vec<ZcResult> = serde_json::from_str(json)?;
        let count = records.len();
        self.entries = records;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_types::{Mode, Trend, Zone};

    fn record(zc: f64) -> ZcResult {
        ZcResult {
            timestamp: Utc::now(),
            zc,
            v_generation: zc * 30.0,
            b_social: 30.0,
            zone: Zone::Green,
            mode: Mode::StudyHall,
            confidence: 0.8,
            trend: Trend::Stable,
            recommendation: "Continue with async-first workflows. Team is healthy.".to_string(),
        }
    }

    #[test]
    fn append_preserves_order() {
        let mut store = HistoryStore::new();
        store.append(record(0.1));
        store.append(record(0.2));
        store.append(record(0.3));

        let zcs: Vec<f64> = store.entries().iter().map(|r| r.zc).collect();
        assert_eq!(zcs, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn recent_window_keeps_fresh_entries() {
        let mut store = HistoryStore::new();
        for i in 0..5 {
            store.append(record(0.1 * f64::from(i)));
        }

        let recent = store.recent(168);
        assert_eq!(recent.len(), 5);
        // Order is preserved, not re-sorted.
        assert_eq!(recent[0].zc, 0.0);
        assert_eq!(recent[4].zc, 0.4);
    }

    #[test]
    fn recent_window_drops_stale_entries() {
        let mut store = HistoryStore::new();
        let mut old = record(0.5);
        old.timestamp = Utc::now() - Duration::hours(200);
        store.append(old);
        store.append(record(0.6));

        let recent = store.recent(168);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].zc, 0.6);
    }

    #[test]
    fn export_import_roundtrip_is_identical() {
        let mut store = HistoryStore::new();
        store.append(record(0.28));
        store.append(record(0.95));

        let json = serde_json::to_string(&store.export()).unwrap();

        let mut fresh = HistoryStore::new();
        let count = fresh.import_json(&json).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fresh.entries(), store.entries());
    }

    #[test]
    fn malformed_import_fails_closed() {
        let mut store = HistoryStore::new();
        store.append(record(0.28));

        // Second record is missing most required fields.
        let json = r#"[
            {"timestamp":"2025-06-01T12:00:00Z","zc":0.5,"v_generation":15.0,
             "b_social":30.0,"zone":"GREEN","mode":"STUDY_HALL","confidence":0.8,
             "trend":"STABLE","recommendation":"ok"},
            {"timestamp":"2025-06-01T13:00:00Z","zc":0.6}
        ]"#;

        let err = store.import_json(json).unwrap_err();
        assert!(matches!(err, EngineError::MalformedRecord(_)));

        // The previous log survives a rejected batch.
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].zc, 0.28);
    }

    #[test]
    fn import_replaces_wholesale() {
        let mut store = HistoryStore::new();
        store.append(record(0.1));
        store.append(record(0.2));

        store.import(vec![record(0.9)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].zc, 0.9);
    }
}
