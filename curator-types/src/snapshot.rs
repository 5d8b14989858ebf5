//! Snapshot - a point-in-time record of team activity.

use chrono::{DateTime, Utc};

use crate::{ActivityCounts, ActivityCountsBuilder};

/// A point-in-time snapshot of team activity counts.
///
/// Snapshots are produced by collectors (or entered manually) and consumed by
/// the impedance engine. They are immutable once built.
///
/// # Example
///
/// ```rust
/// use curator_types::ActivitySnapshot;
///
/// let snapshot = ActivitySnapshot::builder()
///     .counts(|c| c.slack_messages(150).ai_outputs(30))
///     .build();
///
/// assert_eq!(snapshot.total_items(), 180);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivitySnapshot {
    /// When the activity was measured.
    pub timestamp: DateTime<Utc>,

    /// The per-channel activity counts.
    pub counts: ActivityCounts,
}

impl ActivitySnapshot {
    /// Create a snapshot of the given counts taken now.
    pub fn new(counts: ActivityCounts) -> Self {
        Self {
            timestamp: Utc::now(),
            counts,
        }
    }

    /// Create a snapshot with an explicit measurement timestamp.
    pub fn with_timestamp(timestamp: DateTime<Utc>, counts: ActivityCounts) -> Self {
        Self { timestamp, counts }
    }

    /// Create a builder for constructing snapshots.
    pub fn builder() -> ActivitySnapshotBuilder {
        ActivitySnapshotBuilder::new()
    }

    /// Total information items generated across all channels.
    pub fn total_items(&self) -> u64 {
        self.counts.total()
    }
}

/// Builder for `ActivitySnapshot` instances.
#[derive(Debug)]
pub struct ActivitySnapshotBuilder {
    timestamp: Option<DateTime<Utc>>,
    counts: ActivityCounts,
}

impl ActivitySnapshotBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            timestamp: None,
            counts: ActivityCounts::default(),
        }
    }

    /// Set an explicit measurement timestamp (defaults to now).
    pub fn timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Set the counts using a closure over the counts builder.
    pub fn counts<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ActivityCountsBuilder) -> ActivityCountsBuilder,
    {
        self.counts = f(ActivityCounts::builder()).build();
        self
    }

    /// Set pre-built counts.
    pub fn with_counts(mut self, counts: ActivityCounts) -> Self {
        self.counts = counts;
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> ActivitySnapshot {
        ActivitySnapshot {
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            counts: self.counts,
        }
    }
}

impl Default for ActivitySnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_builder() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let snapshot = ActivitySnapshot::builder()
            .timestamp(ts)
            .counts(|c| c.slack_messages(150).notion_updates(20).ai_outputs(30))
            .build();

        assert_eq!(snapshot.timestamp, ts);
        assert_eq!(snapshot.total_items(), 200);
    }

    #[test]
    fn builder_defaults_timestamp_to_now() {
        let before = Utc::now();
        let snapshot = ActivitySnapshot::builder().build();
        let after = Utc::now();

        assert!(snapshot.timestamp >= before);
        assert!(snapshot.timestamp <= after);
        assert_eq!(snapshot.total_items(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let snapshot = ActivitySnapshot::builder()
            .timestamp(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
            .counts(|c| c.emails(25).github_events(4))
            .build();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: ActivitySnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, parsed);
    }
}
