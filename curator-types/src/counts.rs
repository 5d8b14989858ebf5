//! Fixed-shape activity counters.

use core::ops::{Add, AddAssign};

/// Per-channel activity counts for one measurement window.
///
/// The counter set is closed: collectors report a subset of these fields and
/// the aggregator sums them field-wise. There is no dynamic registration of
/// new counter names; a source that reports an unknown key is rejected at
/// deserialization time rather than silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ActivityCounts {
    /// Messages posted in Slack channels.
    pub slack_messages: u64,
    /// Messages posted in Discord channels.
    pub discord_messages: u64,
    /// Notion page updates.
    pub notion_updates: u64,
    /// GitHub events (pushes, PRs, issues).
    pub github_events: u64,
    /// Linear issue updates.
    pub linear_updates: u64,
    /// AI-generated artifacts (drafts, summaries, code).
    pub ai_outputs: u64,
    /// Email threads.
    pub emails: u64,
}

impl ActivityCounts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for counts.
    pub fn builder() -> ActivityCountsBuilder {
        ActivityCountsBuilder::new()
    }

    /// Total information items across all channels.
    pub fn total(&self) -> u64 {
        self.slack_messages
            + self.discord_messages
            + self.notion_updates
            + self.github_events
            + self.linear_updates
            + self.ai_outputs
            + self.emails
    }

    /// Check whether any activity was recorded.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Add for ActivityCounts {
    type Output = ActivityCounts;

    /// Field-wise sum, used when aggregating partial counts from several
    /// collectors.
    fn add(self, rhs: ActivityCounts) -> ActivityCounts {
        ActivityCounts {
            slack_messages: self.slack_messages + rhs.slack_messages,
            discord_messages: self.discord_messages + rhs.discord_messages,
            notion_updates: self.notion_updates + rhs.notion_updates,
            github_events: self.github_events + rhs.github_events,
            linear_updates: self.linear_updates + rhs.linear_updates,
            ai_outputs: self.ai_outputs + rhs.ai_outputs,
            emails: self.emails + rhs.emails,
        }
    }
}

impl AddAssign for ActivityCounts {
    fn add_assign(&mut self, rhs: ActivityCounts) {
        *self = *self + rhs;
    }
}

/// Builder for `ActivityCounts`.
#[derive(Debug, Default)]
pub struct ActivityCountsBuilder {
    counts: ActivityCounts,
}

impl ActivityCountsBuilder {
    /// Create a new builder with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Slack message count.
    pub fn slack_messages(mut self, n: u64) -> Self {
        self.counts.slack_messages = n;
        self
    }

    /// Set the Discord message count.
    pub fn discord_messages(mut self, n: u64) -> Self {
        self.counts.discord_messages = n;
        self
    }

    /// Set the Notion update count.
    pub fn notion_updates(mut self, n: u64) -> Self {
        self.counts.notion_updates = n;
        self
    }

    /// Set the GitHub event count.
    pub fn github_events(mut self, n: u64) -> Self {
        self.counts.github_events = n;
        self
    }

    /// Set the Linear update count.
    pub fn linear_updates(mut self, n: u64) -> Self {
        self.counts.linear_updates = n;
        self
    }

    /// Set the AI output count.
    pub fn ai_outputs(mut self, n: u64) -> Self {
        self.counts.ai_outputs = n;
        self
    }

    /// Set the email thread count.
    pub fn emails(mut self, n: u64) -> Self {
        self.counts.emails = n;
        self
    }

    /// Build the counts.
    pub fn build(self) -> ActivityCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let counts = ActivityCounts::builder()
            .slack_messages(150)
            .notion_updates(20)
            .ai_outputs(30)
            .build();

        assert_eq!(counts.total(), 200);
        assert!(!counts.is_empty());
    }

    #[test]
    fn empty_counts_total_zero() {
        let counts = ActivityCounts::new();
        assert_eq!(counts.total(), 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn add_sums_field_wise() {
        let slack = ActivityCounts::builder().slack_messages(100).build();
        let docs = ActivityCounts::builder()
            .notion_updates(10)
            .slack_messages(5)
            .build();

        let sum = slack + docs;
        assert_eq!(sum.slack_messages, 105);
        assert_eq!(sum.notion_updates, 10);
        assert_eq!(sum.total(), 115);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut acc = ActivityCounts::new();
        acc += ActivityCounts::builder().emails(3).build();
        acc += ActivityCounts::builder().emails(4).github_events(2).build();

        assert_eq!(acc.emails, 7);
        assert_eq!(acc.github_events, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_record_parses_with_defaults() {
        let counts: ActivityCounts =
            serde_json::from_str(r#"{"slack_messages": 50, "emails": 2}"#).unwrap();

        assert_eq!(counts.slack_messages, 50);
        assert_eq!(counts.emails, 2);
        assert_eq!(counts.discord_messages, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_key_is_rejected() {
        let result: Result<ActivityCounts, _> =
            serde_json::from_str(r#"{"slack_messages": 50, "carrier_pigeons": 9}"#);

        assert!(result.is_err());
    }
}
