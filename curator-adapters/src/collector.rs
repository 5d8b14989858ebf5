//! Collector abstraction and fixed-shape aggregation.

use async_trait::async_trait;
use curator_types::{ActivityCounts, ActivitySnapshot};

use crate::error::CollectError;

/// A source of partial activity counts.
///
/// Implementations gather counts from one platform (Slack, Discord, a CI
/// system) and report only the counter fields they can see. The aggregator
/// sums the partial records field-wise; there is no dynamic counter
/// registration.
#[async_trait]
pub trait Collector: Send + Sync {
    /// A short name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Collect the counts for this source's measurement window.
    async fn collect(&self) -> Result<ActivityCounts, CollectError>;
}

/// A collector that returns fixed counts.
///
/// Stands in for manual entry (counts gathered outside any API) and doubles
/// as a test double.
#[derive(Debug, Clone)]
pub struct StaticCollector {
    name: String,
    counts: ActivityCounts,
}

impl StaticCollector {
    /// Create a static collector with the given counts.
    pub fn new(name: impl Into<String>, counts: ActivityCounts) -> Self {
        Self {
            name: name.into(),
            counts,
        }
    }
}

#[async_trait]
impl Collector for StaticCollector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn collect(&self) -> Result<ActivityCounts, CollectError> {
        Ok(self.counts)
    }
}

/// Aggregates partial counts from several collectors into one snapshot.
///
/// A failing collector degrades coverage but does not abort the sweep: its
/// error is logged and its counts are skipped.
#[derive(Default)]
pub struct Aggregator {
    collectors: Vec<Box<dyn Collector>>,
}

impl Aggregator {
    /// Create an aggregator with no collectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collector.
    pub fn register(&mut self, collector: Box<dyn Collector>) {
        tracing::info!(collector = collector.name(), "registered collector");
        self.collectors.push(collector);
    }

    /// Number of registered collectors.
    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    /// Check whether any collectors are registered.
    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Sweep all collectors and sum their counts into a snapshot stamped
    /// with the current time.
    pub async fn collect(&self) -> ActivitySnapshot {
        let mut total = ActivityCounts::default();

        for collector in &self.collectors {
            match collector.collect().await {
                Ok(counts) => total += counts,
                Err(err) => {
                    tracing::warn!(
                        collector = collector.name(),
                        error = %err,
                        "collector failed, skipping its counts"
                    );
                }
            }
        }

        ActivitySnapshot::new(total)
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.collectors.iter().map(|c| c.name()).collect();
        f.debug_struct("Aggregator").field("collectors", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCollector;

    #[async_trait]
    impl Collector for FailingCollector {
        fn name(&self) -> &str {
            "failing"
        }

        async fn collect(&self) -> Result<ActivityCounts, CollectError> {
            Err(CollectError::Timeout)
        }
    }

    #[tokio::test]
    async fn empty_aggregator_yields_zero_counts() {
        let aggregator = Aggregator::new();
        let snapshot = aggregator.collect().await;
        assert_eq!(snapshot.total_items(), 0);
    }

    #[tokio::test]
    async fn partial_counts_are_summed_field_wise() {
        let mut aggregator = Aggregator::new();
        aggregator.register(Box::new(StaticCollector::new(
            "chat",
            ActivityCounts::builder().slack_messages(100).build(),
        )));
        aggregator.register(Box::new(StaticCollector::new(
            "docs",
            ActivityCounts::builder()
                .notion_updates(10)
                .slack_messages(5)
                .build(),
        )));

        let snapshot = aggregator.collect().await;
        assert_eq!(snapshot.counts.slack_messages, 105);
        assert_eq!(snapshot.counts.notion_updates, 10);
        assert_eq!(snapshot.total_items(), 115);
    }

    #[tokio::test]
    async fn failing_collector_is_skipped() {
        let mut aggregator = Aggregator::new();
        aggregator.register(Box::new(FailingCollector));
        aggregator.register(Box::new(StaticCollector::new(
            "manual",
            ActivityCounts::builder().emails(7).build(),
        )));

        let snapshot = aggregator.collect().await;
        assert_eq!(snapshot.counts.emails, 7);
        assert_eq!(snapshot.total_items(), 7);
    }

    #[tokio::test]
    async fn static_collector_reports_its_counts() {
        let collector = StaticCollector::new(
            "manual",
            ActivityCounts::builder().ai_outputs(30).build(),
        );

        assert_eq!(collector.name(), "manual");
        let counts = collector.collect().await.unwrap();
        assert_eq!(counts.ai_outputs, 30);
    }
}
