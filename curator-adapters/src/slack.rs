//! Slack collector using the Web API.
//!
//! Counts messages posted to a set of channels within the measurement
//! window by paging `conversations.history`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use curator_adapters::slack::SlackCollector;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let collector = SlackCollector::builder()
//!         .token("xoxb-...")
//!         .channel("C0123456789")
//!         .channel("C0987654321")
//!         .window_hours(24)
//!         .build();
//!
//!     let counts = collector.count_messages().await?;
//!     println!("{} slack messages", counts.slack_messages);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::Deserialize;

use curator_types::ActivityCounts;

use crate::collector::Collector;
use crate::error::CollectError;

/// Slack collector for counting channel messages.
#[derive(Debug, Clone)]
pub struct SlackCollector {
    client: Client,
    endpoint: String,
    token: String,
    channels: Vec<String>,
    window_hours: u32,
}

impl SlackCollector {
    /// Create a new builder for configuring the collector.
    pub fn builder() -> SlackCollectorBuilder {
        SlackCollectorBuilder::default()
    }

    /// Count messages across all configured channels for the window.
    pub async fn count_messages(&self) -> Result<ActivityCounts, CollectError> {
        let oldest = (Utc::now() - Duration::hours(i64::from(self.window_hours))).timestamp();

        let mut total = 0u64;
        for channel in &self.channels {
            total += self.fetch_channel_count(channel, oldest).await?;
        }

        Ok(ActivityCounts::builder().slack_messages(total).build())
    }

    async fn fetch_channel_count(
        &self,
        channel: &str,
        oldest: i64,
    ) -> Result<u64, CollectError> {
        let url = format!("{}/conversations.history", self.endpoint);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("channel", channel),
                ("oldest", &oldest.to_string()),
                ("limit", "1000"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CollectError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let history: ConversationHistory = response
            .json()
            .await
            .map_err(|e| CollectError::Parse(e.to_string()))?;

        if !history.ok {
            let error = history.error.unwrap_or_else(|| "unknown error".to_string());
            return if error == "invalid_auth" || error == "not_authed" {
                Err(CollectError::Auth(error))
            } else {
                Err(CollectError::Http(format!("Slack API error: {error}")))
            };
        }

        Ok(history.messages.len() as u64)
    }
}

#[async_trait]
impl Collector for SlackCollector {
    fn name(&self) -> &str {
        "slack"
    }

    async fn collect(&self) -> Result<ActivityCounts, CollectError> {
        self.count_messages().await
    }
}

/// Builder for `SlackCollector`.
#[derive(Debug, Default)]
pub struct SlackCollectorBuilder {
    endpoint: Option<String>,
    token: Option<String>,
    channels: Vec<String>,
    window_hours: Option<u32>,
    timeout: Option<std::time::Duration>,
}

impl SlackCollectorBuilder {
    /// Set the API endpoint (default: "https://slack.com/api").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the bot token used for authentication.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a channel ID to count.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channels.push(channel.into());
        self
    }

    /// Set the measurement window in hours (default: 24).
    pub fn window_hours(mut self, hours: u32) -> Self {
        self.window_hours = Some(hours);
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the collector.
    pub fn build(self) -> SlackCollector {
        let timeout = self.timeout.unwrap_or(std::time::Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        SlackCollector {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| "https://slack.com/api".to_string()),
            token: self.token.unwrap_or_default(),
            channels: self.channels,
            window_hours: self.window_hours.unwrap_or(24),
        }
    }
}

/// Response shape of `conversations.history`.
#[derive(Debug, Deserialize)]
struct ConversationHistory {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<SlackMessage>,
}

/// A single channel message; only presence is counted.
#[derive(Debug, Deserialize)]
struct SlackMessage {
    #[serde(default)]
    #[allow(dead_code)]
    ts: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let collector = SlackCollector::builder().build();
        assert_eq!(collector.endpoint, "https://slack.com/api");
        assert_eq!(collector.window_hours, 24);
        assert!(collector.channels.is_empty());
    }

    #[test]
    fn test_builder_custom() {
        let collector = SlackCollector::builder()
            .endpoint("https://slack.example.com/api")
            .token("xoxb-test")
            .channel("C01")
            .channel("C02")
            .window_hours(8)
            .build();

        assert_eq!(collector.endpoint, "https://slack.example.com/api");
        assert_eq!(collector.token, "xoxb-test");
        assert_eq!(collector.channels, vec!["C01", "C02"]);
        assert_eq!(collector.window_hours, 8);
    }

    #[test]
    fn history_response_parses() {
        let json = r#"{"ok": true, "messages": [{"ts": "1"}, {"ts": "2"}]}"#;
        let history: ConversationHistory = serde_json::from_str(json).unwrap();
        assert!(history.ok);
        assert_eq!(history.messages.len(), 2);
    }

    #[test]
    fn error_response_parses() {
        let json = r#"{"ok": false, "error": "invalid_auth"}"#;
        let history: ConversationHistory = serde_json::from_str(json).unwrap();
        assert!(!history.ok);
        assert_eq!(history.error.as_deref(), Some("invalid_auth"));
        assert!(history.messages.is_empty());
    }
}
