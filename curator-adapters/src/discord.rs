//! Discord collector using the REST API.
//!
//! Counts messages posted to a set of channels within the measurement
//! window via `GET /channels/{id}/messages`.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;

use curator_types::ActivityCounts;

use crate::collector::Collector;
use crate::error::CollectError;

/// Discord collector for counting channel messages.
#[derive(Debug, Clone)]
pub struct DiscordCollector {
    client: Client,
    endpoint: String,
    token: String,
    channels: Vec<String>,
    window_hours: u32,
}

impl DiscordCollector {
    /// Create a new builder for configuring the collector.
    pub fn builder() -> DiscordCollectorBuilder {
        DiscordCollectorBuilder::default()
    }

    /// Count messages across all configured channels for the window.
    pub async fn count_messages(&self) -> Result<ActivityCounts, CollectError> {
        let cutoff = Utc::now() - Duration::hours(i64::from(self.window_hours));

        let mut total = 0u64;
        for channel in &self.channels {
            total += self.fetch_channel_count(channel, cutoff).await?;
        }

        Ok(ActivityCounts::builder().discord_messages(total).build())
    }

    async fn fetch_channel_count(
        &self,
        channel: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, CollectError> {
        let url = format!("{}/channels/{}/messages", self.endpoint, channel);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .query(&[("limit", "100")])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CollectError::Auth("Invalid bot token".to_string()));
        }

        if !response.status().is_success() {
            return Err(CollectError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let messages: Vec<DiscordMessage> = response
            .json()
            .await
            .map_err(|e| CollectError::Parse(e.to_string()))?;

        Ok(messages
            .iter()
            .filter(|m| m.timestamp >= cutoff)
            .count() as u64)
    }
}

#[async_trait]
impl Collector for DiscordCollector {
    fn name(&self) -> &str {
        "discord"
    }

    async fn collect(&self) -> Result<ActivityCounts, CollectError> {
        self.count_messages().await
    }
}

/// Builder for `DiscordCollector`.
#[derive(Debug, Default)]
pub struct DiscordCollectorBuilder {
    endpoint: Option<String>,
    token: Option<String>,
    channels: Vec<String>,
    window_hours: Option<u32>,
    timeout: Option<std::time::Duration>,
}

impl DiscordCollectorBuilder {
    /// Set the API endpoint (default: "https://discord.com/api/v10").
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
    pub fn build(self) -> DiscordCollector {
        let timeout = self.timeout.unwrap_or(std::time::Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        DiscordCollector {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| "https://discord.com/api/v10".to_string()),
            token: self.token.unwrap_or_default(),
            channels: self.channels,
            window_hours: self.window_hours.unwrap_or(24),
        }
    }
}

/// A single channel message with its creation time.
#[derive(Debug, Deserialize)]
struct DiscordMessage {
    timestamp: DateTime<Utc>,
}
