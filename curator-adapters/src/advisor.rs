//! Claude-backed narrative advisor.
//!
//! Calls the Anthropic Messages API to turn a classification into detailed,
//! team-specific guidance. Response parsing - including stripping the
//! Markdown code fences models like to wrap JSON in - happens here; the
//! engine only ever sees a [`Narrative`] or a typed [`AdvisorError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use curator_adapters::advisor::ClaudeAdvisor;
//!
//! let advisor = ClaudeAdvisor::builder()
//!     .api_key("sk-ant-...")
//!     .build();
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use curator_engine::{AdvisorError, Narrative, NarrativeAdvisor, ZcResult};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Narrative advisor backed by the Anthropic Messages API.
#[derive(Debug, Clone)]
pub struct ClaudeAdvisor {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl ClaudeAdvisor {
    /// Create a new builder for configuring the advisor.
    pub fn builder() -> ClaudeAdvisorBuilder {
        ClaudeAdvisorBuilder::default()
    }

    async fn request_narrative(
        &self,
        result: &ZcResult,
        team_context: Option<&str>,
        recent_history: &[ZcResult],
    ) -> Result<Narrative, AdvisorError> {
        let Some(api_key) = &self.api_key else {
            return Err(AdvisorError::MissingCredential(
                "ANTHROPIC_API_KEY".to_string(),
            ));
        };

        let prompt = build_prompt(result, team_context, recent_history);

        let response = self
            .client
            .post(format!("{}/v1/messages", self.endpoint))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "messages": [{"role": "user", "content": prompt}],
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AdvisorError::Timeout
                } else {
                    AdvisorError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AdvisorError::MissingCredential(
                "invalid Anthropic API key".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(AdvisorError::Transport(format!(
                "API returned status {status}"
            )));
        }

        let message: MessageResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::Parse(e.to_string()))?;

        let text = message
            .content
            .iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .ok_or_else(|| AdvisorError::Parse("no text block in response".to_string()))?;

        parse_narrative(text, result)
    }
}

#[async_trait]
impl NarrativeAdvisor for ClaudeAdvisor {
    async fn advise(
        &self,
        result: &ZcResult,
        team_context: Option<&str>,
        recent_history: &[ZcResult],
    ) -> Result<Narrative, AdvisorError> {
        self.request_narrative(result, team_context, recent_history)
            .await
    }
}

/// Builder for `ClaudeAdvisor`.
#[derive(Debug, Default)]
pub struct ClaudeAdvisorBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    timeout: Option<std::time::Duration>,
}

impl ClaudeAdvisorBuilder {
    /// Set the API endpoint (default: "https://api.anthropic.com").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API key (default: the `ANTHROPIC_API_KEY` environment
    /// variable). A missing key surfaces as
    /// [`AdvisorError::MissingCredential`] at call time, not here.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model (default: "claude-sonnet-5").
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the response token budget (default: 1000).
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the request timeout (default: 30 seconds). Failures past this
    /// point surface as [`AdvisorError::Timeout`] and fall back to the
    /// static narrative table.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the advisor.
    pub fn build(self) -> ClaudeAdvisor {
        let timeout = self.timeout.unwrap_or(std::time::Duration::from_secs(30));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        ClaudeAdvisor {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| "https://api.anthropic.com".to_string()),
            api_key: self
                .api_key
                .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok()),
            model: self.model.unwrap_or_else(|| "claude-sonnet-5".to_string()),
            max_tokens: self.max_tokens.unwrap_or(1000),
        }
    }
}

fn build_prompt(
    result: &ZcResult,
    team_context: Option<&str>,
    recent_history: &[ZcResult],
) -> String {
    let mut prompt = format!(
        "You are the Curator AI for the CIM Pattern (Cognitive Impedance Mismatch protocol).\n\n\
         A team needs your expert advice on managing cognitive load.\n\n\
         CURRENT STATUS:\n\
         - Zc Ratio: {}\n\
         - Zone: {}\n\
         - Mode: {}\n\
         - Trend: {}\n\
         - V_generation: {} items/hour\n\
         - B_social: {} capacity/hour\n",
        result.zc, result.zone, result.mode, result.trend, result.v_generation, result.b_social
    );

    if let Some(context) = team_context {
        prompt.push_str(&format!("\nTEAM CONTEXT:\n{context}\n"));
    }

    if !recent_history.is_empty() {
        prompt.push_str("\nRECENT HISTORY (last 7 days):\n");
        for entry in recent_history.iter().rev().take(7).rev() {
            prompt.push_str(&format!(
                "- {}: Zc={} ({})\n",
                entry.timestamp.format("%Y-%m-%d"),
                entry.zc,
                entry.zone
            ));
        }
    }

    prompt.push_str(
        "\nTASK:\n\
         Generate a detailed, actionable recommendation for this team.\n\n\
         Respond ONLY with valid JSON in this exact format:\n\
         {\n\
           \"summary\": \"One sentence assessment\",\n\
           \"immediate_actions\": [\"Action 1\", \"Action 2\", \"Action 3\"],\n\
           \"this_week\": [\"Task 1\", \"Task 2\"],\n\
           \"avoid\": [\"Anti-pattern 1\", \"Anti-pattern 2\"],\n\
           \"success_criteria\": [\"Metric 1\", \"Metric 2\"],\n\
           \"context\": \"Brief explanation of the recommendation rationale\"\n\
         }\n\n\
         IMPORTANT:\n\
         - Be specific and actionable (no vague advice)\n\
         - Use CIM Pattern terminology (GUSH, BHO, BLUES, Study Hall)\n\
         - Consider the trend (is Zc improving or worsening?)\n\
         - Immediate actions should be doable today\n\
         - Success criteria should be measurable\n\n\
         Respond with ONLY the JSON, no preamble or markdown.\n",
    );

    prompt
}

/// Strip Markdown code fences the model may wrap its JSON in.
fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn parse_narrative(text: &str, result: &ZcResult) -> Result<Narrative, AdvisorError> {
    let cleaned = strip_fences(text);

    let wire: NarrativeWire =
        serde_json::from_str(&cleaned).map_err(|e| AdvisorError::Parse(e.to_string()))?;

    Ok(Narrative {
        summary: if wire.summary.is_empty() {
            result.recommendation.clone()
        } else {
            wire.summary
        },
        immediate_actions: wire.immediate_actions,
        this_week: wire.this_week,
        avoid: wire.avoid,
        success_criteria: wire.success_criteria,
        context: wire.context,
    })
}

/// Messages API response, reduced to the fields the advisor reads.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Loose wire shape of the model's JSON reply; absent fields default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NarrativeWire {
    summary: String,
    immediate_actions: Vec<String>,
    this_week: Vec<String>,
    avoid: Vec<String>,
    success_criteria: Vec<String>,
    context: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use curator_types::{Mode, Trend, Zone};

    fn yellow_result() -> ZcResult {
        ZcResult {
            timestamp: Utc::now(),
            zc: 0.85,
            v_generation: 25.5,
            b_social: 30.0,
            zone: Zone::Yellow,
            mode: Mode::Gush,
            confidence: 0.6,
            trend: Trend::Increasing,
            recommendation: "URGENT: Schedule GUSH session within 24h. Zc is rising.".to_string(),
        }
    }

    #[test]
    fn test_builder_defaults() {
        let advisor = ClaudeAdvisor::builder().api_key("sk-test").build();
        assert_eq!(advisor.endpoint, "https://api.anthropic.com");
        assert_eq!(advisor.model, "claude-sonnet-5");
        assert_eq!(advisor.max_tokens, 1000);
    }

    #[test]
    fn prompt_carries_status_and_context() {
        let prompt = build_prompt(&yellow_result(), Some("fintech startup, 10 people"), &[]);

        assert!(prompt.contains("Zc Ratio: 0.85"));
        assert!(prompt.contains("Zone: YELLOW"));
        assert!(prompt.contains("Trend: INCREASING"));
        assert!(prompt.contains("fintech startup, 10 people"));
    }

    #[test]
    fn prompt_limits_history_to_last_seven() {
        let history: Vec<ZcResult> = (0..10).map(|_| yellow_result()).collect();
        let prompt = build_prompt(&yellow_result(), None, &history);

        let lines = prompt.matches("- 2").count();
        assert_eq!(lines, 7);
    }

    #[test]
    fn fenced_json_parses() {
        let text = r#"```json
        {"summary": "Schedule a GUSH session", "immediate_actions": ["Book 90 minutes"],
         "this_week": ["Clear backlog"], "avoid": ["More async threads"],
         "success_criteria": ["Zc below 0.7"], "context": "Yellow and rising."}
        ```"#;

        let narrative = parse_narrative(text, &yellow_result()).unwrap();
        assert_eq!(narrative.summary, "Schedule a GUSH session");
        assert_eq!(narrative.immediate_actions, vec!["Book 90 minutes"]);
    }

    #[test]
    fn empty_summary_falls_back_to_recommendation() {
        let text = r#"{"immediate_actions": ["Act"], "context": "..."}"#;

        let narrative = parse_narrative(text, &yellow_result()).unwrap();
        assert!(narrative.summary.contains("GUSH"));
    }

    #[test]
    fn non_json_reply_is_a_parse_error() {
        let err = parse_narrative("I cannot help with that.", &yellow_result()).unwrap_err();
        assert!(matches!(err, AdvisorError::Parse(_)));
    }
}
