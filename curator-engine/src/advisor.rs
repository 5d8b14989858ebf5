//! Narrative advisor capability and its fallback path.
//!
//! An advisor turns a classification into richer, free-text guidance - in
//! practice an LLM-backed client living in an adapter crate. The engine only
//! knows the capability: an async call that either returns a structured
//! [`Narrative`] or a typed [`AdvisorError`]. Every failure is absorbed by
//! [`narrative_or_fallback`]; callers never see an advisor error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use curator_types::{ZcResult, Zone};

/// Structured recommendation produced by an advisor (or the fallback table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// One-sentence assessment.
    pub summary: String,
    /// Actions doable today.
    pub immediate_actions: Vec<String>,
    /// Tasks for the coming week.
    pub this_week: Vec<String>,
    /// Anti-patterns to avoid.
    pub avoid: Vec<String>,
    /// Measurable criteria for success.
    pub success_criteria: Vec<String>,
    /// Rationale behind the recommendation.
    pub context: String,
}

/// Failures an advisor call can produce.
///
/// These never propagate past [`narrative_or_fallback`]; they exist so
/// advisor implementations can report precisely what went wrong.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The advisor did not answer within its configured timeout.
    #[error("advisor request timed out")]
    Timeout,

    /// No credential was available for the advisor backend.
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// The advisor could not be reached.
    #[error("advisor transport failure: {0}")]
    Transport(String),

    /// The advisor answered with something unparseable.
    #[error("unparseable advisor response: {0}")]
    Parse(String),
}

/// An external collaborator that produces narrative guidance.
///
/// Implementations performing network I/O must carry their own timeout; the
/// engine imposes none and holds no lock across the call.
#[async_trait]
pub trait NarrativeAdvisor: Send + Sync {
    /// Generate guidance for a classification, with optional free-text team
    /// context and the recent classification history.
    async fn advise(
        &self,
        result: &ZcResult,
        team_context: Option<&str>,
        recent_history: &[ZcResult],
    ) -> Result<Narrative, AdvisorError>;
}

/// Ask the advisor, falling back to the static per-zone narrative on any
/// failure or when no advisor is configured.
pub async fn narrative_or_fallback(
    advisor: Option<&dyn NarrativeAdvisor>,
    result: &ZcResult,
    team_context: Option<&str>,
    recent_history: &[ZcResult],
) -> Narrative {
    if let Some(advisor) = advisor {
        match advisor.advise(result, team_context, recent_history).await {
            Ok(narrative) => return narrative,
            Err(err) => {
                tracing::warn!(error = %err, "advisor unavailable, using fallback narrative");
            }
        }
    }
    fallback_narrative(result.zone)
}

/// The static narrative table, one entry per zone.
pub fn fallback_narrative(zone: Zone) -> Narrative {
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    match zone {
        Zone::Green => Narrative {
            summary: "Team is in healthy Green Zone - continue async-first approach".to_string(),
            immediate_actions: strings(&[
                "Maintain current async workflows",
                "Document what's working well",
                "Share success patterns with team",
            ]),
            this_week: strings(&[
                "Weekly Zc check-in (15 min)",
                "Update team documentation",
            ]),
            avoid: strings(&[
                "Don't add new sync meetings",
                "Don't change what's working",
            ]),
            success_criteria: strings(&[
                "Zc stays below 0.7",
                "Team reports low stress",
                "Decisions made in <48h",
            ]),
            context: "Green zone indicates healthy cognitive load. No interventions needed."
                .to_string(),
        },
        Zone::Yellow => Narrative {
            summary: "Team approaching overload - schedule GUSH session to force convergence"
                .to_string(),
            immediate_actions: strings(&[
                "Schedule 90-min GUSH session within 48h",
                "Identify 3-5 pending decisions",
                "Share GUSH template with team",
            ]),
            this_week: strings(&[
                "Run GUSH session",
                "Clear decision backlog",
                "Re-measure Zc post-GUSH",
            ]),
            avoid: strings(&[
                "Don't defer decisions again",
                "Don't schedule more async discussions",
            ]),
            success_criteria: strings(&[
                "Zc drops below 0.7",
                "70%+ decisions closed",
                "Team confidence >7/10",
            ]),
            context: "Yellow zone requires forced convergence via GUSH protocol.".to_string(),
        },
        Zone::Red => Narrative {
            summary: "Critical overload - activate The Jam immediately (BHO + BLUES)".to_string(),
            immediate_actions: strings(&[
                "Pause new initiatives for 48h",
                "Declare BHO forks for deep work streams",
                "Emergency GUSH for time-sensitive decisions",
            ]),
            this_week: strings(&[
                "Implement BLUES pulse rhythm",
                "Weekly BHO merge events",
                "Daily Zc monitoring",
            ]),
            avoid: strings(&[
                "Don't try to process everything",
                "Don't add more people to threads",
            ]),
            success_criteria: strings(&[
                "Zc drops to Yellow zone",
                "2-3 BHO forks active",
                "BLUES rhythm established",
            ]),
            context: "Red zone means standard consensus broken. The Jam protocols are required."
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use curator_types::{Mode, Trend};

    struct FailingAdvisor(fn() -> AdvisorError);

    #[async_trait]
    impl NarrativeAdvisor for FailingAdvisor {
        async fn advise(
            &self,
            _result: &ZcResult,
            _team_context: Option<&str>,
            _recent_history: &[ZcResult],
        ) -> Result<Narrative, AdvisorError> {
            Err((self.0)())
        }
    }

    struct EchoAdvisor;

    #[async_trait]
    impl NarrativeAdvisor for EchoAdvisor {
        async fn advise(
            &self,
            result: &ZcResult,
            team_context: Option<&str>,
            _recent_history: &[ZcResult],
        ) -> Result<Narrative, AdvisorError> {
            Ok(Narrative {
                summary: format!(
                    "zc {} for {}",
                    result.zc,
                    team_context.unwrap_or("unknown team")
                ),
                immediate_actions: vec![],
                this_week: vec![],
                avoid: vec![],
                success_criteria: vec![],
                context: String::new(),
            })
        }
    }

    fn red_result() -> ZcResult {
        ZcResult {
            timestamp: Utc::now(),
            zc: 1.46,
            v_generation: 14.58,
            b_social: 10.0,
            zone: Zone::Red,
            mode: Mode::Jam,
            confidence: 0.8,
            trend: Trend::Stable,
            recommendation: String::new(),
        }
    }

    #[tokio::test]
    async fn missing_advisor_uses_fallback() {
        let narrative = narrative_or_fallback(None, &red_result(), None, &[]).await;
        assert_eq!(narrative, fallback_narrative(Zone::Red));
    }

    #[tokio::test]
    async fn every_failure_variant_falls_back() {
        let failures: Vec<fn() -> AdvisorError> = vec![
            || AdvisorError::Timeout,
            || AdvisorError::MissingCredential("api key".to_string()),
            || AdvisorError::Transport("connection refused".to_string()),
            || AdvisorError::Parse("not json".to_string()),
        ];

        for failure in failures {
            let advisor = FailingAdvisor(failure);
            let narrative =
                narrative_or_fallback(Some(&advisor), &red_result(), None, &[]).await;
            assert_eq!(narrative, fallback_narrative(Zone::Red));
        }
    }

    #[tokio::test]
    async fn successful_advisor_response_is_used() {
        let narrative =
            narrative_or_fallback(Some(&EchoAdvisor), &red_result(), Some("acme"), &[]).await;
        assert_eq!(narrative.summary, "zc 1.46 for acme");
    }

    #[test]
    fn fallback_covers_every_zone() {
        for zone in [Zone::Green, Zone::Yellow, Zone::Red] {
            let narrative = fallback_narrative(zone);
            assert!(!narrative.summary.is_empty());
            assert!(!narrative.immediate_actions.is_empty());
            assert!(!narrative.success_criteria.is_empty());
        }
    }
}
