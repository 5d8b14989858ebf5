//! Canned recommendations for each (zone, trend) pair.

use curator_types::{Trend, Zone};

/// Generic guidance used when no zone/trend-specific text applies.
pub const FALLBACK: &str = "Monitor closely and adjust mode as needed.";

/// Look up the action guideline for a zone and trend.
///
/// The table is total over `Zone x Trend`, so every combination resolves to
/// a specific text; [`FALLBACK`] is exported for callers that need a
/// combination-free default.
pub fn recommend(zone: Zone, trend: Trend) -> &'static str {
    match (zone, trend) {
        (Zone::Green, Trend::Stable) => {
            "Continue with async-first workflows. Team is healthy."
        }
        (Zone::Green, Trend::Increasing) => {
            "Watch for early signs of overload. Monitor daily."
        }
        (Zone::Green, Trend::Decreasing) => {
            "Great! Cognitive load is reducing. Keep current practices."
        }
        (Zone::Yellow, Trend::Stable) => {
            "Schedule GUSH session within 48h to force convergence on pending decisions."
        }
        (Zone::Yellow, Trend::Increasing) => {
            "URGENT: Schedule GUSH session within 24h. Zc is rising."
        }
        (Zone::Yellow, Trend::Decreasing) => {
            "Good! Recent interventions working. One more GUSH to clear backlog."
        }
        (Zone::Red, Trend::Stable) => {
            "Activate The Jam immediately. Declare BHO forks for deep work. Implement BLUES rhythm."
        }
        (Zone::Red, Trend::Increasing) => {
            "CRITICAL: Stop new initiatives. Emergency GUSH + immediate BHO declarations. Team at breaking point."
        }
        (Zone::Red, Trend::Decreasing) => {
            "Progress! Continue The Jam protocols. Don't revert to async-only yet."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_specific_guidance() {
        for zone in [Zone::Green, Zone::Yellow, Zone::Red] {
            for trend in [Trend::Increasing, Trend::Stable, Trend::Decreasing] {
                let text = recommend(zone, trend);
                assert!(!text.is_empty());
                assert_ne!(text, FALLBACK);
            }
        }
    }

    #[test]
    fn green_guidance_mentions_async() {
        assert!(recommend(Zone::Green, Trend::Stable)
            .to_lowercase()
            .contains("async"));
    }

    #[test]
    fn yellow_guidance_mentions_gush() {
        for trend in [Trend::Increasing, Trend::Stable, Trend::Decreasing] {
            assert!(recommend(Zone::Yellow, trend).to_lowercase().contains("gush"));
        }
    }

    #[test]
    fn red_guidance_escalates() {
        let text = recommend(Zone::Red, Trend::Stable).to_lowercase();
        assert!(text.contains("jam") || text.contains("bho"));
    }
}
