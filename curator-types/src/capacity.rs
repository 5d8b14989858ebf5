//! Team processing capacity parameters.

/// Effective processing hours per person per day when not otherwise
/// configured.
pub const DEFAULT_PROCESSING_HOURS: f64 = 3.0;

/// Team capacity parameters supplied at engine construction.
///
/// Capacity is expressed as the number of team members and the effective
/// processing hours each contributes per day. From these the engine derives
/// `B_social`, the team's aggregate processing capacity per hour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamCapacity {
    /// Number of team members.
    pub team_size: u32,

    /// Effective processing capacity per person per day, in hours.
    pub processing_hours_per_person: f64,
}

impl TeamCapacity {
    /// Create capacity for a team with the default per-person hours.
    pub fn new(team_size: u32) -> Self {
        Self {
            team_size,
            processing_hours_per_person: DEFAULT_PROCESSING_HOURS,
        }
    }

    /// Override the per-person daily processing hours.
    pub fn processing_hours_per_person(mut self, hours: f64) -> Self {
        self.processing_hours_per_person = hours;
        self
    }

    /// Aggregate processing capacity per hour over the given timeframe.
    ///
    /// `B_social = team_size * hours_per_person * 24 / timeframe_hours`.
    /// Not finite when `timeframe_hours` is zero; the engine rejects any
    /// non-positive or non-finite value before dividing by it.
    pub fn b_social(&self, timeframe_hours: u32) -> f64 {
        (self.team_size as f64 * self.processing_hours_per_person * 24.0)
            / timeframe_hours as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b_social_daily_window() {
        // 10 people x 3.0h over a 24h window -> 30 items/hour of capacity.
        let capacity = TeamCapacity::new(10);
        assert_eq!(capacity.b_social(24), 30.0);
    }

    #[test]
    fn b_social_scales_with_timeframe() {
        let capacity = TeamCapacity::new(10);
        // Halving the window doubles the hourly capacity budget.
        assert_eq!(capacity.b_social(12), 60.0);
    }

    #[test]
    fn custom_processing_hours() {
        let capacity = TeamCapacity::new(5).processing_hours_per_person(2.0);
        assert_eq!(capacity.b_social(24), 10.0);
    }

    #[test]
    fn zero_team_size_has_zero_capacity() {
        let capacity = TeamCapacity::new(0);
        assert_eq!(capacity.b_social(24), 0.0);
    }
}
