//! Result structures handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioKind;

use super::series::TimeSeriesPoint;

/// Point-in-time totals for one scenario.
///
/// Monetary amounts are rounded to two decimal places; `rate_percent` is the
/// scenario rate times 100, left unformatted for the caller to display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarResult {
    /// Scenario rate expressed as a percentage (8.0 for an 0.08 rate)
    pub rate_percent: f64,

    /// Projected value at the horizon with compounding applied
    pub future_value_with_interest: f64,

    /// Interest-free baseline: principal plus all contributions
    pub future_value_without_interest: f64,
}

/// Complete output of one projection: the three scenario summaries plus the
/// chart series spanning the full horizon.
///
/// Owns no reference back to the input; every projection builds a fresh
/// result that the caller is free to consume and discard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Summary under the base rate
    pub base: ScalarResult,

    /// Summary under base rate plus variance
    pub max: ScalarResult,

    /// Summary under the zero-rate baseline
    pub zero: ScalarResult,

    /// Time-ascending samples at fixed half-year steps, one value per scenario
    pub series: Vec<TimeSeriesPoint>,
}

impl ProjectionResult {
    /// Look up the scalar summary for a scenario label.
    pub fn scalar(&self, kind: ScenarioKind) -> &ScalarResult {
        match kind {
            ScenarioKind::Base => &self.base,
            ScenarioKind::Max => &self.max,
            ScenarioKind::Zero => &self.zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lookup() {
        let scalar = |rate_percent| ScalarResult {
            rate_percent,
            future_value_with_interest: 0.0,
            future_value_without_interest: 0.0,
        };
        let result = ProjectionResult {
            base: scalar(8.0),
            max: scalar(10.0),
            zero: scalar(0.0),
            series: Vec::new(),
        };

        assert_eq!(result.scalar(ScenarioKind::Base).rate_percent, 8.0);
        assert_eq!(result.scalar(ScenarioKind::Max).rate_percent, 10.0);
        assert_eq!(result.scalar(ScenarioKind::Zero).rate_percent, 0.0);
    }
}
