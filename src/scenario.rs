//! Rate scenarios evaluated for every projection
//!
//! A projection is always reported under three rate assumptions: the base
//! rate, an optimistic rate (base plus the variance offset), and the
//! zero-rate baseline. The order is fixed and semantically meaningful.

use serde::{Deserialize, Serialize};

/// Identifies one of the three rate scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// The user's estimated annual rate
    Base,
    /// Base rate plus the variance offset
    Max,
    /// No growth; the straight-line contribution baseline
    Zero,
}

impl ScenarioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Base => "base",
            ScenarioKind::Max => "max",
            ScenarioKind::Zero => "zero",
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scenario label paired with its resolved annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateScenario {
    pub kind: ScenarioKind,
    /// Annual rate as a fraction; may be zero or negative
    pub rate: f64,
}

/// Resolve the concrete scenario set for a base rate and variance offset.
///
/// Always returns exactly three scenarios in the fixed order
/// `[base, base + variance, zero]`. This is a pure mapping with no failure
/// modes of its own; a rate that makes the growth factor undefined is caught
/// when the future value is computed.
pub fn resolve_scenarios(annual_rate: f64, variance_rate: f64) -> [RateScenario; 3] {
    [
        RateScenario {
            kind: ScenarioKind::Base,
            rate: annual_rate,
        },
        RateScenario {
            kind: ScenarioKind::Max,
            rate: annual_rate + variance_rate,
        },
        RateScenario {
            kind: ScenarioKind::Zero,
            rate: 0.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order_and_rates() {
        let scenarios = resolve_scenarios(0.08, 0.02);

        assert_eq!(scenarios[0].kind, ScenarioKind::Base);
        assert_eq!(scenarios[0].rate, 0.08);
        assert_eq!(scenarios[1].kind, ScenarioKind::Max);
        assert!((scenarios[1].rate - 0.10).abs() < 1e-12);
        assert_eq!(scenarios[2].kind, ScenarioKind::Zero);
        assert_eq!(scenarios[2].rate, 0.0);
    }

    #[test]
    fn test_zero_variance_collapses_base_and_max() {
        let scenarios = resolve_scenarios(0.05, 0.0);
        assert_eq!(scenarios[0].rate, scenarios[1].rate);
    }

    #[test]
    fn test_no_rate_validation_here() {
        // A rate below -100% still resolves; the calculator rejects it.
        let scenarios = resolve_scenarios(-2.0, 0.5);
        assert_eq!(scenarios[0].rate, -2.0);
        assert_eq!(scenarios[1].rate, -1.5);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScenarioKind::Base.as_str(), "base");
        assert_eq!(ScenarioKind::Max.as_str(), "max");
        assert_eq!(ScenarioKind::Zero.as_str(), "zero");
    }
}
