//! Time series generation for charting
//!
//! Applies the future value formula at fixed half-year steps across the full
//! horizon, producing one parallel value column per scenario. The series is
//! fully materialized because the chart consumes it all at once.

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::input::ProjectionInput;
use crate::scenario::RateScenario;

use super::future_value::future_value;

/// Sampling step for the chart series, in years.
pub const SERIES_STEP_YEARS: f64 = 0.5;

/// One sample of the projection: a point in time and the projected value
/// under each scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Elapsed time in years, starting at 0
    pub time_years: f64,

    /// Value under the base-rate scenario
    pub base: f64,

    /// Value under the base-plus-variance scenario
    pub max: f64,

    /// Straight-line contribution baseline (zero-rate scenario)
    pub zero: f64,
}

/// Generate the per-scenario series from `0` to `input.years` inclusive at
/// the given step.
///
/// Number of points is `floor(years / step) + 1`; the sequence is
/// deterministic and time-ascending. Values are full precision; rounding
/// happens where the result is assembled for the caller.
pub fn generate_series(
    input: &ProjectionInput,
    scenarios: &[RateScenario; 3],
    step_years: f64,
) -> Result<Vec<TimeSeriesPoint>, ProjectionError> {
    if !step_years.is_finite() || step_years <= 0.0 {
        return Err(ProjectionError::invalid_input(vec![format!(
            "step_years must be a positive finite number, got {step_years}"
        )]));
    }

    let steps = (input.years / step_years).floor() as usize;
    let mut points = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let t = i as f64 * step_years;

        let base = future_value(input.principal, input.monthly_contribution, scenarios[0].rate, t)?;
        let max = future_value(input.principal, input.monthly_contribution, scenarios[1].rate, t)?;
        let zero = future_value(input.principal, input.monthly_contribution, scenarios[2].rate, t)?;

        points.push(TimeSeriesPoint {
            time_years: t,
            base,
            max,
            zero,
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::resolve_scenarios;
    use approx::assert_relative_eq;

    fn test_input() -> ProjectionInput {
        ProjectionInput::new(100_000.0, 5_000.0, 0.08, 10.0, 0.02).unwrap()
    }

    #[test]
    fn test_point_count() {
        let input = test_input();
        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let series = generate_series(&input, &scenarios, SERIES_STEP_YEARS).unwrap();
        assert_eq!(series.len(), 21); // floor(10 / 0.5) + 1
    }

    #[test]
    fn test_point_count_fractional_horizon() {
        let input = ProjectionInput::new(1_000.0, 0.0, 0.05, 10.3, 0.0).unwrap();
        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let series = generate_series(&input, &scenarios, SERIES_STEP_YEARS).unwrap();
        assert_eq!(series.len(), 21);
        assert_relative_eq!(series.last().unwrap().time_years, 10.0);
    }

    #[test]
    fn test_zero_horizon_single_point() {
        let input = ProjectionInput::new(1_000.0, 50.0, 0.05, 0.0, 0.01).unwrap();
        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let series = generate_series(&input, &scenarios, SERIES_STEP_YEARS).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].time_years, 0.0);
        assert_relative_eq!(series[0].base, 1_000.0);
        assert_relative_eq!(series[0].max, 1_000.0);
        assert_relative_eq!(series[0].zero, 1_000.0);
    }

    #[test]
    fn test_time_ascending() {
        let input = test_input();
        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let series = generate_series(&input, &scenarios, SERIES_STEP_YEARS).unwrap();
        for pair in series.windows(2) {
            assert!(pair[1].time_years > pair[0].time_years);
        }
    }

    #[test]
    fn test_zero_column_is_straight_line() {
        let input = test_input();
        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let series = generate_series(&input, &scenarios, SERIES_STEP_YEARS).unwrap();
        for point in &series {
            let expected = 100_000.0 + 5_000.0 * 12.0 * point.time_years;
            assert_relative_eq!(point.zero, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_invalid_rate_propagates() {
        let input = ProjectionInput::new(1_000.0, 0.0, -1.5, 2.0, 0.0).unwrap();
        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let result = generate_series(&input, &scenarios, SERIES_STEP_YEARS);
        assert!(matches!(result, Err(ProjectionError::InvalidRate { .. })));
    }
}
