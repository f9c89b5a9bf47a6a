//! Core engine orchestrating scenario resolution, scalar summaries, and the
//! chart series into one result

use rayon::prelude::*;

use crate::error::ProjectionError;
use crate::input::{ProjectionInput, ProjectionRequest};
use crate::scenario::{resolve_scenarios, RateScenario};

use super::future_value::{baseline_value, future_value, round_to_cents};
use super::result::{ProjectionResult, ScalarResult};
use super::series::{generate_series, TimeSeriesPoint, SERIES_STEP_YEARS};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Sampling step for the chart series, in years
    pub step_years: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            step_years: SERIES_STEP_YEARS,
        }
    }
}

/// Main projection engine.
///
/// Stateless between calls: every invocation is a pure transformation of its
/// inputs, so a single engine can serve concurrent callers without locking.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run one projection over validated inputs.
    ///
    /// Scenario summaries are computed in the fixed order base, max, zero;
    /// an `InvalidRate` aborts the request without attempting the remaining
    /// scenarios. Monetary outputs are rounded to cents here, at the boundary
    /// to the caller.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        input.validate()?;
        self.validate_config()?;

        let scenarios = resolve_scenarios(input.annual_rate, input.variance_rate);

        let base = self.scalar_for(input, &scenarios[0])?;
        let max = self.scalar_for(input, &scenarios[1])?;
        let zero = self.scalar_for(input, &scenarios[2])?;

        let series = generate_series(input, &scenarios, self.config.step_years)?
            .into_iter()
            .map(|point| TimeSeriesPoint {
                time_years: point.time_years,
                base: round_to_cents(point.base),
                max: round_to_cents(point.max),
                zero: round_to_cents(point.zero),
            })
            .collect();

        Ok(ProjectionResult {
            base,
            max,
            zero,
            series,
        })
    }

    /// Validate a raw request bundle, then project.
    ///
    /// This is the entry point for callers holding possibly-missing values
    /// (deserialized JSON, CLI flags): all field problems come back as one
    /// aggregated `InvalidInput` and no partial result is ever produced.
    pub fn project_request(
        &self,
        request: &ProjectionRequest,
    ) -> Result<ProjectionResult, ProjectionError> {
        let input = ProjectionInput::from_request(request)?;
        self.project(&input)
    }

    /// Project many inputs in parallel.
    ///
    /// Output order matches input order regardless of completion order; each
    /// input succeeds or fails independently.
    pub fn project_batch(
        &self,
        inputs: &[ProjectionInput],
    ) -> Vec<Result<ProjectionResult, ProjectionError>> {
        inputs.par_iter().map(|input| self.project(input)).collect()
    }

    fn scalar_for(
        &self,
        input: &ProjectionInput,
        scenario: &RateScenario,
    ) -> Result<ScalarResult, ProjectionError> {
        let with_interest = future_value(
            input.principal,
            input.monthly_contribution,
            scenario.rate,
            input.years,
        )?;
        let without_interest =
            baseline_value(input.principal, input.monthly_contribution, input.years);

        Ok(ScalarResult {
            rate_percent: scenario.rate * 100.0,
            future_value_with_interest: round_to_cents(with_interest),
            future_value_without_interest: round_to_cents(without_interest),
        })
    }

    fn validate_config(&self) -> Result<(), ProjectionError> {
        let step = self.config.step_years;
        if !step.is_finite() || step <= 0.0 {
            return Err(ProjectionError::invalid_input(vec![format!(
                "step_years must be a positive finite number, got {step}"
            )]));
        }
        Ok(())
    }
}

/// Run one projection with the default half-year series step.
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::default().project(input)
}
