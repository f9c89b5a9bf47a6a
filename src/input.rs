//! Projection inputs: the raw request bundle and its validated form

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Raw projection request as supplied by a caller (CLI flags, JSON body).
///
/// Every field is optional so that a missing value can be reported as a
/// validation issue instead of a deserialization failure. Use
/// [`ProjectionInput::from_request`] to validate and convert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Initial lump sum invested at time zero
    #[serde(default)]
    pub principal: Option<f64>,

    /// Amount added at each of the 12 contribution periods per year
    #[serde(default)]
    pub monthly_contribution: Option<f64>,

    /// Base annual rate as a fraction (0.05 = 5%)
    #[serde(default)]
    pub annual_rate: Option<f64>,

    /// Projection horizon in years
    #[serde(default)]
    pub years: Option<f64>,

    /// Offset added to the base rate to form the optimistic scenario
    #[serde(default)]
    pub variance_rate: Option<f64>,
}

/// Validated, immutable inputs for one projection.
///
/// Constructed through [`ProjectionInput::new`] or
/// [`ProjectionInput::from_request`], both of which reject missing,
/// non-finite, and wrongly-negative values with a single aggregated
/// [`ProjectionError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial lump sum, non-negative
    pub principal: f64,

    /// Monthly contribution, non-negative
    pub monthly_contribution: f64,

    /// Base annual rate as a fraction; may be zero or negative
    /// (a rate at or below -100% is rejected later as `InvalidRate`)
    pub annual_rate: f64,

    /// Projection horizon in years, non-negative
    pub years: f64,

    /// Variance offset for the optimistic scenario, non-negative
    pub variance_rate: f64,
}

/// Check one field, recording any problem and yielding a placeholder that is
/// only used when the issue list ends up non-empty.
fn checked(issues: &mut Vec<String>, name: &str, value: Option<f64>, non_negative: bool) -> f64 {
    let Some(v) = value else {
        issues.push(format!("{name} is missing"));
        return 0.0;
    };
    if !v.is_finite() {
        issues.push(format!("{name} must be a finite number"));
        return 0.0;
    }
    if non_negative && v < 0.0 {
        issues.push(format!("{name} must not be negative"));
        return 0.0;
    }
    v
}

impl ProjectionInput {
    /// Validate the five input values and construct a `ProjectionInput`.
    pub fn new(
        principal: f64,
        monthly_contribution: f64,
        annual_rate: f64,
        years: f64,
        variance_rate: f64,
    ) -> Result<Self, ProjectionError> {
        Self::from_request(&ProjectionRequest {
            principal: Some(principal),
            monthly_contribution: Some(monthly_contribution),
            annual_rate: Some(annual_rate),
            years: Some(years),
            variance_rate: Some(variance_rate),
        })
    }

    /// Validate a raw request bundle.
    ///
    /// All field problems are collected before returning, so the caller gets
    /// one error covering the whole request rather than the first offender.
    pub fn from_request(request: &ProjectionRequest) -> Result<Self, ProjectionError> {
        let mut issues = Vec::new();

        let principal = checked(&mut issues, "principal", request.principal, true);
        let monthly_contribution = checked(
            &mut issues,
            "monthly_contribution",
            request.monthly_contribution,
            true,
        );
        let annual_rate = checked(&mut issues, "annual_rate", request.annual_rate, false);
        let years = checked(&mut issues, "years", request.years, true);
        let variance_rate = checked(&mut issues, "variance_rate", request.variance_rate, true);

        if !issues.is_empty() {
            return Err(ProjectionError::invalid_input(issues));
        }

        Ok(Self {
            principal,
            monthly_contribution,
            annual_rate,
            years,
            variance_rate,
        })
    }

    /// Re-check the invariants on an already-constructed input.
    ///
    /// Fields are public, so the facade revalidates before projecting.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        Self::new(
            self.principal,
            self.monthly_contribution,
            self.annual_rate,
            self.years,
            self.variance_rate,
        )
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let input = ProjectionInput::new(100_000.0, 5_000.0, 0.08, 10.0, 0.02).unwrap();
        assert_eq!(input.principal, 100_000.0);
        assert_eq!(input.years, 10.0);
    }

    #[test]
    fn test_missing_fields_are_aggregated() {
        let request = ProjectionRequest {
            principal: Some(1000.0),
            ..Default::default()
        };

        let err = ProjectionInput::from_request(&request).unwrap_err();
        match err {
            ProjectionError::InvalidInput { issues } => {
                assert_eq!(issues.len(), 4);
                assert!(issues.iter().all(|i| i.ends_with("is missing")));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ProjectionInput::new(f64::NAN, 0.0, f64::INFINITY, 1.0, 0.0).unwrap_err();
        match err {
            ProjectionError::InvalidInput { issues } => {
                assert_eq!(issues.len(), 2);
                assert!(issues[0].contains("principal"));
                assert!(issues[1].contains("annual_rate"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let err = ProjectionInput::new(-1.0, -2.0, 0.05, -3.0, -0.01).unwrap_err();
        match err {
            ProjectionError::InvalidInput { issues } => assert_eq!(issues.len(), 4),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_valid_input() {
        // Rates below -100% are an InvalidRate at calculation time, not an
        // input validation failure.
        assert!(ProjectionInput::new(0.0, 0.0, -1.5, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_zero_years_is_valid() {
        assert!(ProjectionInput::new(100.0, 10.0, 0.05, 0.0, 0.01).is_ok());
    }

    #[test]
    fn test_request_json_with_absent_fields() {
        let request: ProjectionRequest = serde_json::from_str(r#"{"principal": 500.0}"#).unwrap();
        assert_eq!(request.principal, Some(500.0));
        assert!(request.years.is_none());
    }
}
