//! Error types for the projection engine

use thiserror::Error;

/// Errors that can occur while validating or running a projection.
///
/// Both variants are terminal for the request: the computation is
/// deterministic, so retrying with the same inputs reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// One or more input fields is missing, not a finite number, or negative
    /// where a negative value is not allowed. All field problems for a request
    /// are collected into a single error before any calculation begins.
    #[error("invalid input: {}", .issues.join("; "))]
    InvalidInput {
        /// One human-readable issue per offending field
        issues: Vec<String>,
    },

    /// A resolved scenario rate makes `1 + rate` non-positive, so the growth
    /// factor `(1 + rate)^t` is undefined.
    #[error("invalid rate {rate}: 1 + rate must be positive")]
    InvalidRate {
        /// The offending periodic rate
        rate: f64,
    },
}

impl ProjectionError {
    /// Build an `InvalidInput` error from collected field issues.
    pub fn invalid_input(issues: Vec<String>) -> Self {
        ProjectionError::InvalidInput { issues }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ProjectionError::invalid_input(vec![
            "principal is missing".to_string(),
            "years must not be negative".to_string(),
        ]);
        assert_eq!(
            format!("{}", err),
            "invalid input: principal is missing; years must not be negative"
        );
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = ProjectionError::InvalidRate { rate: -1.5 };
        assert_eq!(format!("{}", err), "invalid rate -1.5: 1 + rate must be positive");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ProjectionError::InvalidRate { rate: -2.0 };
        let _: &dyn std::error::Error = &err;
    }
}
