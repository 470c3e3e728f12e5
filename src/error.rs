//! Error type shared by the estimator, the filter stages and the pipeline.

/// Reasons why a curvature computation may fail.
///
/// Every operation either returns a complete, finite profile or one of these
/// errors; partial results are never produced.
#[derive(Clone, Debug, PartialEq)]
pub enum CurvatureError {
    /// Differentiation needs at least `minimum` points.
    InsufficientPoints { found: usize, minimum: usize },
    /// Zero arc length or a zero-magnitude tangent at `index`, usually caused
    /// by duplicate consecutive points.
    DegenerateSpacing { index: usize },
    /// A stage or bracket parameter is out of range.
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },
    /// NaN or infinite value found in the input at `index`.
    NonFiniteInput { index: usize },
}

impl CurvatureError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        CurvatureError::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for CurvatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurvatureError::InsufficientPoints { found, minimum } => {
                write!(f, "insufficient points ({found} < {minimum})")
            }
            CurvatureError::DegenerateSpacing { index } => {
                write!(f, "degenerate spacing at point {index} (duplicate points?)")
            }
            CurvatureError::InvalidConfiguration { parameter, reason } => {
                write!(f, "invalid configuration for `{parameter}`: {reason}")
            }
            CurvatureError::NonFiniteInput { index } => {
                write!(f, "non-finite input value at index {index}")
            }
        }
    }
}

impl std::error::Error for CurvatureError {}

/// Rejects sequences containing NaN or infinite values.
pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), CurvatureError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CurvatureError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_parameter_name() {
        let err = CurvatureError::invalid("window", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("window"), "unexpected message: {msg}");
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn ensure_finite_reports_first_offender() {
        assert_eq!(ensure_finite(&[0.0, 1.0, 2.0]), Ok(()));
        assert_eq!(
            ensure_finite(&[0.0, f64::NAN, f64::INFINITY]),
            Err(CurvatureError::NonFiniteInput { index: 1 })
        );
    }
}
