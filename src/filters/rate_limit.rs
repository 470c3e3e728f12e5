use crate::error::{ensure_finite, CurvatureError};
use crate::types::CurvatureProfile;

/// Bounds the change between consecutive samples to `max_rate * spacing`.
///
/// The first sample is kept; every later sample moves toward its input value
/// by at most the allowed step. Outputs are clamped at zero since curvature
/// magnitudes cannot be negative. `max_rate = f64::INFINITY` disables the
/// limit.
pub fn rate_limit(
    input: &[f64],
    spacing: f64,
    max_rate: f64,
) -> Result<CurvatureProfile, CurvatureError> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(CurvatureError::invalid(
            "spacing",
            format!("must be a positive distance, got {spacing}"),
        ));
    }
    if max_rate.is_nan() || max_rate < 0.0 {
        return Err(CurvatureError::invalid(
            "max_rate",
            format!("must be non-negative, got {max_rate}"),
        ));
    }
    ensure_finite(input)?;

    let max_step = max_rate * spacing;
    let mut output: Vec<f64> = Vec::with_capacity(input.len());
    for &value in input {
        let next = match output.last() {
            None => value,
            Some(&prev) if value > prev => value.min(prev + max_step),
            Some(&prev) if value < prev => value.max(prev - max_step),
            Some(_) => value,
        };
        output.push(next.max(0.0));
    }
    Ok(output)
}
