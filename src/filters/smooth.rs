use crate::error::{ensure_finite, CurvatureError};
use crate::types::CurvatureProfile;

/// Centered moving average with a window truncated at the sequence ends.
///
/// Index `i` averages `input[i - W/2 ..= i + W/2]` clamped to the valid range,
/// so even windows behave like the next odd size. With `keep_first` the first
/// sample is copied through unchanged.
pub fn smooth(
    input: &[f64],
    window: usize,
    keep_first: bool,
) -> Result<CurvatureProfile, CurvatureError> {
    if window == 0 {
        return Err(CurvatureError::invalid("window", "must be at least 1"));
    }
    ensure_finite(input)?;
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let n = input.len();
    let half = window / 2;
    let start = usize::from(keep_first);
    let mut output = Vec::with_capacity(n);
    output.extend_from_slice(&input[..start]);
    for i in start..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half).min(n - 1);
        let total: f64 = input[lo..=hi].iter().sum();
        output.push(total / (hi - lo + 1) as f64);
    }
    Ok(output)
}
