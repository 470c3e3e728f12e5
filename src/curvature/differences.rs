//! Finite-difference passes used by the curvature estimator.
//!
//! Each pass is a pure transformation over index-aligned sequences. All of
//! them share [`stencil`], so the boundary treatment (forward difference at the
//! first sample, backward at the last, centered elsewhere) lives in one place.

use crate::error::CurvatureError;
use crate::types::{PathPoint, PathVector};

/// Returns the `(lo, hi)` sample indices used to differentiate at `i`.
///
/// Requires `n >= 2` and `i < n`.
#[inline]
pub(crate) fn stencil(i: usize, n: usize) -> (usize, usize) {
    debug_assert!(n >= 2 && i < n);
    if i == 0 {
        (0, 1)
    } else if i == n - 1 {
        (n - 2, n - 1)
    } else {
        (i - 1, i + 1)
    }
}

/// Raw tangent vectors `dp/di`; centered differences are halved so every
/// entry is a per-sample difference.
pub(crate) fn tangent_differences(points: &[PathPoint]) -> Vec<PathVector> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (lo, hi) = stencil(i, n);
            (points[hi] - points[lo]) / (hi - lo) as f64
        })
        .collect()
}

/// Scales every tangent to unit length.
pub(crate) fn normalize_tangents(
    raw: &[PathVector],
) -> Result<Vec<PathVector>, CurvatureError> {
    raw.iter()
        .enumerate()
        .map(|(index, v)| {
            v.try_normalize(0.0)
                .ok_or(CurvatureError::DegenerateSpacing { index })
        })
        .collect()
}

/// Cumulative chord length, `s[0] = 0`.
///
/// A zero-length chord between `i - 1` and `i` fails with
/// `DegenerateSpacing { index: i }`.
pub(crate) fn arc_lengths(points: &[PathPoint]) -> Result<Vec<f64>, CurvatureError> {
    let mut out = Vec::with_capacity(points.len());
    if points.is_empty() {
        return Ok(out);
    }
    out.push(0.0);
    let mut total = 0.0;
    for (i, w) in points.windows(2).enumerate() {
        let chord = (w[1] - w[0]).norm();
        if chord <= 0.0 {
            return Err(CurvatureError::DegenerateSpacing { index: i + 1 });
        }
        total += chord;
        out.push(total);
    }
    Ok(out)
}

/// Derivative of `values` with respect to the arc-length samples `s`.
pub(crate) fn differentiate_by_arc_length(
    values: &[PathVector],
    s: &[f64],
) -> Result<Vec<PathVector>, CurvatureError> {
    debug_assert_eq!(values.len(), s.len());
    let n = values.len();
    (0..n)
        .map(|i| {
            let (lo, hi) = stencil(i, n);
            let ds = s[hi] - s[lo];
            if ds <= 0.0 || !ds.is_finite() {
                return Err(CurvatureError::DegenerateSpacing { index: i });
            }
            Ok((values[hi] - values[lo]) / ds)
        })
        .collect()
}

pub(crate) fn magnitudes(vectors: &[PathVector]) -> Vec<f64> {
    vectors.iter().map(|v| v.norm()).collect()
}
