//! Discrete curvature of a sampled planar path.
//!
//! The estimator composes the passes in [`differences`]:
//!
//! 1. raw tangents `dp/di` (forward / centered / backward differences),
//! 2. normalization to unit tangents `T`,
//! 3. cumulative chord-length arc length `s`,
//! 4. `dT/ds` with the same stencil,
//! 5. curvature `κ = |dT/ds|`.
//!
//! For points sampled on a circle of radius `r` the interior estimate is
//! `cos(Δθ/2) / r`, so it converges to `1/r` as sampling gets denser. The two
//! samples closest to each endpoint mix one-sided tangents into the stencil and
//! under-estimate the curvature.

mod differences;

use crate::error::CurvatureError;
use crate::types::{CurvatureProfile, PathPoint, PathVector};
use differences::{
    arc_lengths, differentiate_by_arc_length, magnitudes, normalize_tangents,
    tangent_differences,
};

/// Minimum number of samples needed to take a finite difference.
pub const MIN_POINTS: usize = 2;

/// Unit tangents and their arc-length derivative for one path.
struct TangentField {
    tangents: Vec<PathVector>,
    derivatives: Vec<PathVector>,
}

fn tangent_field(points: &[PathPoint]) -> Result<TangentField, CurvatureError> {
    if points.is_empty() {
        return Ok(TangentField {
            tangents: Vec::new(),
            derivatives: Vec::new(),
        });
    }
    if points.len() < MIN_POINTS {
        return Err(CurvatureError::InsufficientPoints {
            found: points.len(),
            minimum: MIN_POINTS,
        });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(CurvatureError::NonFiniteInput { index });
    }

    let tangents = normalize_tangents(&tangent_differences(points))?;
    let s = arc_lengths(points)?;
    let derivatives = differentiate_by_arc_length(&tangents, &s)?;
    Ok(TangentField {
        tangents,
        derivatives,
    })
}

/// Unsigned curvature at every point of `points`.
///
/// An empty input yields an empty profile; a single point is rejected with
/// [`CurvatureError::InsufficientPoints`]. Duplicate consecutive points fail
/// with [`CurvatureError::DegenerateSpacing`] instead of producing non-finite
/// values.
pub fn estimate_curvature(points: &[PathPoint]) -> Result<CurvatureProfile, CurvatureError> {
    let field = tangent_field(points)?;
    Ok(magnitudes(&field.derivatives))
}

/// Curvature carrying the turn direction: positive when the path turns left
/// (counter-clockwise), negative when it turns right.
pub fn estimate_signed_curvature(
    points: &[PathPoint],
) -> Result<CurvatureProfile, CurvatureError> {
    let field = tangent_field(points)?;
    Ok(field
        .tangents
        .iter()
        .zip(field.derivatives.iter())
        .map(|(t, dt)| {
            let k = dt.norm();
            if t.perp(dt) < 0.0 {
                -k
            } else {
                k
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(radius: f64, count: usize, step_rad: f64) -> Vec<PathPoint> {
        (0..count)
            .map(|i| {
                let th = i as f64 * step_rad;
                PathPoint::new(radius * th.cos(), radius * th.sin())
            })
            .collect()
    }

    #[test]
    fn straight_line_has_zero_curvature() {
        let points: Vec<PathPoint> = (0..4).map(|i| PathPoint::new(i as f64, 0.0)).collect();
        let k = estimate_curvature(&points).unwrap();
        assert_eq!(k, vec![0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn diagonal_line_is_flat_within_tolerance() {
        let points: Vec<PathPoint> = (0..20)
            .map(|i| PathPoint::new(0.3 * i as f64, 0.7 * i as f64 + 2.0))
            .collect();
        let k = estimate_curvature(&points).unwrap();
        assert_eq!(k.len(), points.len());
        assert!(k.iter().all(|v| v.abs() < 1e-9), "curvature={k:?}");
    }

    #[test]
    fn circle_interior_matches_inverse_radius() {
        let radius = 25.0;
        let points = arc(radius, 60, 0.01);
        let k = estimate_curvature(&points).unwrap();
        for (i, v) in k.iter().enumerate().take(points.len() - 2).skip(2) {
            assert!(
                (v - 1.0 / radius).abs() < 1e-4 / radius,
                "index {i}: curvature {v} vs {}",
                1.0 / radius
            );
        }
    }

    #[test]
    fn empty_and_single_point_inputs() {
        assert_eq!(estimate_curvature(&[]).unwrap(), Vec::<f64>::new());
        assert_eq!(
            estimate_curvature(&[PathPoint::new(1.0, 1.0)]),
            Err(CurvatureError::InsufficientPoints {
                found: 1,
                minimum: 2
            })
        );
    }

    #[test]
    fn two_points_yield_zero_curvature() {
        let k = estimate_curvature(&[PathPoint::new(0.0, 0.0), PathPoint::new(2.0, 1.0)]).unwrap();
        assert_eq!(k, vec![0.0, 0.0]);
    }

    #[test]
    fn duplicate_points_are_rejected() {
        let points = vec![
            PathPoint::new(0.0, 0.0),
            PathPoint::new(0.0, 0.0),
            PathPoint::new(1.0, 0.0),
        ];
        assert!(matches!(
            estimate_curvature(&points),
            Err(CurvatureError::DegenerateSpacing { .. })
        ));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let points = vec![
            PathPoint::new(0.0, 0.0),
            PathPoint::new(f64::NAN, 0.0),
            PathPoint::new(1.0, 0.0),
        ];
        assert_eq!(
            estimate_curvature(&points),
            Err(CurvatureError::NonFiniteInput { index: 1 })
        );
    }

    #[test]
    fn signed_curvature_follows_turn_direction() {
        let left = arc(10.0, 20, 0.05);
        let k_left = estimate_signed_curvature(&left).unwrap();
        assert!(k_left[5..15].iter().all(|&v| v > 0.0));

        let right: Vec<PathPoint> = left.iter().map(|p| PathPoint::new(p.x, -p.y)).collect();
        let k_right = estimate_signed_curvature(&right).unwrap();
        let unsigned = estimate_curvature(&right).unwrap();
        for (s, u) in k_right.iter().zip(unsigned.iter()) {
            assert!((s.abs() - u).abs() < 1e-12);
        }
        assert!(k_right[5..15].iter().all(|&v| v < 0.0));
    }
}
