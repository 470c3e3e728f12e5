//! Curvature brackets derived from a lateral-acceleration limit.
//!
//! For a velocity `v` the largest curvature that keeps lateral acceleration
//! under `A` is `κ = A / v²`. Stepping `v` by a fixed increment yields a
//! ladder of curvature upper bounds; quantizing a profile onto that ladder
//! turns it into piecewise-constant speed brackets.

use crate::error::{ensure_finite, CurvatureError};
use crate::types::CurvatureProfile;
use serde::{Deserialize, Serialize};

/// Upper bound standing in for "no curvature limit". Kept finite so quantized
/// profiles never contain infinities.
pub const UNBOUNDED: f64 = f64::MAX;

/// How a value falling between two bounds is mapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPolicy {
    /// Next larger bound.
    #[default]
    Up,
    /// Next smaller bound.
    Down,
    /// Closer bound, measured against the midpoint; the midpoint rounds up.
    Nearest,
}

/// Ascending curvature upper bounds ending with [`UNBOUNDED`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketTable {
    accel_limit: f64,
    bounds: Vec<f64>,
}

impl BracketTable {
    /// Bounds in ascending order; the last one is the sentinel.
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Lateral-acceleration limit the table was built from.
    pub fn accel_limit(&self) -> f64 {
        self.accel_limit
    }

    /// Speed that keeps lateral acceleration at the limit on curvature
    /// `bound`, or `None` when the bound does not restrict speed.
    pub fn speed_limit(&self, bound: f64) -> Option<f64> {
        if bound.is_nan() || bound <= 0.0 || bound >= UNBOUNDED {
            return None;
        }
        Some((self.accel_limit / bound).sqrt())
    }

    /// Maps a single value onto the table.
    pub fn snap(&self, value: f64, policy: RoundPolicy) -> f64 {
        let bounds = &self.bounds;
        let idx = bounds.partition_point(|&b| b < value);
        if idx == 0 {
            return bounds[0];
        }
        if idx == bounds.len() {
            return bounds[bounds.len() - 1];
        }
        let high = bounds[idx];
        if high == value {
            return high;
        }
        let low = bounds[idx - 1];
        match policy {
            RoundPolicy::Up => high,
            RoundPolicy::Down => low,
            RoundPolicy::Nearest => {
                let halfway = low + (high - low) / 2.0;
                if value < halfway {
                    low
                } else {
                    high
                }
            }
        }
    }
}

/// Builds the bracket table for lateral-acceleration limit `accel_limit`,
/// velocity step `velocity_increment` and speed ceiling `max_velocity`.
///
/// Velocities `Δv, 2Δv, …` strictly below `max_velocity` each contribute a
/// bound `A / v²`.
pub fn build_bracket_table(
    accel_limit: f64,
    velocity_increment: f64,
    max_velocity: f64,
) -> Result<BracketTable, CurvatureError> {
    if !(accel_limit.is_finite() && accel_limit > 0.0) {
        return Err(CurvatureError::invalid(
            "accel_limit",
            format!("must be positive, got {accel_limit}"),
        ));
    }
    if !(velocity_increment.is_finite() && velocity_increment > 0.0) {
        return Err(CurvatureError::invalid(
            "velocity_increment",
            format!("must be positive, got {velocity_increment}"),
        ));
    }
    if !(max_velocity.is_finite() && max_velocity > velocity_increment) {
        return Err(CurvatureError::invalid(
            "max_velocity",
            format!("must exceed the velocity increment {velocity_increment}, got {max_velocity}"),
        ));
    }

    // Velocity ascends, so bounds are generated in descending order.
    let mut bounds = Vec::new();
    let mut velocity = velocity_increment;
    while velocity < max_velocity {
        bounds.push(accel_limit / (velocity * velocity));
        velocity += velocity_increment;
    }
    bounds.reverse();
    bounds.push(UNBOUNDED);

    Ok(BracketTable {
        accel_limit,
        bounds,
    })
}

/// Maps every value of `input` onto `table` using `policy`.
pub fn quantize(
    input: &[f64],
    table: &BracketTable,
    policy: RoundPolicy,
) -> Result<CurvatureProfile, CurvatureError> {
    ensure_finite(input)?;
    if table.is_empty() {
        return Err(CurvatureError::invalid("bracket_table", "table has no bounds"));
    }
    Ok(input.iter().map(|&v| table.snap(v, policy)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_table() -> BracketTable {
        // v = 1, 2, 3 -> bounds 1, 1/4, 1/9
        build_bracket_table(1.0, 1.0, 4.0).unwrap()
    }

    #[test]
    fn table_is_ascending_with_sentinel() {
        let table = unit_table();
        assert_eq!(table.bounds(), &[1.0 / 9.0, 0.25, 1.0, UNBOUNDED]);
        assert!(table.bounds().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn default_highway_table_covers_five_mph_steps() {
        let table = build_bracket_table(2.5, 2.2352, 35.7632).unwrap();
        assert!(table.len() >= 16);
        assert!((table.bounds()[table.len() - 2] - 2.5 / (2.2352 * 2.2352)).abs() < 1e-12);
        assert_eq!(*table.bounds().last().unwrap(), UNBOUNDED);
    }

    #[test]
    fn rejects_malformed_parameters() {
        assert!(build_bracket_table(1.0, 0.0, 4.0).is_err());
        assert!(build_bracket_table(1.0, -1.0, 4.0).is_err());
        assert!(build_bracket_table(1.0, 2.0, 2.0).is_err());
        assert!(build_bracket_table(0.0, 1.0, 4.0).is_err());
        assert!(build_bracket_table(f64::NAN, 1.0, 4.0).is_err());
    }

    #[test]
    fn rounding_policies() {
        let table = unit_table();
        assert_eq!(table.snap(0.2, RoundPolicy::Up), 0.25);
        assert_eq!(table.snap(0.2, RoundPolicy::Down), 1.0 / 9.0);
        assert_eq!(table.snap(0.2, RoundPolicy::Nearest), 0.25);
        assert_eq!(table.snap(0.15, RoundPolicy::Nearest), 1.0 / 9.0);
        assert_eq!(table.snap(0.625, RoundPolicy::Nearest), 1.0);
    }

    #[test]
    fn values_outside_table_are_clamped() {
        let table = unit_table();
        assert_eq!(table.snap(0.0, RoundPolicy::Down), 1.0 / 9.0);
        assert_eq!(table.snap(-3.0, RoundPolicy::Up), 1.0 / 9.0);
        assert_eq!(table.snap(5.0, RoundPolicy::Down), 1.0);
        assert_eq!(table.snap(5.0, RoundPolicy::Up), UNBOUNDED);
    }

    #[test]
    fn exact_bounds_map_to_themselves() {
        let table = unit_table();
        for policy in [RoundPolicy::Up, RoundPolicy::Down, RoundPolicy::Nearest] {
            for &b in table.bounds() {
                assert_eq!(table.snap(b, policy), b);
            }
        }
    }

    #[test]
    fn quantize_is_idempotent() {
        let table = unit_table();
        let input = [0.0, 0.05, 0.2, 0.3, 0.9, 1.5, 0.11];
        for policy in [RoundPolicy::Up, RoundPolicy::Down, RoundPolicy::Nearest] {
            let once = quantize(&input, &table, policy).unwrap();
            let twice = quantize(&once, &table, policy).unwrap();
            assert_eq!(once, twice);
            assert!(once.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn speed_limit_inverts_bracket_formula() {
        let table = unit_table();
        assert!((table.speed_limit(0.25).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(table.speed_limit(UNBOUNDED), None);
        assert_eq!(table.speed_limit(0.0), None);
    }

    #[test]
    fn round_policy_deserializes_lowercase() {
        let p: RoundPolicy = serde_json::from_str("\"nearest\"").unwrap();
        assert_eq!(p, RoundPolicy::Nearest);
    }
}
