use nalgebra::{Point2, Vector2};

/// Centerline sample in a planar, metric frame.
pub type PathPoint = Point2<f64>;

/// Per-point curvature values, index-aligned with the source points.
pub type CurvatureProfile = Vec<f64>;

/// Tangent or tangent-derivative vector produced by the estimator passes.
pub type PathVector = Vector2<f64>;
