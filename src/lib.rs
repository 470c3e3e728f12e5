#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod curvature;
pub mod diagnostics;
pub mod error;
pub mod filters;
pub mod pipeline;
pub mod types;

// Tool support: JSON configuration and file helpers for the binaries.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points.
pub use crate::curvature::{estimate_curvature, estimate_signed_curvature};
pub use crate::error::CurvatureError;
pub use crate::pipeline::{run_pipeline, CurvaturePipeline, FilterStage, PipelineConfig};
pub use crate::types::{CurvatureProfile, PathPoint};

// Individual filter stages for explicit composition.
pub use crate::filters::{
    build_bracket_table, denoise, quantize, rate_limit, smooth, BracketTable, RoundPolicy,
};

// Diagnostics returned by the pipeline.
pub use crate::diagnostics::{PipelineReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use path_curvature::prelude::*;
///
/// let points: Vec<PathPoint> = (0..4).map(|i| PathPoint::new(i as f64, 0.0)).collect();
/// let curvature = run_pipeline(&points, &PipelineConfig::default()).unwrap();
/// assert_eq!(curvature, vec![0.0; 4]);
/// ```
pub mod prelude {
    pub use crate::{
        estimate_curvature, run_pipeline, CurvatureError, CurvaturePipeline, FilterStage,
        PathPoint, PipelineConfig, RoundPolicy,
    };
}
