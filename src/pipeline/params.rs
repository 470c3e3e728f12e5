//! Stage configuration for the curvature pipeline.
//!
//! A [`PipelineConfig`] is an ordered list of [`FilterStage`]s applied after
//! curvature estimation. The default chain only smooths; the bracketed chain
//! used for speed planning is available through
//! [`PipelineConfig::speed_bracketed`].
//!
//! Configurations deserialize from JSON with a `kind` tag per stage:
//!
//! ```json
//! { "stages": [
//!     { "kind": "quantize", "accel_limit": 2.5, "velocity_increment": 2.2352,
//!       "max_velocity": 35.7632, "round": "up" },
//!     { "kind": "denoise", "min_run_length": 4 },
//!     { "kind": "rate_limit", "spacing": 1.0, "max_rate": 0.039 }
//! ] }
//! ```

use crate::filters::RoundPolicy;
use serde::{Deserialize, Serialize};

/// Moving-average window used by the default chain.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 8;
/// Lateral acceleration limit (m/s²) for the bracketed chain.
pub const DEFAULT_ACCEL_LIMIT: f64 = 2.5;
/// Bracket velocity step, 5 mph in m/s.
pub const DEFAULT_VELOCITY_INCREMENT: f64 = 2.2352;
/// Highest bracketed velocity, 80 mph in m/s.
pub const DEFAULT_MAX_VELOCITY: f64 = 35.7632;
/// Shortest bracket run kept by the denoiser.
pub const DEFAULT_MIN_RUN_LENGTH: usize = 4;
/// Curvature change allowed per metre of travel.
pub const DEFAULT_MAX_CURVATURE_RATE: f64 = 0.039;

/// One post-processing step applied to the curvature profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterStage {
    /// Centered moving average over `window` samples.
    Smooth {
        window: usize,
        #[serde(default)]
        keep_first: bool,
    },
    /// Snap to curvature brackets built from the acceleration limit.
    Quantize {
        accel_limit: f64,
        velocity_increment: f64,
        max_velocity: f64,
        #[serde(default)]
        round: RoundPolicy,
    },
    /// Absorb runs shorter than `min_run_length` samples.
    Denoise { min_run_length: usize },
    /// Bound the change per sample to `max_rate * spacing`.
    RateLimit { spacing: f64, max_rate: f64 },
}

impl FilterStage {
    /// Short label used in logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            FilterStage::Smooth { .. } => "smooth",
            FilterStage::Quantize { .. } => "quantize",
            FilterStage::Denoise { .. } => "denoise",
            FilterStage::RateLimit { .. } => "rate_limit",
        }
    }
}

/// Ordered list of filter stages run after curvature estimation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub stages: Vec<FilterStage>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stages: vec![FilterStage::Smooth {
                window: DEFAULT_SMOOTHING_WINDOW,
                keep_first: false,
            }],
        }
    }
}

impl PipelineConfig {
    /// No post-processing: the pipeline returns the raw curvature.
    pub fn raw() -> Self {
        Self { stages: Vec::new() }
    }

    /// Quantize to speed brackets (rounding up), drop short brackets, then
    /// limit the curvature rate for points `spacing` metres apart.
    pub fn speed_bracketed(spacing: f64) -> Self {
        Self {
            stages: vec![
                FilterStage::Quantize {
                    accel_limit: DEFAULT_ACCEL_LIMIT,
                    velocity_increment: DEFAULT_VELOCITY_INCREMENT,
                    max_velocity: DEFAULT_MAX_VELOCITY,
                    round: RoundPolicy::Up,
                },
                FilterStage::Denoise {
                    min_run_length: DEFAULT_MIN_RUN_LENGTH,
                },
                FilterStage::RateLimit {
                    spacing,
                    max_rate: DEFAULT_MAX_CURVATURE_RATE,
                },
            ],
        }
    }

    pub fn with_stage(mut self, stage: FilterStage) -> Self {
        self.stages.push(stage);
        self
    }
}
