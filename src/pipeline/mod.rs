//! Curvature pipeline: estimation followed by configurable filter stages.
//!
//! ```no_run
//! use path_curvature::{CurvaturePipeline, PathPoint, PipelineConfig};
//!
//! # fn example(points: Vec<PathPoint>) -> Result<(), path_curvature::CurvatureError> {
//! let pipeline = CurvaturePipeline::new(PipelineConfig::default())?;
//! let curvature = pipeline.process(&points)?;
//! assert_eq!(curvature.len(), points.len());
//! # Ok(())
//! # }
//! ```
//!
//! Stages
//! - Estimate: unsigned curvature from the centerline points.
//! - Filters: the configured [`FilterStage`]s, in order. Each stage preserves
//!   the profile length, so index `i` always refers to point `i`.
//!
//! The first failing stage aborts the run; no partial profile is returned.

pub mod params;

pub use params::{FilterStage, PipelineConfig};

use crate::curvature::estimate_curvature;
use crate::diagnostics::{
    InputDescriptor, PipelineReport, PipelineTrace, ProfileSummary, StageReport, TimingBreakdown,
};
use crate::error::CurvatureError;
use crate::filters::{
    build_bracket_table, denoise, quantize, rate_limit, smooth, BracketTable, RoundPolicy,
};
use crate::types::{CurvatureProfile, PathPoint};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;

/// Filter stage with its parameters validated and bracket table built.
#[derive(Clone, Debug)]
enum PreparedStage {
    Smooth { window: usize, keep_first: bool },
    Quantize { table: BracketTable, round: RoundPolicy },
    Denoise { min_run_length: usize },
    RateLimit { spacing: f64, max_rate: f64 },
}

impl PreparedStage {
    fn prepare(stage: &FilterStage) -> Result<Self, CurvatureError> {
        let prepared = match *stage {
            FilterStage::Smooth { window, keep_first } => {
                PreparedStage::Smooth { window, keep_first }
            }
            FilterStage::Quantize {
                accel_limit,
                velocity_increment,
                max_velocity,
                round,
            } => PreparedStage::Quantize {
                table: build_bracket_table(accel_limit, velocity_increment, max_velocity)?,
                round,
            },
            FilterStage::Denoise { min_run_length } => PreparedStage::Denoise { min_run_length },
            FilterStage::RateLimit { spacing, max_rate } => {
                PreparedStage::RateLimit { spacing, max_rate }
            }
        };
        // Every filter checks its parameters before touching the samples, so an
        // empty run surfaces configuration errors up front.
        prepared.apply(&[])?;
        Ok(prepared)
    }

    fn apply(&self, input: &[f64]) -> Result<CurvatureProfile, CurvatureError> {
        match self {
            PreparedStage::Smooth { window, keep_first } => smooth(input, *window, *keep_first),
            PreparedStage::Quantize { table, round } => quantize(input, table, *round),
            PreparedStage::Denoise { min_run_length } => denoise(input, *min_run_length),
            PreparedStage::RateLimit { spacing, max_rate } => {
                rate_limit(input, *spacing, *max_rate)
            }
        }
    }
}

/// Curvature estimator followed by a validated chain of filter stages.
///
/// The pipeline holds no per-run state; one instance can serve any number of
/// paths, including concurrently through [`CurvaturePipeline::process_batch`].
#[derive(Clone, Debug)]
pub struct CurvaturePipeline {
    config: PipelineConfig,
    stages: Vec<PreparedStage>,
}

impl CurvaturePipeline {
    /// Validate `config` and build any bracket tables it needs.
    pub fn new(config: PipelineConfig) -> Result<Self, CurvatureError> {
        let stages = config
            .stages
            .iter()
            .map(PreparedStage::prepare)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { config, stages })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Bracket tables of the quantize stages, in stage order.
    pub fn bracket_tables(&self) -> impl Iterator<Item = &BracketTable> {
        self.stages.iter().filter_map(|stage| match stage {
            PreparedStage::Quantize { table, .. } => Some(table),
            _ => None,
        })
    }

    /// Estimate curvature for `points` and run every configured stage.
    pub fn process(&self, points: &[PathPoint]) -> Result<CurvatureProfile, CurvatureError> {
        let mut profile = estimate_curvature(points).map_err(|err| {
            debug!("CurvaturePipeline::process estimation failed: {err}");
            err
        })?;
        for (stage, prepared) in self.config.stages.iter().zip(self.stages.iter()) {
            profile = prepared.apply(&profile).map_err(|err| {
                debug!("CurvaturePipeline::process stage {} failed: {err}", stage.label());
                err
            })?;
            debug_assert_eq!(profile.len(), points.len());
        }
        Ok(profile)
    }

    /// Same as [`process`](Self::process) but also records per-stage
    /// summaries and timings.
    pub fn process_with_diagnostics(
        &self,
        points: &[PathPoint],
    ) -> Result<PipelineReport, CurvatureError> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let raw_curvature = estimate_curvature(points)?;
        timings.push("estimate", elapsed_ms(start));

        let mut stage_reports = Vec::with_capacity(self.stages.len());
        let mut profile = raw_curvature.clone();
        for (stage, prepared) in self.config.stages.iter().zip(self.stages.iter()) {
            let start = Instant::now();
            let next = prepared.apply(&profile)?;
            timings.push(stage.label(), elapsed_ms(start));
            stage_reports.push(StageReport::new(stage.label(), &profile, &next));
            profile = next;
        }
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "CurvaturePipeline::process_with_diagnostics points={} stages={} total_ms={:.3}",
            points.len(),
            self.stages.len(),
            timings.total_ms
        );

        Ok(PipelineReport {
            profile,
            trace: PipelineTrace {
                input: InputDescriptor::describe(points, self.stages.len()),
                timings,
                raw_summary: ProfileSummary::of(&raw_curvature),
                raw_curvature,
                stages: stage_reports,
            },
        })
    }

    /// Process independent path segments, one result per segment in input
    /// order. Runs on the rayon thread pool with the `parallel` feature.
    pub fn process_batch<P>(
        &self,
        segments: &[P],
    ) -> Vec<Result<CurvatureProfile, CurvatureError>>
    where
        P: AsRef<[PathPoint]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            segments
                .par_iter()
                .map(|segment| self.process(segment.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            segments
                .iter()
                .map(|segment| self.process(segment.as_ref()))
                .collect()
        }
    }
}

/// Run the pipeline described by `config` once over `points`.
pub fn run_pipeline(
    points: &[PathPoint],
    config: &PipelineConfig,
) -> Result<CurvatureProfile, CurvatureError> {
    CurvaturePipeline::new(config.clone())?.process(points)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
