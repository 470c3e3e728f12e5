//! Diagnostics data model returned by
//! [`CurvaturePipeline::process_with_diagnostics`](crate::CurvaturePipeline).
//!
//! `PipelineReport` carries the final profile together with a
//! `PipelineTrace`: the raw estimator output, a summary of every stage output
//! and the time spent in each stage. Everything serializes to camelCase JSON
//! for offline inspection.

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, PipelineReport, PipelineTrace, ProfileSummary, StageReport};
pub use timing::{StageTiming, TimingBreakdown};
