use super::TimingBreakdown;
use crate::types::PathPoint;
use serde::Serialize;

/// Result produced by
/// [`CurvaturePipeline::process_with_diagnostics`](crate::CurvaturePipeline::process_with_diagnostics).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    /// Final profile, identical to what `process` returns.
    pub profile: Vec<f64>,
    pub trace: PipelineTrace,
}

/// Execution trace of a single pipeline run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    /// Estimator output before any filter stage.
    pub raw_curvature: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_summary: Option<ProfileSummary>,
    pub stages: Vec<StageReport>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub point_count: usize,
    /// Chord-length arc length of the whole path.
    pub path_length: f64,
    pub stage_count: usize,
}

impl InputDescriptor {
    pub fn describe(points: &[PathPoint], stage_count: usize) -> Self {
        let path_length = points.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        Self {
            point_count: points.len(),
            path_length,
            stage_count,
        }
    }
}

/// Output of one filter stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub label: String,
    /// Samples whose value differs from the stage input.
    pub changed_samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProfileSummary>,
}

impl StageReport {
    pub fn new(label: impl Into<String>, input: &[f64], output: &[f64]) -> Self {
        let changed_samples = input
            .iter()
            .zip(output.iter())
            .filter(|(a, b)| a != b)
            .count();
        Self {
            label: label.into(),
            changed_samples,
            summary: ProfileSummary::of(output),
        }
    }
}

/// Range and mean of a profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ProfileSummary {
    /// `None` for an empty profile.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let mut summary = ProfileSummary {
            min: first,
            max: first,
            mean: first,
        };
        // Incremental mean so bracket sentinels near f64::MAX cannot overflow.
        for (k, &v) in rest.iter().enumerate() {
            summary.min = summary.min.min(v);
            summary.max = summary.max.max(v);
            summary.mean += (v - summary.mean) / (k + 2) as f64;
        }
        Some(summary)
    }
}
