use crate::pipeline::PipelineConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `curvature_profile` tool.
///
/// ```json
/// {
///   "input": "centerline.json",
///   "pipeline": { "stages": [{ "kind": "smooth", "window": 8 }] },
///   "output": { "report_json": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ProfileToolConfig {
    /// JSON array of `[x, y]` centerline points.
    pub input: PathBuf,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: ProfileOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileOutputConfig {
    /// Where to write the full diagnostics report. Printed to stdout when unset.
    pub report_json: Option<PathBuf>,
    /// Also print one curvature value per line.
    pub print_profile: bool,
}

pub fn load_config(path: &Path) -> Result<ProfileToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<ProfileToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::FilterStage;

    #[test]
    fn minimal_config_uses_default_pipeline() {
        let config = parse_config(r#"{ "input": "points.json" }"#).unwrap();
        assert_eq!(config.input, PathBuf::from("points.json"));
        assert_eq!(config.pipeline, PipelineConfig::default());
        assert!(config.output.report_json.is_none());
        assert!(!config.output.print_profile);
    }

    #[test]
    fn full_config_round_trips_stages() {
        let config = parse_config(
            r#"{
                "input": "points.json",
                "pipeline": { "stages": [{ "kind": "denoise", "min_run_length": 3 }] },
                "output": { "report_json": "report.json", "print_profile": true }
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.pipeline.stages,
            vec![FilterStage::Denoise { min_run_length: 3 }]
        );
        assert_eq!(config.output.report_json, Some(PathBuf::from("report.json")));
        assert!(config.output.print_profile);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/curvature.json")).unwrap_err();
        assert!(err.contains("/nonexistent/curvature.json"), "{err}");
    }
}
