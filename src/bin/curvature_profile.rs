use path_curvature::config::profile_tool::{load_config, ProfileToolConfig};
use path_curvature::diagnostics::PipelineReport;
use path_curvature::io::{load_points_json, write_json_file};
use path_curvature::CurvaturePipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let points = load_points_json(&config.input)?;
    let pipeline = CurvaturePipeline::new(config.pipeline.clone())
        .map_err(|e| format!("Invalid pipeline configuration: {e}"))?;
    let report = pipeline
        .process_with_diagnostics(&points)
        .map_err(|e| format!("Curvature pipeline failed on {}: {e}", config.input.display()))?;

    print_text_summary(&report);
    write_report(&config, &report)?;
    Ok(())
}

fn write_report(config: &ProfileToolConfig, report: &PipelineReport) -> Result<(), String> {
    if config.output.print_profile {
        for value in &report.profile {
            println!("{value}");
        }
    }
    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, report)?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_text_summary(report: &PipelineReport) {
    let trace = &report.trace;
    println!(
        "points={} path_length={:.3} stages={} total_ms={:.3}",
        trace.input.point_count,
        trace.input.path_length,
        trace.input.stage_count,
        trace.timings.total_ms
    );
    if let Some(raw) = &trace.raw_summary {
        println!(
            "  {:<12} min={:.5} max={:.5} mean={:.5}",
            "estimate", raw.min, raw.max, raw.mean
        );
    }
    for stage in &trace.stages {
        match &stage.summary {
            Some(s) => println!(
                "  {:<12} min={:.5} max={:.5} mean={:.5} changed={}",
                stage.label, s.min, s.max, s.mean, stage.changed_samples
            ),
            None => println!("  {:<12} (empty)", stage.label),
        }
    }
}

fn usage() -> String {
    "Usage: curvature_profile <config.json>".to_string()
}
