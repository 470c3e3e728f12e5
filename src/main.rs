use path_curvature::{CurvaturePipeline, PathPoint, PipelineConfig};

fn main() {
    // Demo: a 50 m straight followed by a quarter circle of radius 30 m,
    // sampled every metre.
    let mut points: Vec<PathPoint> = (0..50).map(|i| PathPoint::new(i as f64, 0.0)).collect();
    let radius = 30.0;
    let steps = (radius * std::f64::consts::FRAC_PI_2).round() as usize;
    for k in 1..=steps {
        let th = k as f64 / radius;
        points.push(PathPoint::new(
            49.0 + radius * th.sin(),
            radius * (1.0 - th.cos()),
        ));
    }

    let pipeline = match CurvaturePipeline::new(PipelineConfig::default()) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match pipeline.process(&points) {
        Ok(curvature) => {
            let peak = curvature.iter().cloned().fold(0.0, f64::max);
            println!(
                "points={} peak_curvature={:.4} (expected ~{:.4})",
                curvature.len(),
                peak,
                1.0 / radius
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
