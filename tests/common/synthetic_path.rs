use path_curvature::PathPoint;

/// Points `spacing` apart along a straight line from `start` with `heading`
/// (radians), `count` samples in total.
pub fn straight(start: PathPoint, heading: f64, spacing: f64, count: usize) -> Vec<PathPoint> {
    assert!(spacing > 0.0, "spacing must be positive");
    let (s, c) = heading.sin_cos();
    (0..count)
        .map(|i| {
            let d = i as f64 * spacing;
            PathPoint::new(start.x + c * d, start.y + s * d)
        })
        .collect()
}

/// Samples on a circle of `radius` around the origin, starting at angle 0 and
/// advancing by `step_rad` counter-clockwise.
pub fn circle_arc(radius: f64, step_rad: f64, count: usize) -> Vec<PathPoint> {
    assert!(radius > 0.0, "radius must be positive");
    (0..count)
        .map(|i| {
            let th = i as f64 * step_rad;
            PathPoint::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}

/// Layout of a synthetic road: straight, left-hand arc, straight.
pub struct CurvedRoad {
    pub points: Vec<PathPoint>,
    /// Index range of the samples lying on the arc.
    pub arc: std::ops::Range<usize>,
    pub radius: f64,
}

/// Straight of `lead` samples along +x, then `arc_samples` on a left turn of
/// `radius`, then `tail` samples straight ahead, all roughly `spacing` apart.
pub fn curved_road(
    lead: usize,
    radius: f64,
    arc_samples: usize,
    tail: usize,
    spacing: f64,
) -> CurvedRoad {
    assert!(lead >= 1, "need at least one lead sample");
    let mut points = straight(PathPoint::new(0.0, 0.0), 0.0, spacing, lead);
    let x0 = points[lead - 1].x;
    let dth = spacing / radius;
    for k in 1..=arc_samples {
        let th = k as f64 * dth;
        points.push(PathPoint::new(
            x0 + radius * th.sin(),
            radius * (1.0 - th.cos()),
        ));
    }
    let end = points[points.len() - 1];
    let heading = arc_samples as f64 * dth;
    let tail_points = straight(end, heading, spacing, tail + 1);
    points.extend(tail_points.into_iter().skip(1));

    CurvedRoad {
        points,
        arc: lead..lead + arc_samples,
        radius,
    }
}
