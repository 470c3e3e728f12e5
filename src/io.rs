//! File helpers for centerline points and JSON reports.
//!
//! - `load_points_json`: read a JSON array of `[x, y]` pairs.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::PathPoint;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load centerline points stored as `[[x0, y0], [x1, y1], ...]`.
pub fn load_points_json(path: &Path) -> Result<Vec<PathPoint>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read points {}: {e}", path.display()))?;
    parse_points(&data).map_err(|e| format!("Failed to parse points {}: {e}", path.display()))
}

fn parse_points(data: &str) -> Result<Vec<PathPoint>, serde_json::Error> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(data)?;
    Ok(pairs.into_iter().map(|[x, y]| PathPoint::new(x, y)).collect())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_pairs() {
        let points = parse_points("[[0.0, 1.0], [2.5, -3]]").unwrap();
        assert_eq!(points, vec![PathPoint::new(0.0, 1.0), PathPoint::new(2.5, -3.0)]);
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_points("[[0.0, 1.0, 2.0]]").is_err());
        assert!(parse_points("{}").is_err());
    }
}
