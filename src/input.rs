//! JSON point lists for the polyline and paths presets.
//!
//! Points are written as `{"x": .., "y": .., "z": ..}` with `z` optional.
//! The `try_*` functions report malformed input; the plain ones log it and
//! return an empty list so an interactive session keeps going.

use serde::Deserialize;

use crate::errors::InputError;
use crate::log::warn;
use crate::types::Point3;

#[derive(Debug, Clone, Copy, Deserialize)]
struct JsonPoint {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
}

impl From<JsonPoint> for Point3 {
    fn from(p: JsonPoint) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

/// Parse `[{x, y, z?}, ...]`
pub fn try_parse_points(json: &str) -> Result<Vec<Point3>, InputError> {
    let raw: Vec<JsonPoint> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Point3::from).collect())
}

/// Parse `[[{x, y, z?}, ...], ...]`
pub fn try_parse_paths(json: &str) -> Result<Vec<Vec<Point3>>, InputError> {
    let raw: Vec<Vec<JsonPoint>> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|path| path.into_iter().map(Point3::from).collect())
        .collect())
}

/// Like [`try_parse_points`], but malformed input gives an empty list
pub fn parse_points(json: &str) -> Vec<Point3> {
    try_parse_points(json).unwrap_or_else(|error| {
        warn!(%error, "could not parse point list, using none");
        Vec::new()
    })
}

/// Like [`try_parse_paths`], but malformed input gives an empty list
pub fn parse_paths(json: &str) -> Vec<Vec<Point3>> {
    try_parse_paths(json).unwrap_or_else(|error| {
        warn!(%error, "could not parse path list, using none");
        Vec::new()
    })
}
