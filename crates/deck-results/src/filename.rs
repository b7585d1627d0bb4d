//! Splitting of result-file names into their task/point/polyline parts.
//!
//! The simulator encodes metadata in output filenames:
//!
//! ```text
//! {task_id}_time_{point}[_{process}].tec      point observation
//! {task_id}_ply_{line}_t{step}[_{process}].tec  polyline snapshot
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static POINT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>.+)_time_(?P<pnt>[^_]+?)(?:_(?P<pcs>.+))?\.tec$")
        .expect("Invalid point-filename regex")
});

static POLYLINE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>.+)_ply_(?P<line>.+)_t(?P<step>\d+)(?:_(?P<pcs>.+))?\.tec$")
        .expect("Invalid polyline-filename regex")
});

/// Parts of a point-observation output filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOutputName {
    pub task_id: String,
    pub point: String,
    pub process: Option<String>,
}

/// Parts of a polyline output filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolylineOutputName {
    pub task_id: String,
    pub line: String,
    pub step: usize,
    pub process: Option<String>,
}

/// Split a point output filename; `None` when the shape doesn't match.
pub fn split_point_path(path: &Path) -> Option<PointOutputName> {
    let name = path.file_name()?.to_str()?;
    let caps = POINT_NAME.captures(name)?;
    Some(PointOutputName {
        task_id: caps["id"].to_string(),
        point: caps["pnt"].to_string(),
        process: caps.name("pcs").map(|m| m.as_str().to_string()),
    })
}

/// Split a polyline output filename; `None` when the shape doesn't match.
pub fn split_polyline_path(path: &Path) -> Option<PolylineOutputName> {
    let name = path.file_name()?.to_str()?;
    let caps = POLYLINE_NAME.captures(name)?;
    Some(PolylineOutputName {
        task_id: caps["id"].to_string(),
        line: caps["line"].to_string(),
        step: caps["step"].parse().ok()?,
        process: caps.name("pcs").map(|m| m.as_str().to_string()),
    })
}
