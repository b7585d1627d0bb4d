//! Readers for the simulator's result files.
//!
//! Point-observation tables, polyline tables, result-filename splitting,
//! and the legacy mesh text format. Every reader is a pure function over
//! text or a path: order is preserved, numeric typing is best-effort, and
//! structurally invalid input fails the whole parse.
//!
//! Standards-based mesh interchange (VTK and friends) is deliberately not
//! handled here; callers wanting those formats implement [`MeshSource`]
//! over an external library.

pub mod error;
pub mod filename;
pub mod mesh;
pub mod point;
pub mod polyline;
mod tec;

pub use error::{Error, Result};
pub use filename::{split_point_path, split_polyline_path, PointOutputName, PolylineOutputName};
pub use mesh::{Element, ElementType, Mesh};
pub use point::PointTable;
pub use polyline::PolylineTable;

/// Seam for mesh data coming from outside the legacy text format.
pub trait MeshSource {
    fn load_mesh(&self, path: &std::path::Path) -> Result<Vec<Mesh>>;
}
