//! Reader for single-zone point-observation tables.

use std::path::Path;

use crate::error::{Error, Result};
use crate::tec;

/// Time series observed at one output point: one named column per variable,
/// rows in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl PointTable {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Number of rows (time steps).
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a point output table.
///
/// The file must hold exactly one zone; rows become per-variable columns
/// keyed by the declared names, preserving row order.
pub fn parse(text: &str) -> Result<PointTable> {
    let table = tec::scan(text)?;
    if table.zones.len() != 1 {
        return Err(Error::malformed(
            1,
            format!("expected a single zone, found {}", table.zones.len()),
        ));
    }
    let zone = &table.zones[0];
    let mut columns = vec![Vec::with_capacity(zone.rows.len()); table.variables.len()];
    for row in &zone.rows {
        for (col, value) in columns.iter_mut().zip(row) {
            col.push(*value);
        }
    }
    Ok(PointTable {
        names: table.variables,
        columns,
    })
}

/// Parse a point output table from disk.
pub fn parse_path(path: &Path) -> Result<PointTable> {
    tracing::debug!(path = %path.display(), "reading point table");
    parse(&std::fs::read_to_string(path)?)
}
