//! Reader for multi-zone polyline tables, one zone per time step.

use std::path::Path;

use crate::error::{Error, Result};
use crate::tec;

/// Values along a polyline over time. For each variable there is one matrix
/// indexed `[time step][node]`; the time axis comes from the zone titles
/// (`ZONE T="TIME=43200.0"`).
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineTable {
    time: Vec<f64>,
    names: Vec<String>,
    series: Vec<Vec<Vec<f64>>>,
}

impl PolylineTable {
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The `[time step][node]` matrix for one variable.
    pub fn series(&self, name: &str) -> Option<&[Vec<f64>]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.series[i].as_slice())
    }

    pub fn steps(&self) -> usize {
        self.time.len()
    }
}

/// Parse a polyline output table.
///
/// Zones must agree on row count (the polyline's node count is fixed over
/// the run) and carry `TIME=<t>` titles.
pub fn parse(text: &str) -> Result<PolylineTable> {
    let table = tec::scan(text)?;
    if table.zones.is_empty() {
        return Err(Error::malformed(1, "polyline table without zones"));
    }
    let node_ct = table.zones[0].rows.len();
    let mut time = Vec::with_capacity(table.zones.len());
    let mut series = vec![Vec::with_capacity(table.zones.len()); table.variables.len()];

    for zone in &table.zones {
        if zone.rows.len() != node_ct {
            return Err(Error::malformed(
                1,
                format!(
                    "zone '{}' has {} rows, expected {}",
                    zone.title,
                    zone.rows.len(),
                    node_ct
                ),
            ));
        }
        time.push(zone_time(&zone.title)?);
        for (var, per_var) in series.iter_mut().enumerate() {
            per_var.push(zone.rows.iter().map(|row| row[var]).collect());
        }
    }

    Ok(PolylineTable {
        time,
        names: table.variables,
        series,
    })
}

/// Parse a polyline output table from disk.
pub fn parse_path(path: &Path) -> Result<PolylineTable> {
    tracing::debug!(path = %path.display(), "reading polyline table");
    parse(&std::fs::read_to_string(path)?)
}

fn zone_time(title: &str) -> Result<f64> {
    let value = title.strip_prefix("TIME=").unwrap_or(title);
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::malformed(1, format!("zone title '{title}' holds no time stamp")))
}
