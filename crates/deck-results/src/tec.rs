//! Shared scanner for the structured ASCII table files the simulator
//! writes for point and polyline output.
//!
//! ```text
//! TITLE = "Time curves in points"
//! VARIABLES = "TIME","HEAD"
//! ZONE T="POINT=well"
//!  0.0 1.0
//!  43200.0 0.021
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("Invalid quoted-token regex"));

static ZONE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"T\s*=\s*"([^"]*)""#).expect("Invalid zone-title regex"));

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Zone {
    pub title: String,
    pub rows: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TableFile {
    pub variables: Vec<String>,
    pub zones: Vec<Zone>,
}

/// Scan a table file in one pass.
///
/// Every data row must have exactly one column per declared variable;
/// unknown header lines are skipped; a structural problem fails the whole
/// scan.
pub(crate) fn scan(text: &str) -> Result<TableFile> {
    let mut variables: Option<Vec<String>> = None;
    let mut zones: Vec<Zone> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("VARIABLES") {
            variables = Some(parse_names(rest));
        } else if line.starts_with("ZONE") {
            let title = ZONE_TITLE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            zones.push(Zone {
                title,
                rows: Vec::new(),
            });
        } else if starts_numeric(line) {
            let vars = variables.as_ref().ok_or(Error::MissingVariables)?;
            let zone = zones
                .last_mut()
                .ok_or_else(|| Error::malformed(line_no, "data row before any ZONE line"))?;
            let row = parse_row(line, line_no)?;
            if row.len() != vars.len() {
                return Err(Error::malformed(
                    line_no,
                    format!(
                        "expected {} columns, found {}",
                        vars.len(),
                        row.len()
                    ),
                ));
            }
            zone.rows.push(row);
        }
        // anything else (TITLE, aux records) carries no table data
    }

    let variables = variables.ok_or(Error::MissingVariables)?;
    Ok(TableFile { variables, zones })
}

/// Variable names: quoted tokens when present, otherwise comma/space
/// separated words after the `=`.
fn parse_names(rest: &str) -> Vec<String> {
    let quoted: Vec<String> = QUOTED
        .captures_iter(rest)
        .map(|c| c[1].trim().to_string())
        .collect();
    if !quoted.is_empty() {
        return quoted;
    }
    rest.trim_start_matches(['=', ' '])
        .split([',', ' '])
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| Error::malformed(line_no, format!("invalid number '{tok}'")))
        })
        .collect()
}

fn starts_numeric(line: &str) -> bool {
    matches!(
        line.as_bytes().first(),
        Some(b) if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.')
    )
}
