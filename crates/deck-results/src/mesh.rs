//! Reader for the legacy mesh text format.
//!
//! ```text
//! #FEM_MSH
//!  $PCS_TYPE
//!   GROUNDWATER_FLOW
//!  $NODES
//!   4
//!   0 0.0 0.0 0.0
//!   ...
//!  $ELEMENTS
//!   2
//!   0 0 tri 0 1 2
//!   ...
//! #STOP
//! ```

use std::path::Path;

use crate::error::{Error, Result};

/// Element geometry of the legacy mesh format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Line,
    Tri,
    Quad,
    Tet,
    Pyra,
    Pris,
    Hex,
}

impl ElementType {
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "line" => Some(Self::Line),
            "tri" => Some(Self::Tri),
            "quad" => Some(Self::Quad),
            "tet" => Some(Self::Tet),
            "pyra" => Some(Self::Pyra),
            "pris" => Some(Self::Pris),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }

    pub fn node_count(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Tri => 3,
            Self::Quad => 4,
            Self::Tet => 4,
            Self::Pyra => 5,
            Self::Pris => 6,
            Self::Hex => 8,
        }
    }
}

/// One mesh element with its id, material group, and node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: i64,
    pub material: i64,
    pub kind: ElementType,
    pub nodes: Vec<i64>,
}

/// One `#FEM_MSH` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub pcs_type: Option<String>,
    pub geo_type: Option<String>,
    pub geo_name: Option<String>,
    pub layer: Option<i64>,
    pub axisymmetry: bool,
    pub cross_section: bool,
    /// Node positions in file order; the leading index column is dropped.
    pub nodes: Vec<[f64; 3]>,
    /// Elements in file order, all types interleaved as on disk.
    pub elements: Vec<Element>,
}

/// Parse a legacy mesh file; one `Mesh` per `#FEM_MSH` block.
pub fn parse(text: &str) -> Result<Vec<Mesh>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut meshes: Vec<Mesh> = Vec::new();
    let mut i = 0;
    let mut stop_found = false;

    while i < lines.len() {
        let line_no = i + 1;
        let line = uncomment(lines[i]);
        i += 1;
        if line.is_empty() {
            continue;
        }
        let key = line[0];

        if key == "#FEM_MSH" {
            meshes.push(Mesh::default());
            continue;
        }
        if key == "#STOP" {
            stop_found = true;
            break;
        }
        let mesh = meshes
            .last_mut()
            .ok_or_else(|| Error::malformed(line_no, "keyword before #FEM_MSH"))?;

        match key {
            "$AXISYMMETRY" => mesh.axisymmetry = true,
            "$CROSS_SECTION" => mesh.cross_section = true,
            "$PCS_TYPE" => mesh.pcs_type = Some(take_token(&lines, &mut i)?),
            "$GEO_NAME" => mesh.geo_name = Some(take_token(&lines, &mut i)?),
            "$GEO_TYPE" => {
                // carries both the geometry type and name; the name
                // overrides any earlier $GEO_NAME
                let row = take_line(&lines, &mut i)?;
                if row.len() < 2 {
                    return Err(Error::malformed(i, "$GEO_TYPE needs type and name"));
                }
                mesh.geo_type = Some(row[0].to_string());
                mesh.geo_name = Some(row[1].to_string());
            }
            "$LAYER" => {
                let token = take_token(&lines, &mut i)?;
                mesh.layer = Some(parse_int(&token, i)?);
            }
            "$NODES" => {
                let count = parse_count(&take_token(&lines, &mut i)?, i)?;
                mesh.nodes.reserve(count.min(lines.len() - i));
                for _ in 0..count {
                    let row = take_line(&lines, &mut i)?;
                    if row.len() < 4 {
                        return Err(Error::malformed(i, "node row needs id x y z"));
                    }
                    mesh.nodes.push([
                        parse_float(row[1], i)?,
                        parse_float(row[2], i)?,
                        parse_float(row[3], i)?,
                    ]);
                }
            }
            "$ELEMENTS" => {
                let count = parse_count(&take_token(&lines, &mut i)?, i)?;
                mesh.elements.reserve(count.min(lines.len() - i));
                for _ in 0..count {
                    let row = take_line(&lines, &mut i)?;
                    mesh.elements.push(parse_element(&row, i)?);
                }
            }
            other => {
                return Err(Error::malformed(
                    line_no,
                    format!("unknown mesh keyword '{other}'"),
                ));
            }
        }
    }

    if !stop_found {
        return Err(Error::malformed(lines.len(), "missing #STOP marker"));
    }
    Ok(meshes)
}

/// Parse a legacy mesh file from disk.
pub fn parse_path(path: &Path) -> Result<Vec<Mesh>> {
    tracing::debug!(path = %path.display(), "reading legacy mesh");
    parse(&std::fs::read_to_string(path)?)
}

/// `id material [-1] type nodes...`; some writers insert a spurious third
/// column that must be skipped.
fn parse_element(row: &[&str], line_no: usize) -> Result<Element> {
    if row.len() < 3 {
        return Err(Error::malformed(line_no, "element row too short"));
    }
    let id = parse_int(row[0], line_no)?;
    let material = parse_int(row[1], line_no)?;
    let mut pos = 2;
    if row[pos] == "-1" {
        pos = 3;
        if row.len() <= pos {
            return Err(Error::malformed(line_no, "element row too short"));
        }
    }
    let kind = ElementType::from_keyword(row[pos]).ok_or_else(|| Error::UnknownElementType {
        name: row[pos].to_string(),
        line: line_no,
    })?;
    let want = kind.node_count();
    let nodes = &row[pos + 1..];
    if nodes.len() < want {
        return Err(Error::malformed(
            line_no,
            format!("element needs {want} node indices"),
        ));
    }
    let nodes = nodes[..want]
        .iter()
        .map(|t| parse_int(t, line_no))
        .collect::<Result<Vec<_>>>()?;
    Ok(Element {
        id,
        material,
        kind,
        nodes,
    })
}

fn uncomment(line: &str) -> Vec<&str> {
    let cut = line
        .find(';')
        .into_iter()
        .chain(line.find("//"))
        .min()
        .unwrap_or(line.len());
    line[..cut].split_whitespace().collect()
}

/// Next non-blank line as tokens, advancing the cursor.
fn take_line<'a>(lines: &[&'a str], i: &mut usize) -> Result<Vec<&'a str>> {
    while *i < lines.len() {
        let row = uncomment(lines[*i]);
        *i += 1;
        if !row.is_empty() {
            return Ok(row);
        }
    }
    Err(Error::malformed(lines.len(), "unexpected end of file"))
}

fn take_token(lines: &[&str], i: &mut usize) -> Result<String> {
    Ok(take_line(lines, i)?[0].to_string())
}

/// A node or element count; negative values in a malformed file must fail
/// the parse, not wrap around on the cast.
fn parse_count(token: &str, line_no: usize) -> Result<usize> {
    let n = parse_int(token, line_no)?;
    usize::try_from(n).map_err(|_| Error::malformed(line_no, format!("invalid count '{n}'")))
}

fn parse_int(token: &str, line_no: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| Error::malformed(line_no, format!("invalid integer '{token}'")))
}

fn parse_float(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| Error::malformed(line_no, format!("invalid number '{token}'")))
}
