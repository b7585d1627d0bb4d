//! File-kind configuration: one marker dialect plus an optional keyword
//! whitelist per deck file type.
//!
//! Kinds are plain configuration structs handed to the generic codec; there
//! is no per-kind subclassing. Keyword tables are abbreviated to the
//! commonly used subset of each file type; kinds without a table accept any
//! keyword.

use deck_blocks::{BlockDocument, Dialect};

use crate::error::{Error, Result};

/// Legal sub-keywords for one main keyword. A `""` entry permits content
/// attached directly to the main keyword (no sub-keyword line).
#[derive(Debug, Clone, Copy)]
pub struct MainKeyword {
    pub name: &'static str,
    pub subs: &'static [&'static str],
}

/// The keyword whitelist for one file kind.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    pub main: &'static [MainKeyword],
}

/// Configuration for one deck file type.
#[derive(Debug, Clone)]
pub struct FileKind {
    /// Short kind name, also the file extension ("pcs", "bc", ...).
    pub name: &'static str,
    pub dialect: Dialect,
    pub keywords: Option<KeywordTable>,
}

impl FileKind {
    fn standard(name: &'static str, main: &'static [MainKeyword]) -> Self {
        FileKind {
            name,
            dialect: Dialect::standard(),
            keywords: Some(KeywordTable { main }),
        }
    }

    /// A kind with no whitelist; any keyword passes.
    pub fn unchecked(name: &'static str) -> Self {
        FileKind {
            name,
            dialect: Dialect::standard(),
            keywords: None,
        }
    }

    pub fn extension(&self) -> &'static str {
        self.name
    }

    /// Validate a document against this kind's keyword table.
    ///
    /// Matching follows the deck convention: a keyword read from disk
    /// matches the longest whitelisted keyword it starts with, tolerating
    /// trailing garbage in hand-written files.
    pub fn check(&self, doc: &BlockDocument) -> Result<()> {
        let Some(table) = &self.keywords else {
            return Ok(());
        };
        for block in doc.blocks() {
            let main = table
                .main
                .iter()
                .filter(|m| block.name().starts_with(m.name))
                .max_by_key(|m| m.name.len())
                .ok_or_else(|| Error::UnknownMainKeyword {
                    kind: self.name.to_string(),
                    keyword: block.name().to_string(),
                })?;
            for (key, _) in block.entries() {
                if key.is_empty() {
                    if main.subs.contains(&"") {
                        continue;
                    }
                    return Err(Error::UnknownSubKeyword {
                        kind: self.name.to_string(),
                        main: main.name.to_string(),
                        keyword: "<direct content>".to_string(),
                    });
                }
                if find_key(key, main.subs).is_none() {
                    return Err(Error::UnknownSubKeyword {
                        kind: self.name.to_string(),
                        main: main.name.to_string(),
                        keyword: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Longest-prefix keyword lookup.
pub fn find_key<'a>(key: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|c| !c.is_empty() && key.starts_with(c))
        .max_by_key(|c| c.len())
}

pub fn process() -> FileKind {
    FileKind::standard(
        "pcs",
        &[MainKeyword {
            name: "PROCESS",
            subs: &[
                "PCS_TYPE",
                "NUM_TYPE",
                "CPL_TYPE",
                "TIM_TYPE",
                "PRIMARY_VARIABLE",
                "ELEMENT_MATRIX_OUTPUT",
                "BOUNDARY_CONDITION_OUTPUT",
                "RELOAD",
                "DEACTIVATED_SUBDOMAIN",
                "MSH_TYPE",
                "MEDIUM_TYPE",
            ],
        }],
    )
}

pub fn boundary_condition() -> FileKind {
    FileKind::standard(
        "bc",
        &[MainKeyword {
            name: "BOUNDARY_CONDITION",
            subs: &[
                "PCS_TYPE",
                "PRIMARY_VARIABLE",
                "COMP_NAME",
                "GEO_TYPE",
                "DIS_TYPE",
                "TIM_TYPE",
                "FCT_TYPE",
                "MSH_TYPE",
                "EPSILON",
                "CONSTRAINED",
            ],
        }],
    )
}

pub fn initial_condition() -> FileKind {
    FileKind::standard(
        "ic",
        &[MainKeyword {
            name: "INITIAL_CONDITION",
            subs: &[
                "PCS_TYPE",
                "PRIMARY_VARIABLE",
                "COMP_NAME",
                "STORE_VALUES",
                "DIS_TYPE",
                "GEO_TYPE",
            ],
        }],
    )
}

pub fn source_term() -> FileKind {
    FileKind::standard(
        "st",
        &[MainKeyword {
            name: "SOURCE_TERM",
            subs: &[
                "PCS_TYPE",
                "PRIMARY_VARIABLE",
                "COMP_NAME",
                "GEO_TYPE",
                "DIS_TYPE",
                "TIM_TYPE",
                "TIME_INTERPOLATION",
                "FCT_TYPE",
                "MSH_TYPE",
                "NODE_AVERAGING",
                "DISTRIBUTE_VOLUME_FLUX",
                "CONSTRAINED",
            ],
        }],
    )
}

pub fn medium_properties() -> FileKind {
    FileKind::standard(
        "mmp",
        &[MainKeyword {
            name: "MEDIUM_PROPERTIES",
            subs: &[
                "PCS_TYPE",
                "NAME",
                "GEO_TYPE",
                "GEOMETRY_DIMENSION",
                "GEOMETRY_INCLINATION",
                "GEOMETRY_AREA",
                "POROSITY",
                "TORTUOSITY",
                "STORAGE",
                "CONDUCTIVITY_MODEL",
                "UNCONFINED",
                "PERMEABILITY_TENSOR",
                "PERMEABILITY_DISTRIBUTION",
                "PERMEABILITY_SATURATION",
                "POROSITY_DISTRIBUTION",
                "CAPILLARY_PRESSURE",
                "MASS_DISPERSION",
                "HEAT_DISPERSION",
            ],
        }],
    )
}

pub fn fluid_properties() -> FileKind {
    FileKind::standard(
        "mfp",
        &[MainKeyword {
            name: "FLUID_PROPERTIES",
            subs: &[
                "FLUID_TYPE",
                "FLUID_NAME",
                "COMPONENTS",
                "COMPRESSIBILITY",
                "DENSITY",
                "TEMPERATURE",
                "VISCOSITY",
                "SPECIFIC_HEAT_CAPACITY",
                "HEAT_CONDUCTIVITY",
                "DIFFUSION",
                "GRAVITY",
            ],
        }],
    )
}

pub fn solid_properties() -> FileKind {
    FileKind::standard(
        "msp",
        &[MainKeyword {
            name: "SOLID_PROPERTIES",
            subs: &[
                "NAME",
                "SWELLING_PRESSURE_TYPE",
                "DENSITY",
                "THERMAL",
                "ELASTICITY",
                "CREEP",
                "BIOT_CONSTANT",
                "SOLID_BULK_MODULUS",
            ],
        }],
    )
}

pub fn numerics() -> FileKind {
    FileKind::standard(
        "num",
        &[MainKeyword {
            name: "NUMERICS",
            subs: &[
                "PCS_TYPE",
                "RENUMBER",
                "NON_LINEAR_ITERATION",
                "NON_LINEAR_SOLVER",
                "LINEAR_SOLVER",
                "COUPLING_ITERATIONS",
                "COUPLING_CONTROL",
                "COUPLED_PROCESS",
                "EXTERNAL_SOLVER_OPTION",
                "ELE_GAUSS_POINTS",
                "ELE_MASS_LUMPING",
                "ELE_UPWINDING",
                "ELE_SUPG",
                "FEM_FCT",
                "NEWTON_DAMPING",
            ],
        }],
    )
}

pub fn time_stepping() -> FileKind {
    FileKind::standard(
        "tim",
        &[MainKeyword {
            name: "TIME_STEPPING",
            subs: &[
                "PCS_TYPE",
                "TIME_START",
                "TIME_END",
                "TIME_UNIT",
                "INDEPENDENT",
                "TIME_STEPS",
                "TIME_SPLITS",
                "CRITICAL_TIME",
                "TIME_CONTROL",
            ],
        }],
    )
}

pub fn output() -> FileKind {
    FileKind::standard(
        "out",
        &[
            MainKeyword {
                name: "OUTPUT",
                subs: &[
                    "NOD_VALUES",
                    "PCON_VALUES",
                    "ELE_VALUES",
                    "RWPT_VALUES",
                    "GEO_TYPE",
                    "TIM_TYPE",
                    "DAT_TYPE",
                    "AMPLIFIER",
                    "PCS_TYPE",
                    "DIS_TYPE",
                    "MSH_TYPE",
                    "TECPLOT_ZONE_SHARE",
                ],
            },
            MainKeyword {
                name: "VERSION",
                subs: &[""],
            },
        ],
    )
}

pub fn geometry() -> FileKind {
    FileKind::standard(
        "gli",
        &[
            MainKeyword {
                name: "POINTS",
                subs: &[""],
            },
            MainKeyword {
                name: "POLYLINE",
                subs: &[
                    "NAME",
                    "POINTS",
                    "EPSILON",
                    "TYPE",
                    "MAT_GROUP",
                    "POINT_VECTOR",
                ],
            },
            MainKeyword {
                name: "SURFACE",
                subs: &["NAME", "POLYLINES", "EPSILON", "TYPE", "TIN", "MAT_GROUP"],
            },
            MainKeyword {
                name: "VOLUME",
                subs: &["NAME", "SURFACES", "TYPE", "MAT_GROUP", "LAYER"],
            },
        ],
    )
}

pub fn time_curves() -> FileKind {
    FileKind::standard(
        "rfd",
        &[
            MainKeyword {
                name: "CURVES",
                subs: &[""],
            },
            MainKeyword {
                name: "CURVE",
                subs: &[""],
            },
        ],
    )
}

pub fn distributed_properties() -> FileKind {
    FileKind::standard(
        "mpd",
        &[MainKeyword {
            name: "MEDIUM_PROPERTIES_DISTRIBUTED",
            subs: &["MSH_TYPE", "MMP_TYPE", "DIS_TYPE", "CONVERSION_FACTOR", "DATA"],
        }],
    )
}

/// Header view of the mesh file; bulk node/element data is handled by the
/// dedicated mesh reader in deck-results.
pub fn mesh_header() -> FileKind {
    FileKind::standard(
        "msh",
        &[MainKeyword {
            name: "FEM_MSH",
            subs: &[
                "PCS_TYPE",
                "GEO_NAME",
                "GEO_TYPE",
                "LAYER",
                "AXISYMMETRY",
                "CROSS_SECTION",
                "NODES",
                "ELEMENTS",
            ],
        }],
    )
}

/// Every kind a complete input set may contain, in write order.
pub fn standard_kinds() -> Vec<FileKind> {
    vec![
        geometry(),
        mesh_header(),
        process(),
        boundary_condition(),
        initial_condition(),
        source_term(),
        medium_properties(),
        fluid_properties(),
        solid_properties(),
        numerics(),
        time_stepping(),
        output(),
        time_curves(),
        distributed_properties(),
    ]
}
