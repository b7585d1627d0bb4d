//! End-to-end test for the input side: build a model in memory, write the
//! deck, and load it back from disk.

use deck_blocks::{Scalar, Value};
use deck_files::Project;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small steady-state groundwater flow model, the shape a caller would
/// actually build before handing the task to the simulator.
fn groundwater_model(root: &std::path::Path) -> Project {
    let mut project = Project::new(root, "pump_test");

    let gli = project.file_mut("gli").unwrap();
    gli.document
        .add_block(
            "POINTS",
            [(
                "",
                Value::table([vec![0, 0, 0, 0], vec![1, 10, 0, 0]]),
            )],
        )
        .unwrap();

    let pcs = project.file_mut("pcs").unwrap();
    pcs.document
        .add_block(
            "PROCESS",
            [
                ("PCS_TYPE", Value::scalar("GROUNDWATER_FLOW")),
                ("NUM_TYPE", Value::scalar("NEW")),
            ],
        )
        .unwrap();

    let bc = project.file_mut("bc").unwrap();
    bc.document
        .add_block(
            "BOUNDARY_CONDITION",
            [
                ("PCS_TYPE", Value::scalar("GROUNDWATER_FLOW")),
                ("PRIMARY_VARIABLE", Value::scalar("HEAD")),
                ("GEO_TYPE", Value::list(["POINT", "boundary"])),
                (
                    "DIS_TYPE",
                    Value::list([Scalar::from("CONSTANT"), Scalar::Float(0.0)]),
                ),
            ],
        )
        .unwrap();

    let mmp = project.file_mut("mmp").unwrap();
    mmp.document
        .add_block(
            "MEDIUM_PROPERTIES",
            [
                ("GEOMETRY_DIMENSION", Value::scalar(2)),
                ("POROSITY", Value::list([Scalar::Int(1), Scalar::Float(0.2)])),
                (
                    "PERMEABILITY_TENSOR",
                    Value::list([Scalar::from("ISOTROPIC"), Scalar::Float(0.0001)]),
                ),
            ],
        )
        .unwrap();

    let tim = project.file_mut("tim").unwrap();
    tim.document
        .add_block(
            "TIME_STEPPING",
            [
                ("PCS_TYPE", Value::scalar("GROUNDWATER_FLOW")),
                ("TIME_START", Value::scalar(0)),
                ("TIME_END", Value::scalar(600)),
                ("TIME_STEPS", Value::list([10, 60])),
            ],
        )
        .unwrap();

    let out = project.file_mut("out").unwrap();
    out.document
        .add_block(
            "OUTPUT",
            [
                ("NOD_VALUES", Value::scalar("HEAD")),
                ("GEO_TYPE", Value::list(["POINT", "well"])),
                ("DAT_TYPE", Value::scalar("TECPLOT")),
            ],
        )
        .unwrap();

    project
}

#[test]
fn test_write_produces_expected_deck_text() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    let project = groundwater_model(temp.path());
    let written = project.write_input().unwrap();

    // gli, pcs, bc, mmp, tim, out; the untouched kinds are skipped
    assert_eq!(written.len(), 6);
    assert!(!temp.path().join("pump_test.msh").exists());

    let tim = fs::read_to_string(temp.path().join("pump_test.tim")).unwrap();
    assert!(tim.starts_with(";"));
    assert!(tim.contains("generated with simdeck"));
    let body: String = tim
        .lines()
        .filter(|l| !l.starts_with(';'))
        .map(|l| format!("{l}\n"))
        .collect();
    assert_eq!(
        body,
        "#TIME_STEPPING\n \
         $PCS_TYPE\n  \
         GROUNDWATER_FLOW\n \
         $TIME_START\n  \
         0\n \
         $TIME_END\n  \
         600\n \
         $TIME_STEPS\n  \
         10 60\n\
         #STOP\n"
    );

    let gli = fs::read_to_string(temp.path().join("pump_test.gli")).unwrap();
    // direct content: no key line between the marker and the rows
    assert!(gli.contains("#POINTS\n  0 0 0 0\n  1 10 0 0\n"));
}

#[test]
fn test_load_recovers_written_documents() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    let project = groundwater_model(temp.path());
    project.write_input().unwrap();

    let loaded = Project::load(temp.path()).unwrap();
    assert_eq!(loaded.task_id(), "pump_test");
    for kind in ["gli", "pcs", "bc", "mmp", "tim", "out"] {
        assert_eq!(
            loaded.file(kind).unwrap().document,
            project.file(kind).unwrap().document,
            "document mismatch for kind {kind}"
        );
    }
    assert!(loaded.file("st").unwrap().document.is_empty());
}

#[test]
fn test_model_root_matches_simulator_convention() {
    let temp = TempDir::new().unwrap();
    let project = groundwater_model(temp.path());
    assert_eq!(project.model_root(), temp.path().join("pump_test"));
}
