//! Results-side integration: split output filenames, read observation
//! tables and the legacy mesh, and drive the runner against a fake
//! simulator binary.

use deck_results::{point, polyline, split_point_path, split_polyline_path};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const POINT_TEC: &str = "\
TITLE = \"time curve\"
VARIABLES = \"TIME\",\"HEAD\"
ZONE T=\"POINT=well\"
0.0 10.0
60.0 9.5
120.0 9.2
";

const POLYLINE_TEC: &str = "\
VARIABLES = \"DIST\",\"HEAD\"
ZONE T=\"TIME=0.0\"
0.0 10.0
5.0 10.0
ZONE T=\"TIME=60.0\"
0.0 9.5
5.0 9.8
";

const MESH: &str = "\
#FEM_MSH
 $PCS_TYPE
  GROUNDWATER_FLOW
 $NODES
  3
  0 0.0 0.0 0.0
  1 1.0 0.0 0.0
  2 1.0 1.0 0.0
 $ELEMENTS
  1
  0 0 tri 0 1 2
#STOP
";

#[test]
fn test_point_output_discovery_and_parse() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pump_test_time_well_GROUNDWATER_FLOW.tec");
    fs::write(&path, POINT_TEC).unwrap();

    let name = split_point_path(&path).unwrap();
    assert_eq!(name.task_id, "pump_test");
    assert_eq!(name.point, "well");
    assert_eq!(name.process.as_deref(), Some("GROUNDWATER_FLOW"));

    let table = point::parse_path(&path).unwrap();
    assert_eq!(table.names(), ["TIME", "HEAD"]);
    assert_eq!(table.column("TIME").unwrap(), [0.0, 60.0, 120.0]);
    assert_eq!(table.column("HEAD").unwrap(), [10.0, 9.5, 9.2]);
}

#[test]
fn test_polyline_output_discovery_and_parse() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pump_test_ply_profile_t1.tec");
    fs::write(&path, POLYLINE_TEC).unwrap();

    let name = split_polyline_path(&path).unwrap();
    assert_eq!(name.task_id, "pump_test");
    assert_eq!(name.line, "profile");
    assert_eq!(name.step, 1);
    assert_eq!(name.process, None);

    let table = polyline::parse_path(&path).unwrap();
    assert_eq!(table.time(), [0.0, 60.0]);
    let head = table.series("HEAD").unwrap();
    assert_eq!(head.len(), 2);
    assert_eq!(head[0], [10.0, 10.0]);
    assert_eq!(head[1], [9.5, 9.8]);
}

#[test]
fn test_mesh_parse() {
    let meshes = deck_results::mesh::parse(MESH).unwrap();
    assert_eq!(meshes.len(), 1);
    let mesh = &meshes[0];
    assert_eq!(mesh.pcs_type.as_deref(), Some("GROUNDWATER_FLOW"));
    assert_eq!(mesh.nodes.len(), 3);
    assert_eq!(mesh.nodes[2], [1.0, 1.0, 0.0]);
    assert_eq!(mesh.elements.len(), 1);
    assert_eq!(mesh.elements[0].kind, deck_results::ElementType::Tri);
    assert_eq!(mesh.elements[0].nodes, [0, 1, 2]);
}

#[cfg(unix)]
mod runner {
    use super::*;
    use deck_blocks::Value;
    use pretty_assertions::assert_eq;
    use deck_files::Project;
    use deck_runner::{run, RunnerConfig};
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// A stand-in simulator that writes one point observation table next to
    /// the model it was handed.
    fn fake_simulator(dir: &Path) -> PathBuf {
        let exe = dir.join("fake-sim");
        let script = format!(
            "#!/bin/sh\n\
             echo \"reading model $1\"\n\
             cat > \"${{1}}_time_well.tec\" <<'EOF'\n{POINT_TEC}EOF\n\
             echo \"Simulation time: 0.2 s\"\n"
        );
        fs::write(&exe, script).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
        exe
    }

    #[test]
    fn test_full_pipeline_write_run_read() {
        let temp = TempDir::new().unwrap();
        let task = temp.path().join("task");

        let mut project = Project::new(&task, "pump_test");
        project
            .file_mut("pcs")
            .unwrap()
            .document
            .add_block("PROCESS", [("PCS_TYPE", Value::scalar("GROUNDWATER_FLOW"))])
            .unwrap();
        project.write_input().unwrap();

        let config = RunnerConfig {
            executable: Some(fake_simulator(temp.path())),
            save_log: true,
            ..Default::default()
        };
        let report = run(&project, &config).unwrap();
        assert_eq!(report.exit_code, 0);
        assert!(report.finished());
        assert!(report.log.contains("reading model"));
        assert_eq!(report.output_files.len(), 1);
        report.expect_outputs(["pump_test_time_well.tec"]).unwrap();

        let table = point::parse_path(&report.output_dir.join("pump_test_time_well.tec")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column("HEAD").unwrap()[0], 10.0);
    }
}
