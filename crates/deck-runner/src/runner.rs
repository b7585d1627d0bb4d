//! Blocking invocation of the simulator over a written input deck.

use std::path::{Path, PathBuf};
use std::process::Command;

use deck_files::Project;

use crate::config::RunnerConfig;
use crate::discovery::resolve_executable;
use crate::error::{Error, Result};

/// Number of log lines kept in a failure report.
const LOG_TAIL_LINES: usize = 20;

/// Printed by the simulator at the end of a clean run; a zero exit without
/// it means the process died before finishing the time loop.
const SUCCESS_MARKER: &str = "Simulation time";

/// Outcome of one simulator run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Exit code of the simulator process.
    pub exit_code: i32,
    /// Captured stdout/stderr of the run.
    pub log: String,
    /// Where the log was saved, when configured.
    pub log_path: Option<PathBuf>,
    /// Directory holding the result files.
    pub output_dir: PathBuf,
    /// Result tables found in the output directory, sorted by name.
    pub output_files: Vec<PathBuf>,
}

impl RunReport {
    /// Whether the log carries the simulator's end-of-run marker.
    pub fn finished(&self) -> bool {
        self.log.contains(SUCCESS_MARKER)
    }

    /// Check that the run produced the named result files.
    pub fn expect_outputs<I, P>(&self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for name in names {
            let path = self.output_dir.join(name.as_ref());
            if !path.is_file() {
                return Err(Error::MissingOutput { path });
            }
        }
        Ok(())
    }
}

/// Run the simulator on a project's written input deck.
///
/// Blocks until the process exits; there is no retry and no timeout, both
/// are the caller's concern. The process is handed
/// `{task_root}/{task_id}` plus `--output-directory` when configured.
pub fn run(project: &Project, config: &RunnerConfig) -> Result<RunReport> {
    let executable = resolve_executable(config)?;
    let output_dir = resolve_output_dir(project, config);

    let mut cmd = Command::new(&executable);
    cmd.arg(project.model_root());
    if config.output_dir.is_some() {
        std::fs::create_dir_all(&output_dir)?;
        cmd.arg("--output-directory").arg(&output_dir);
    }

    tracing::info!(
        executable = %executable.display(),
        task = %project.model_root().display(),
        "starting simulation"
    );
    let output = cmd.output()?;

    let mut log = String::from_utf8_lossy(&output.stdout).to_string();
    log.push_str(&String::from_utf8_lossy(&output.stderr));

    let log_path = if config.save_log {
        let name = config
            .log_name
            .clone()
            .unwrap_or_else(|| format!("{}_log.txt", project.task_id()));
        let path = output_dir.join(name);
        std::fs::create_dir_all(&output_dir)?;
        std::fs::write(&path, &log)?;
        Some(path)
    } else {
        None
    };

    match output.status.code() {
        Some(0) => {
            let output_files = scan_output_files(&output_dir)?;
            tracing::info!(
                task = %project.model_root().display(),
                results = output_files.len(),
                "simulation finished"
            );
            Ok(RunReport {
                exit_code: 0,
                log,
                log_path,
                output_dir,
                output_files,
            })
        }
        Some(code) => {
            tracing::warn!(code, "simulation failed");
            Err(Error::Failed {
                code,
                log_tail: tail(&log, LOG_TAIL_LINES),
            })
        }
        None => Err(Error::Terminated),
    }
}

fn resolve_output_dir(project: &Project, config: &RunnerConfig) -> PathBuf {
    match &config.output_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => project.task_root().join(dir),
        None => project.task_root().to_path_buf(),
    }
}

/// Result tables written by the run, by extension.
fn scan_output_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("tec"))
        .collect();
    files.sort();
    Ok(files)
}

fn tail(log: &str, lines: usize) -> String {
    let all: Vec<&str> = log.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
