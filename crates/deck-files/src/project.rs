//! The full input set for one simulation task.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::file::InputFile;
use crate::kind;

/// An ordered collection of input files sharing one task root and id.
///
/// The simulator is pointed at `{task_root}/{task_id}` and picks up every
/// file with that stem; `write_input` produces exactly that layout.
#[derive(Debug, Clone)]
pub struct Project {
    task_root: PathBuf,
    task_id: String,
    files: Vec<InputFile>,
}

impl Project {
    /// A project with one (empty) file per standard kind.
    pub fn new(task_root: impl Into<PathBuf>, task_id: impl Into<String>) -> Self {
        let task_root = task_root.into();
        let task_id = task_id.into();
        let files = kind::standard_kinds()
            .into_iter()
            .map(|k| InputFile::new(k, &task_root, task_id.clone()))
            .collect();
        Project {
            task_root,
            task_id,
            files,
        }
    }

    pub fn task_root(&self) -> &Path {
        &self.task_root
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// The path stem handed to the simulator executable.
    pub fn model_root(&self) -> PathBuf {
        self.task_root.join(&self.task_id)
    }

    pub fn files(&self) -> &[InputFile] {
        &self.files
    }

    pub fn file(&self, kind_name: &str) -> Option<&InputFile> {
        self.files.iter().find(|f| f.kind().name == kind_name)
    }

    pub fn file_mut(&mut self, kind_name: &str) -> Option<&mut InputFile> {
        self.files.iter_mut().find(|f| f.kind().name == kind_name)
    }

    /// Add an extra file (e.g. a second distributed-properties file).
    pub fn add_file(&mut self, file: InputFile) {
        self.files.push(file);
    }

    /// Write every non-empty input file; returns the written paths.
    pub fn write_input(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for file in &self.files {
            if let Some(path) = file.write()? {
                written.push(path);
            }
        }
        tracing::info!(
            task = %self.model_root().display(),
            files = written.len(),
            "input deck written"
        );
        Ok(written)
    }

    /// Load an existing model directory.
    ///
    /// The task id is taken from the first file found with a known deck
    /// extension; each standard kind with a matching `{id}.{ext}` file is
    /// parsed, everything else is left empty.
    pub fn load(task_root: impl Into<PathBuf>) -> Result<Project> {
        let task_root = task_root.into();
        let task_id = detect_task_id(&task_root)?;
        let mut project = Project::new(&task_root, &task_id);
        for file in &mut project.files {
            let path = file.file_path();
            if path.is_file() {
                file.read(&path)?;
            }
        }
        tracing::info!(task = %project.model_root().display(), "model loaded");
        Ok(project)
    }
}

/// Find the task id by scanning for files with a known deck extension.
fn detect_task_id(task_root: &Path) -> Result<String> {
    let known: Vec<&str> = kind::standard_kinds()
        .iter()
        .map(|k| k.extension())
        .collect();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(task_root)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();
    for path in entries {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if known.contains(&ext) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                return Ok(stem.to_string());
            }
        }
    }
    Err(crate::error::Error::MissingFile {
        path: task_root.to_path_buf(),
    })
}
