//! A single deck file: kind, document, and on-disk location.

use std::path::{Path, PathBuf};

use deck_blocks::{parser, writer, BlockDocument};

use crate::error::{Error, Result};
use crate::kind::FileKind;

/// One input file of a simulation task.
///
/// The file is addressed as `{task_root}/{task_id}.{ext}`. Instead of
/// serializing its document, a file can be pointed at an existing on-disk
/// file which is copied verbatim into the task directory on write.
#[derive(Debug, Clone)]
pub struct InputFile {
    kind: FileKind,
    pub document: BlockDocument,
    task_root: PathBuf,
    task_id: String,
    force_write: bool,
    copy_from: Option<PathBuf>,
}

impl InputFile {
    pub fn new(kind: FileKind, task_root: impl Into<PathBuf>, task_id: impl Into<String>) -> Self {
        InputFile {
            kind,
            document: BlockDocument::new(),
            task_root: task_root.into(),
            task_id: task_id.into(),
            force_write: false,
            copy_from: None,
        }
    }

    pub fn kind(&self) -> &FileKind {
        &self.kind
    }

    pub fn file_path(&self) -> PathBuf {
        self.task_root
            .join(format!("{}.{}", self.task_id, self.kind.extension()))
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty() && self.copy_from.is_none()
    }

    /// Write the file even when its document is empty.
    pub fn set_force_write(&mut self, force: bool) {
        self.force_write = force;
    }

    pub fn set_location(&mut self, task_root: impl Into<PathBuf>, task_id: impl Into<String>) {
        self.task_root = task_root.into();
        self.task_id = task_id.into();
    }

    /// Use an existing file instead of serializing the document.
    pub fn use_existing(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::MissingFile { path });
        }
        self.copy_from = Some(path);
        Ok(())
    }

    pub fn clear_existing(&mut self) {
        self.copy_from = None;
    }

    /// Validate the document against the kind's keyword table.
    pub fn check(&self) -> Result<()> {
        self.kind.check(&self.document)
    }

    /// Write the file into the task directory.
    ///
    /// Empty files are skipped unless force-writing is enabled. Returns the
    /// written path, or `None` when skipped.
    pub fn write(&self) -> Result<Option<PathBuf>> {
        let path = self.file_path();
        if let Some(source) = &self.copy_from {
            std::fs::create_dir_all(&self.task_root)?;
            std::fs::copy(source, &path)?;
            tracing::debug!(kind = self.kind.name, path = %path.display(), "copied external file");
            return Ok(Some(path));
        }
        if self.is_empty() && !self.force_write {
            return Ok(None);
        }
        self.check()?;
        writer::write_to(&self.document, &self.kind.dialect, &path, &banner())?;
        Ok(Some(path))
    }

    /// Replace the document by parsing an existing deck file.
    pub fn read(&mut self, path: &Path) -> Result<()> {
        let doc = parser::parse_file(path, &self.kind.dialect)?;
        self.kind.check(&doc)?;
        self.document = doc;
        Ok(())
    }
}

fn banner() -> Vec<String> {
    vec![format!(
        "|------ generated with simdeck {} ------|",
        env!("CARGO_PKG_VERSION")
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind;
    use deck_blocks::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = InputFile::new(kind::process(), dir.path(), "model");
        assert_eq!(file.write().unwrap(), None);
        assert!(!file.file_path().exists());
    }

    #[test]
    fn test_force_write_emits_marker_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = InputFile::new(kind::boundary_condition(), dir.path(), "model");
        file.set_force_write(true);
        let path = file.write().unwrap().unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.trim_end().ends_with("#STOP"));
    }

    #[test]
    fn test_write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = InputFile::new(kind::process(), dir.path(), "model");
        file.document
            .add_block(
                "PROCESS",
                [
                    ("PCS_TYPE", Value::scalar("GROUNDWATER_FLOW")),
                    ("PRIMARY_VARIABLE", Value::scalar("HEAD")),
                ],
            )
            .unwrap();
        let path = file.write().unwrap().unwrap();

        let mut other = InputFile::new(kind::process(), dir.path(), "model");
        other.read(&path).unwrap();
        assert_eq!(other.document, file.document);
    }

    #[test]
    fn test_write_rejects_invalid_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = InputFile::new(kind::process(), dir.path(), "model");
        file.document
            .add_block("NOT_A_PROCESS_KEY", Vec::<(String, Value)>::new())
            .unwrap();
        assert!(file.write().is_err());
        assert!(!file.file_path().exists());
    }

    #[test]
    fn test_use_existing_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let external = dir.path().join("permeability.mpd");
        std::fs::write(&external, "#MEDIUM_PROPERTIES_DISTRIBUTED\n#STOP\n").unwrap();

        let task = dir.path().join("task");
        let mut file = InputFile::new(kind::distributed_properties(), &task, "model");
        file.use_existing(&external).unwrap();
        let path = file.write().unwrap().unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "#MEDIUM_PROPERTIES_DISTRIBUTED\n#STOP\n"
        );
    }

    #[test]
    fn test_use_existing_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = InputFile::new(kind::process(), dir.path(), "model");
        assert!(matches!(
            file.use_existing(dir.path().join("nope.pcs")),
            Err(Error::MissingFile { .. })
        ));
    }
}
