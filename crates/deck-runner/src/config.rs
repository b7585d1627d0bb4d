//! Runner configuration, resolved once at startup and passed explicitly.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Process-wide runner settings.
///
/// There is no hidden global: callers load (or build) one of these and hand
/// it into [`crate::run`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Explicit path to the simulator executable; when unset, PATH is
    /// searched for the well-known name.
    pub executable: Option<PathBuf>,
    /// Where result files go; defaults to the task root. Relative paths are
    /// resolved against the task root.
    pub output_dir: Option<PathBuf>,
    /// Save captured simulator output next to the results.
    pub save_log: bool,
    /// Log file name; defaults to `{task_id}_log.txt`.
    pub log_name: Option<String>,
}

impl RunnerConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<RunnerConfig> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
