//! Locating the simulator executable.

use std::path::{Path, PathBuf};

use crate::config::RunnerConfig;
use crate::error::{Error, Result};

/// Well-known name of the simulator executable.
pub const EXECUTABLE_NAME: &str = "ogs";

/// Resolve the executable: explicit config path first, PATH search second.
pub fn resolve_executable(config: &RunnerConfig) -> Result<PathBuf> {
    if let Some(path) = &config.executable {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(Error::ExecutableNotFound {
            name: path.display().to_string(),
        });
    }
    find_on_path(EXECUTABLE_NAME).ok_or_else(|| Error::ExecutableNotFound {
        name: EXECUTABLE_NAME.to_string(),
    })
}

/// Search the PATH directories for a named executable.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            let exe = dir.join(format!("{name}.exe"));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
