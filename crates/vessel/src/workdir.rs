//! # Working Directory Setup
//!
//! The module binary and its loader-owned copies live beside the host
//! executable and are addressed by relative path. Entering the executable's
//! directory once at startup makes those paths resolve the same way no
//! matter where the process was launched from.

use std::env;
use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::error::SetupError;

/// Sets the working directory to the executable's own directory.
///
/// Returns the directory entered.
///
/// # Errors
///
/// Fatal setup error if the executable path cannot be resolved or the
/// directory cannot be entered.
pub fn enter_exe_dir() -> Result<PathBuf, SetupError> {
    let exe = env::current_exe().map_err(SetupError::Workdir)?;
    let dir = exe
        .parent()
        .ok_or_else(|| {
            SetupError::Workdir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?
        .to_path_buf();
    env::set_current_dir(&dir).map_err(SetupError::Workdir)?;
    info!(dir = %dir.display(), "working directory set");
    Ok(dir)
}
