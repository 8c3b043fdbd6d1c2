//! # Host Error Types
//!
//! Fatal setup errors only. Everything that can go wrong after startup is
//! either a recoverable runtime condition (handled where it happens, loop
//! continues) or an invariant violation (panics).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort startup. Reported to the user once; the process exits
/// non-zero; none are retried.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Resolving or entering the executable's directory failed.
    #[error("failed to enter executable directory: {0}")]
    Workdir(#[source] io::Error),

    /// The config file exists but could not be read or parsed.
    #[error("invalid config file {path}: {reason}")]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// The configured persistent arena cannot hold the index surface.
    #[error("persistent arena too small: {got} bytes, need at least {need}")]
    ArenaTooSmall {
        /// Configured capacity.
        got: usize,
        /// Minimum required capacity.
        need: usize,
    },

    /// Creating the event loop or window failed.
    #[error("failed to create window: {0}")]
    Window(String),

    /// GPU setup failed (surface, adapter, or device).
    #[cfg(feature = "client")]
    #[error(transparent)]
    Render(#[from] vessel_rendering::RenderError),

    /// The initial module load failed. Later load failures are recoverable;
    /// this one means there is nothing to run.
    #[error("initial module load failed: {0}")]
    InitialLoad(#[from] vessel_loader::LoadError),
}
