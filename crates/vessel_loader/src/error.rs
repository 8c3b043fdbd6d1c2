//! # Loader Error Types
//!
//! All errors that can occur while loading or reloading a game module.
//! Every one of these is recoverable from the host's point of view after the
//! first successful load: the previous module stays installed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the module load protocol.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Copying the module binary to the loader-owned path failed.
    #[error("failed to copy module {from} -> {to}: {source}")]
    Copy {
        /// Canonical module path the build tool writes to.
        from: PathBuf,
        /// Loader-owned destination path.
        to: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// The dynamic linker refused the copied image.
    #[error("failed to load module image {path}: {reason}")]
    ImageLoad {
        /// Path of the rejected image.
        path: PathBuf,
        /// Linker-reported reason.
        reason: String,
    },

    /// The image loaded but does not export the tick symbol.
    #[error("module {path} does not export `{symbol}`: {reason}")]
    MissingSymbol {
        /// Path of the image missing the symbol.
        path: PathBuf,
        /// The symbol that was looked up.
        symbol: String,
        /// Linker-reported reason.
        reason: String,
    },

    /// Reading the canonical file's modification time failed.
    #[error("failed to read modification time of {path}: {source}")]
    Timestamp {
        /// The canonical module path.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;
