//! # Host Configuration
//!
//! Loaded once at startup from an optional `vessel.toml` beside the
//! executable. Every field has a default, so a missing file runs the host
//! with stock settings; a *malformed* file is a fatal setup error, because
//! silently ignoring a config the user wrote is worse than refusing to start.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::SetupError;

/// Host settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Window title.
    pub window_title: String,
    /// Canonical path of the game module binary, relative to the working
    /// directory. Defaults to the platform name of `vessel_game`.
    pub module_path: Option<PathBuf>,
    /// Capacity of the process-lifetime arena in bytes.
    pub persistent_arena_bytes: usize,
    /// Capacity of the per-frame arena in bytes.
    pub frame_arena_bytes: usize,
    /// Sleep while the window is minimized, instead of busy-spinning the
    /// frame loop against a zero-area surface.
    pub idle_sleep_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            window_title: "vessel".to_owned(),
            module_path: None,
            persistent_arena_bytes: 1 << 20,
            frame_arena_bytes: 1 << 20,
            idle_sleep_ms: 16,
        }
    }
}

impl HostConfig {
    /// Reads the config at `path`, or returns defaults if no file is there.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] when the file exists but cannot be
    /// read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, SetupError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(SetupError::Config {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let config: Self = toml::from_str(&text).map_err(|e| SetupError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// The canonical module path, explicit or platform default.
    #[must_use]
    pub fn module_path(&self) -> PathBuf {
        self.module_path
            .clone()
            .unwrap_or_else(vessel_loader::platform_module_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::load_or_default(&dir.path().join("vessel.toml")).unwrap();
        assert_eq!(config.window_title, "vessel");
        assert_eq!(config.frame_arena_bytes, 1 << 20);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vessel.toml");
        fs::write(&path, "window_title = \"my game\"\n").unwrap();
        let config = HostConfig::load_or_default(&path).unwrap();
        assert_eq!(config.window_title, "my game");
        assert_eq!(config.idle_sleep_ms, 16);
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vessel.toml");
        fs::write(&path, "window_title = [oops\n").unwrap();
        let err = HostConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, SetupError::Config { .. }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vessel.toml");
        fs::write(&path, "windwo_title = \"typo\"\n").unwrap();
        assert!(HostConfig::load_or_default(&path).is_err());
    }
}
