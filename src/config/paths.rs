//! Path management for bill-splitter
//!
//! Only configuration lives on disk; ledgers are in-memory.
//!
//! ## Path Resolution Order
//!
//! 1. `BILLSPLIT_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/bill-splitter` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SplitterError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "BILLSPLIT_CONFIG_DIR";

/// Manages the paths used by bill-splitter
#[derive(Debug, Clone)]
pub struct SplitterPaths {
    base_dir: PathBuf,
}

impl SplitterPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, SplitterError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SplitterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the config directory if it is missing
    pub fn ensure_directories(&self) -> Result<(), SplitterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitterError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SplitterError> {
    ProjectDirs::from("", "", "bill-splitter")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SplitterError::Config("Could not determine a home directory".into()))
}
