//! Storage configuration and path management for Pearls.
//!
//! All file locations used by the tracker are derived from one root directory
//! so tests can point everything at a temp dir with [`StorageConfig::with_root`].

use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};

/// Central configuration for all Pearls storage paths.
///
/// Production code uses [`StorageConfig::from_home`] which points to `~/.pearls/`.
/// Tests use `StorageConfig::with_root(temp_dir)` for isolation.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all Pearls data (default: ~/.pearls)
    root: PathBuf,
}

impl StorageConfig {
    /// Resolves the default root under the user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(TrackerError::HomeDirNotFound)?;
        Ok(Self {
            root: home.join(".pearls"),
        })
    }

    /// Creates a StorageConfig with a custom root directory.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────────────────────────

    /// Path to sessions.csv (one `date,reps` line per day).
    pub fn records_file(&self) -> PathBuf {
        self.root.join("sessions.csv")
    }

    /// Path to config.toml (rule tuning).
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Directories
    // ─────────────────────────────────────────────────────────────────────────────

    /// Path to logs/ directory (daily rolling log files).
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_derives_all_paths() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/pearls-test"));
        assert_eq!(config.root(), Path::new("/tmp/pearls-test"));
        assert_eq!(
            config.records_file(),
            PathBuf::from("/tmp/pearls-test/sessions.csv")
        );
        assert_eq!(
            config.config_file(),
            PathBuf::from("/tmp/pearls-test/config.toml")
        );
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/pearls-test/logs"));
    }
}
