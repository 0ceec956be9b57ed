//! Tracker configuration loaded from `config.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [rules]
//! safe_streak_days = 6
//! levelup_streak = 3
//! max_reps = 21
//! min_reps = 3
//! penalty_decrement = 2
//! levelup_reps = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TrackerError};

/// Tuning constants for the reps progression rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Streak length after which skipping one day is tolerated.
    pub safe_streak_days: u32,
    /// Number of equal non-zero sessions needed to level up.
    pub levelup_streak: u32,
    /// Level-up only applies while the base reps are below this.
    pub max_reps: u32,
    /// Target used when the history has no non-zero session to start from.
    pub min_reps: u32,
    /// Reps subtracted per skipped day.
    pub penalty_decrement: u32,
    /// Reps added on level-up.
    pub levelup_reps: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            safe_streak_days: 6,
            levelup_streak: 3,
            max_reps: 21,
            min_reps: 3,
            penalty_decrement: 2,
            levelup_reps: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Loads the tracker configuration, returning defaults if the file doesn't exist.
pub fn load_tracker_config(path: &Path) -> Result<TrackerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(TrackerConfig::default());
    }

    let content = fs_err::read_to_string(path)
        .map_err(|e| TrackerError::io(format!("reading {}", path.display()), e))?;
    toml::from_str::<TrackerConfig>(&content).map_err(|e| TrackerError::ConfigMalformed {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_tracker_config_defaults_when_file_missing() {
        let temp_dir = tempdir().expect("temp dir");
        let config = load_tracker_config(&temp_dir.path().join("missing.toml")).expect("load");
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.rules.safe_streak_days, 6);
        assert_eq!(config.rules.max_reps, 21);
    }

    #[test]
    fn load_tracker_config_fills_unset_rules_with_defaults() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("config.toml");
        fs_err::write(
            &path,
            r#"
[rules]
max_reps = 30
levelup_reps = 1
"#,
        )
        .expect("write config");

        let config = load_tracker_config(&path).expect("load");
        assert_eq!(config.rules.max_reps, 30);
        assert_eq!(config.rules.levelup_reps, 1);
        assert_eq!(config.rules.safe_streak_days, 6);
        assert_eq!(config.rules.penalty_decrement, 2);
    }

    #[test]
    fn load_tracker_config_rejects_malformed_toml() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("config.toml");
        fs_err::write(&path, "[rules\nmax_reps = ").expect("write config");

        let err = load_tracker_config(&path).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigMalformed { .. }));
    }
}
