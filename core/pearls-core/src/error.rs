//! Error types for pearls-core operations.
//!
//! Every failure in this tool is fatal for the current run: the binary logs the
//! error, prints it and exits. Variants exist so callers and tests can tell the
//! causes apart, not so they can be recovered from.

use chrono::NaiveDate;
use std::path::PathBuf;

/// All errors that can occur in pearls-core operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    // ─────────────────────────────────────────────────────────────────────
    // History Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Malformed record #{record}: {details}")]
    MalformedRecord { record: usize, details: String },

    #[error("No sessions recorded yet")]
    EmptyHistory,

    #[error("Last recorded session {date} is after today ({today})")]
    FutureDatedRecord { date: NaiveDate, today: NaiveDate },

    #[error("No calendar day follows {date}")]
    DateOutOfRange { date: NaiveDate },

    #[error("History already contains {count} session(s)")]
    HistoryExists { count: usize },

    // ─────────────────────────────────────────────────────────────────────
    // Input Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Repetition count must be a non-negative number, got {input:?}")]
    InvalidReps { input: String },

    #[error("Input aborted by user")]
    InputAborted,

    // ─────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────────────
    // I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TrackerError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        TrackerError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using TrackerError.
pub type Result<T> = std::result::Result<T, TrackerError>;
