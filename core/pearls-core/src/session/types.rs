//! Session and stored record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// A raw `(date, reps)` pair as it comes off the record store.
///
/// Both fields stay strings until [`Session::from_record`] parses them, so a
/// malformed line is reported with its position rather than swallowed by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: String,
    pub reps: String,
}

impl SessionRecord {
    pub fn new(date: NaiveDate, reps: u32) -> Self {
        SessionRecord {
            date: date.format("%Y-%m-%d").to_string(),
            reps: reps.to_string(),
        }
    }
}

/// One calendar day of the routine plus its position in the chain.
///
/// `previous` is an index into the owning [`SessionChain`](super::SessionChain);
/// it and `streak` are filled in once, when the session is linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub date: NaiveDate,
    /// Zero means the day was skipped.
    pub reps: u32,
    #[serde(skip)]
    pub previous: Option<usize>,
    pub streak: u32,
}

impl Session {
    /// Creates an unlinked session.
    pub fn new(date: NaiveDate, reps: u32) -> Self {
        Session {
            date,
            reps,
            previous: None,
            streak: 0,
        }
    }

    /// Parses a stored record. `position` (1-based) is only used for error reporting.
    pub fn from_record(record: &SessionRecord, position: usize) -> Result<Self> {
        let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d").map_err(|e| {
            TrackerError::MalformedRecord {
                record: position,
                details: format!("invalid date {:?}: {}", record.date, e),
            }
        })?;
        let reps = record
            .reps
            .trim()
            .parse::<u32>()
            .map_err(|e| TrackerError::MalformedRecord {
                record: position,
                details: format!("invalid reps {:?}: {}", record.reps, e),
            })?;
        Ok(Session::new(date, reps))
    }

    pub fn to_record(&self) -> SessionRecord {
        SessionRecord::new(self.date, self.reps)
    }

    pub fn is_skip(&self) -> bool {
        self.reps == 0
    }
}
