//! Point-in-time status snapshot handed to presenters and `pearls status --json`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::rules::{Advice, RepsRules};
use crate::session::{ChainState, Session, SessionChain};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub today: NaiveDate,
    pub state: ChainState,
    pub last_session: Option<Session>,
    /// Days without a record between the last session and today.
    pub missing_days: u32,
    pub sessions: usize,
    pub advice: Advice,
}

impl StatusReport {
    pub fn capture(chain: &SessionChain, rules: &RepsRules, today: NaiveDate) -> Self {
        StatusReport {
            today,
            state: ChainState::classify(chain, today),
            last_session: chain.last().cloned(),
            missing_days: ChainState::missing_days(chain, today),
            sessions: chain.len(),
            advice: rules.advice(chain),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| crate::TrackerError::Json {
            context: "serializing status report".to_string(),
            source,
        })
    }
}
