//! Classification of the chain against today's date.
//!
//! ```text
//! chain empty              -> NoSessions
//! last.date == today       -> TodayExist      (terminal for the daily loop)
//! today - last.date == 1   -> YesterdayExist
//! today - last.date  > 1   -> MissingDays
//! today - last.date  < 0   -> TodayExist      (future-dated; rejected earlier by Tracker::open)
//! ```

use chrono::NaiveDate;
use serde::Serialize;

use super::chain::SessionChain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainState {
    NoSessions,
    TodayExist,
    YesterdayExist,
    MissingDays,
}

impl ChainState {
    pub fn classify(chain: &SessionChain, today: NaiveDate) -> Self {
        let Some(last) = chain.last() else {
            return ChainState::NoSessions;
        };
        match (today - last.date).num_days() {
            1 => ChainState::YesterdayExist,
            gap if gap > 1 => ChainState::MissingDays,
            _ => ChainState::TodayExist,
        }
    }

    /// Days between the last session and today that have no record yet.
    pub fn missing_days(chain: &SessionChain, today: NaiveDate) -> u32 {
        chain
            .last()
            .map(|last| (today - last.date).num_days() - 1)
            .filter(|&days| days > 0)
            .map_or(0, |days| u32::try_from(days).unwrap_or(u32::MAX))
    }

    /// The daily loop stops once today has a record.
    pub fn is_terminal(self) -> bool {
        self == ChainState::TodayExist
    }
}
