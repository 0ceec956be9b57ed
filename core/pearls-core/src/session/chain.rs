//! Chronological session chain.
//!
//! Sessions live in an arena (`Vec<Session>`) and point back to their
//! predecessor by index. Each session's streak is computed exactly once, when
//! it is linked, from its predecessor's already-final streak:
//!
//! ```text
//! reps:    10  10   0  12  12
//! streak:   1   2   0   1   2
//! ```

use chrono::{Days, NaiveDate};

use super::types::Session;
use crate::error::{Result, TrackerError};

/// Append-only, chronologically ordered history of sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionChain {
    sessions: Vec<Session>,
}

impl SessionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links sessions in the given order, computing each streak as it goes.
    ///
    /// Input must already be strictly ascending by date. `Tracker::open`
    /// validates loaded history before building; here it is a debug assertion.
    pub fn build(sessions: impl IntoIterator<Item = Session>) -> Self {
        let mut chain = SessionChain::new();
        for session in sessions {
            debug_assert!(
                chain.last().map_or(true, |last| last.date < session.date),
                "sessions must be strictly ascending by date"
            );
            chain.link(session);
        }
        tracing::debug!(sessions = chain.len(), "Session chain built");
        chain
    }

    /// Sets `session.streak` from its reps and its predecessor's streak.
    pub fn compute_streak(&self, session: &mut Session) {
        session.streak = if session.reps == 0 {
            0
        } else {
            session
                .previous
                .and_then(|idx| self.sessions.get(idx))
                .map_or(0, |prev| prev.streak)
                + 1
        };
    }

    fn link(&mut self, mut session: Session) -> &Session {
        session.previous = self.sessions.len().checked_sub(1);
        self.compute_streak(&mut session);
        self.sessions.push(session);
        &self.sessions[self.sessions.len() - 1]
    }

    /// Appends the session for the day after the current last session.
    pub fn append(&mut self, reps: u32) -> Result<&Session> {
        let last_date = self.last().ok_or(TrackerError::EmptyHistory)?.date;
        let date = next_day(last_date).ok_or(TrackerError::DateOutOfRange { date: last_date })?;
        let session = self.link(Session::new(date, reps));
        tracing::debug!(date = %session.date, reps, streak = session.streak, "Session appended");
        Ok(session)
    }

    /// Starts an empty chain with its first session.
    pub fn begin(&mut self, date: NaiveDate, reps: u32) -> Result<&Session> {
        if !self.is_empty() {
            return Err(TrackerError::HistoryExists { count: self.len() });
        }
        Ok(self.link(Session::new(date, reps)))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn last(&self) -> Option<&Session> {
        self.sessions.last()
    }

    pub fn get(&self, idx: usize) -> Option<&Session> {
        self.sessions.get(idx)
    }

    pub fn previous(&self, session: &Session) -> Option<&Session> {
        session.previous.and_then(|idx| self.sessions.get(idx))
    }

    /// Sessions in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Session> + ExactSizeIterator {
        self.sessions.iter()
    }

    /// Walks `previous` links backward starting at (and including) the last session.
    pub fn walk_back(&self) -> WalkBack<'_> {
        WalkBack {
            chain: self,
            next: self.sessions.len().checked_sub(1),
        }
    }
}

/// Iterator following `previous` links toward the first session.
pub struct WalkBack<'a> {
    chain: &'a SessionChain,
    next: Option<usize>,
}

impl<'a> Iterator for WalkBack<'a> {
    type Item = &'a Session;

    fn next(&mut self) -> Option<Self::Item> {
        let session = self.chain.sessions.get(self.next?)?;
        self.next = session.previous;
        Some(session)
    }
}

/// The calendar day after `date`, `None` past the last representable date.
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}
