//! Daily tracking loop.
//!
//! ```text
//! load records -> build chain -> classify
//!     while state != TodayExist:
//!         present status + advice
//!         request reps for (last.date + 1)
//!         append session, persist, reclassify
//!     present final status
//! ```
//!
//! A gap of several days is filled one day at a time, oldest first, so every
//! appended session still lands exactly one day after its predecessor.

use chrono::NaiveDate;

use crate::error::{Result, TrackerError};
use crate::report::StatusReport;
use crate::rules::RepsRules;
use crate::session::{next_day, ChainState, Session, SessionChain};
use crate::store::RecordStore;

/// Presentation side of the loop: shows status and asks for the day's reps.
///
/// Returning an error from either method aborts the run; there is no retry.
pub trait Presenter {
    fn present_status(&mut self, status: &StatusReport) -> Result<()>;
    fn request_reps(&mut self, for_date: NaiveDate) -> Result<u32>;
}

pub struct Tracker<S: RecordStore> {
    store: S,
    chain: SessionChain,
    rules: RepsRules,
    today: NaiveDate,
}

impl<S: RecordStore> Tracker<S> {
    /// Loads the full history from `store` and links it into a chain.
    pub fn open(store: S, rules: RepsRules, today: NaiveDate) -> Result<Self> {
        let sessions = store
            .load_all()?
            .iter()
            .enumerate()
            .map(|(idx, record)| Session::from_record(record, idx + 1))
            .collect::<Result<Vec<_>>>()?;
        if let Some((idx, pair)) = sessions
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].date <= pair[0].date)
        {
            return Err(TrackerError::MalformedRecord {
                record: idx + 2,
                details: format!(
                    "date {} not after previous record {}",
                    pair[1].date, pair[0].date
                ),
            });
        }
        let chain = SessionChain::build(sessions);

        if let Some(last) = chain.last() {
            if last.date > today {
                return Err(TrackerError::FutureDatedRecord {
                    date: last.date,
                    today,
                });
            }
        }

        tracing::debug!(sessions = chain.len(), %today, "Tracker opened");
        Ok(Tracker {
            store,
            chain,
            rules,
            today,
        })
    }

    pub fn chain(&self) -> &SessionChain {
        &self.chain
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> ChainState {
        ChainState::classify(&self.chain, self.today)
    }

    pub fn report(&self) -> StatusReport {
        StatusReport::capture(&self.chain, &self.rules, self.today)
    }

    /// Runs the daily loop until today has a record.
    ///
    /// An empty history cannot be extended (there is no last date to continue
    /// from): its status is shown once and [`TrackerError::EmptyHistory`] returned.
    pub fn run(&mut self, presenter: &mut impl Presenter) -> Result<()> {
        loop {
            let status = self.report();
            presenter.present_status(&status)?;
            if status.state.is_terminal() {
                return Ok(());
            }

            let last_date = self.chain.last().ok_or(TrackerError::EmptyHistory)?.date;
            let for_date =
                next_day(last_date).ok_or(TrackerError::DateOutOfRange { date: last_date })?;
            let reps = presenter.request_reps(for_date)?;
            self.record(reps)?;
        }
    }

    /// Appends the next day's session and persists it.
    pub fn record(&mut self, reps: u32) -> Result<&Session> {
        let session = self.chain.append(reps)?;
        self.store.append(&session.to_record())?;
        tracing::info!(
            date = %session.date,
            reps = session.reps,
            streak = session.streak,
            "Session recorded"
        );
        Ok(session)
    }

    /// Records the very first session of an empty history.
    pub fn init(&mut self, date: NaiveDate, reps: u32) -> Result<&Session> {
        if date > self.today {
            return Err(TrackerError::FutureDatedRecord {
                date,
                today: self.today,
            });
        }
        let session = self.chain.begin(date, reps)?;
        self.store.append(&session.to_record())?;
        tracing::info!(date = %session.date, reps, "History started");
        Ok(session)
    }
}
