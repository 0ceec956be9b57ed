//! Integration tests for the daily tracking loop.

use std::collections::VecDeque;

use chrono::{Days, NaiveDate};
use pearls_core::{
    ChainState, CsvRecordStore, InMemoryRecordStore, Presenter, RecordStore, RepsRules,
    SessionRecord, StatusReport, Tracker, TrackerError,
};
use tempfile::tempdir;

/// Answers prompts from a fixed script and remembers what it was shown.
#[derive(Default)]
struct ScriptedPresenter {
    answers: VecDeque<u32>,
    shown: Vec<StatusReport>,
    asked: Vec<NaiveDate>,
}

impl ScriptedPresenter {
    fn answering(answers: &[u32]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn present_status(&mut self, status: &StatusReport) -> pearls_core::Result<()> {
        self.shown.push(status.clone());
        Ok(())
    }

    fn request_reps(&mut self, for_date: NaiveDate) -> pearls_core::Result<u32> {
        self.asked.push(for_date);
        self.answers.pop_front().ok_or(TrackerError::InputAborted)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn history(start: NaiveDate, reps: &[u32]) -> Vec<SessionRecord> {
    reps.iter()
        .enumerate()
        .map(|(i, &r)| SessionRecord::new(start + Days::new(i as u64), r))
        .collect()
}

#[test]
fn test_today_logged_presents_once_without_prompting() {
    let today = date(2025, 6, 10);
    let store = InMemoryRecordStore::new(history(date(2025, 6, 8), &[10, 10, 10]));
    let mut tracker = Tracker::open(store, RepsRules::default(), today).unwrap();
    let mut presenter = ScriptedPresenter::default();

    tracker.run(&mut presenter).unwrap();

    assert!(presenter.asked.is_empty());
    assert_eq!(presenter.shown.len(), 1);
    assert_eq!(presenter.shown[0].state, ChainState::TodayExist);
    assert_eq!(presenter.shown[0].advice.required_reps, 12);
}

#[test]
fn test_yesterday_logged_asks_for_today() {
    let today = date(2025, 6, 10);
    let store = InMemoryRecordStore::new(history(date(2025, 6, 8), &[10, 10]));
    let mut tracker = Tracker::open(store, RepsRules::default(), today).unwrap();
    let mut presenter = ScriptedPresenter::answering(&[11]);

    tracker.run(&mut presenter).unwrap();

    assert_eq!(presenter.asked, vec![today]);
    let states: Vec<ChainState> = presenter.shown.iter().map(|s| s.state).collect();
    assert_eq!(states, vec![ChainState::YesterdayExist, ChainState::TodayExist]);
    assert_eq!(tracker.chain().len(), 3);
    assert_eq!(tracker.chain().last().unwrap().streak, 3);
    assert_eq!(
        tracker.store().records().last(),
        Some(&SessionRecord::new(today, 11))
    );
}

#[test]
fn test_missing_days_are_filled_oldest_first() {
    let today = date(2025, 6, 10);
    let store = InMemoryRecordStore::new(history(date(2025, 6, 1), &[10; 6]));
    let mut tracker = Tracker::open(store, RepsRules::default(), today).unwrap();
    assert_eq!(tracker.state(), ChainState::MissingDays);
    let mut presenter = ScriptedPresenter::answering(&[0, 0, 12, 12]);

    tracker.run(&mut presenter).unwrap();

    assert_eq!(
        presenter.asked,
        vec![
            date(2025, 6, 7),
            date(2025, 6, 8),
            date(2025, 6, 9),
            date(2025, 6, 10)
        ]
    );
    // Six days of 10: miss allowed, level-up to 12.
    assert!(presenter.shown[0].advice.miss_allowed);
    assert_eq!(presenter.shown[0].advice.required_reps, 12);
    // One skip after a six-day streak is forgiven.
    assert_eq!(presenter.shown[1].advice.required_reps, 12);
    // Second skip: 12 - (2 * 2 - 2).
    assert_eq!(presenter.shown[2].advice.required_reps, 10);
    assert_eq!(presenter.shown.last().unwrap().state, ChainState::TodayExist);
    assert_eq!(tracker.chain().last().unwrap().streak, 2);
    assert_eq!(tracker.store().records().len(), 10);
}

#[test]
fn test_empty_history_shows_status_then_fails() {
    let mut tracker =
        Tracker::open(InMemoryRecordStore::default(), RepsRules::default(), date(2025, 6, 10))
            .unwrap();
    let mut presenter = ScriptedPresenter::answering(&[5]);

    let err = tracker.run(&mut presenter).unwrap_err();

    assert!(matches!(err, TrackerError::EmptyHistory));
    assert_eq!(presenter.shown.len(), 1);
    assert_eq!(presenter.shown[0].state, ChainState::NoSessions);
    assert!(presenter.asked.is_empty());
}

#[test]
fn test_presenter_abort_stops_the_loop() {
    let today = date(2025, 6, 10);
    let store = InMemoryRecordStore::new(history(date(2025, 6, 1), &[8, 8]));
    let mut tracker = Tracker::open(store, RepsRules::default(), today).unwrap();
    let mut presenter = ScriptedPresenter::answering(&[8]);

    let err = tracker.run(&mut presenter).unwrap_err();

    assert!(matches!(err, TrackerError::InputAborted));
    assert_eq!(tracker.store().records().len(), 3);
}

#[test]
fn test_future_dated_history_is_rejected() {
    let store = InMemoryRecordStore::new(history(date(2025, 6, 11), &[8]));
    let result = Tracker::open(store, RepsRules::default(), date(2025, 6, 10));
    assert!(matches!(
        result,
        Err(TrackerError::FutureDatedRecord { .. })
    ));
}

#[test]
fn test_malformed_record_fails_open() {
    let store = InMemoryRecordStore::new(vec![
        SessionRecord::new(date(2025, 6, 1), 8),
        SessionRecord {
            date: "yesterday".to_string(),
            reps: "8".to_string(),
        },
    ]);
    let result = Tracker::open(store, RepsRules::default(), date(2025, 6, 10));
    assert!(matches!(
        result,
        Err(TrackerError::MalformedRecord { record: 2, .. })
    ));
}

#[test]
fn test_out_of_order_or_repeated_dates_fail_open() {
    let today = date(2025, 6, 10);
    for records in [
        vec![
            SessionRecord::new(date(2025, 1, 2), 8),
            SessionRecord::new(date(2025, 1, 1), 8),
        ],
        vec![
            SessionRecord::new(date(2025, 1, 1), 8),
            SessionRecord::new(date(2025, 1, 1), 9),
        ],
    ] {
        let result = Tracker::open(InMemoryRecordStore::new(records), RepsRules::default(), today);
        assert!(matches!(
            result,
            Err(TrackerError::MalformedRecord { record: 2, .. })
        ));
    }
}

#[test]
fn test_init_starts_history_once() {
    let today = date(2025, 6, 10);
    let mut tracker =
        Tracker::open(InMemoryRecordStore::default(), RepsRules::default(), today).unwrap();

    let first = tracker.init(today, 3).unwrap();
    assert_eq!(first.streak, 1);
    assert_eq!(tracker.state(), ChainState::TodayExist);
    assert!(matches!(
        tracker.init(today, 3),
        Err(TrackerError::HistoryExists { count: 1 })
    ));
}

#[test]
fn test_csv_history_survives_reopen() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sessions.csv");
    let today = date(2025, 6, 10);

    let mut tracker =
        Tracker::open(CsvRecordStore::new(&path), RepsRules::default(), today).unwrap();
    tracker.init(date(2025, 6, 8), 9).unwrap();
    tracker
        .run(&mut ScriptedPresenter::answering(&[9, 0]))
        .unwrap();

    let reopened = Tracker::open(CsvRecordStore::new(&path), RepsRules::default(), today).unwrap();
    let sessions: Vec<(NaiveDate, u32, u32)> = reopened
        .chain()
        .iter()
        .map(|s| (s.date, s.reps, s.streak))
        .collect();
    assert_eq!(
        sessions,
        vec![
            (date(2025, 6, 8), 9, 1),
            (date(2025, 6, 9), 9, 2),
            (date(2025, 6, 10), 0, 0),
        ]
    );
    assert_eq!(reopened.state(), ChainState::TodayExist);
    assert_eq!(
        CsvRecordStore::new(&path).load_all().unwrap(),
        vec![
            SessionRecord::new(date(2025, 6, 8), 9),
            SessionRecord::new(date(2025, 6, 9), 9),
            SessionRecord::new(date(2025, 6, 10), 0),
        ]
    );
}
