//! Terminal presenter.
//!
//! Renders status reports as plain text blocks framed by horizontal rules and
//! reads the day's repetition count from a line of input. Generic over the
//! reader and writer so the formatting can be tested without a terminal.

use chrono::NaiveDate;
use pearls_core::{ChainState, Presenter, Result, Session, StatusReport, TrackerError};
use std::io::{self, BufRead, Write};

const LINE_LEN: usize = 100;

/// Formats a date as `16.10.2026, Friday`.
pub fn humanize_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y, %A").to_string()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| TrackerError::Io {
                context: "writing to terminal".to_string(),
                source: e,
            })
    }

    fn hline(&mut self) -> Result<()> {
        self.write_str(&format!("{}\n", "-".repeat(LINE_LEN)))
    }

    fn double_hline(&mut self) -> Result<()> {
        self.write_str(&format!("{}\n", "=".repeat(LINE_LEN)))
    }

    pub fn welcome(&mut self, today: NaiveDate) -> Result<()> {
        self.double_hline()?;
        self.write_str("Personal tracker \"Five Tibetan Pearls\"\n")?;
        self.double_hline()?;
        self.write_str(&format!("Today is {}\n\n", humanize_date(today)))
    }

    pub fn session_line(&mut self, session: &Session) -> Result<()> {
        self.write_str(&format!(
            "Session: {}, reps: {}. Streak: {}\n",
            humanize_date(session.date),
            session.reps,
            session.streak
        ))
    }

    pub fn message(&mut self, text: &str) -> Result<()> {
        self.write_str(&format!("{}\n", text))
    }
}

/// Text block for one status report.
fn status_text(status: &StatusReport) -> String {
    let Some(last) = status.last_session.as_ref() else {
        return "There are no recorded sessions yet.\n\
                Start the history with `pearls init --reps <N>`."
            .to_string();
    };

    let summary = format!("Reps: {}. Streak: {}.", last.reps, last.streak);
    let advice = &status.advice;
    let miss = yes_no(advice.miss_allowed);
    match status.state {
        ChainState::TodayExist => format!(
            "Today's session is recorded.\n{summary}\n\
             Skip allowed tomorrow: {miss}\n\
             Recommended reps tomorrow: {}",
            advice.required_reps
        ),
        ChainState::YesterdayExist => format!(
            "Last session was yesterday, {}.\n{summary}\n\
             Skip allowed today: {miss}\n\
             Recommended reps: {}",
            humanize_date(last.date),
            advice.required_reps
        ),
        ChainState::MissingDays => format!(
            "No records for {} day(s). Last session was {}.\n{summary}\n\
             Skip allowed on the next day: {miss}\n\
             Recommended reps: {}",
            status.missing_days,
            humanize_date(last.date),
            advice.required_reps
        ),
        // A non-empty chain never classifies as NoSessions.
        ChainState::NoSessions => summary,
    }
}

fn parse_reps(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed.parse::<u32>().map_err(|_| TrackerError::InvalidReps {
        input: trimmed.to_string(),
    })
}

impl<R: BufRead, W: Write> Presenter for Console<R, W> {
    fn present_status(&mut self, status: &StatusReport) -> Result<()> {
        let text = status_text(status);
        self.hline()?;
        self.write_str(&format!("{}\n", text))?;
        self.hline()
    }

    fn request_reps(&mut self, for_date: NaiveDate) -> Result<u32> {
        self.write_str(&format!(
            "Enter the number of reps for {}: ",
            humanize_date(for_date)
        ))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| TrackerError::Io {
                context: "reading repetition count".to_string(),
                source: e,
            })?;
        if read == 0 {
            return Err(TrackerError::InputAborted);
        }
        parse_reps(&line)
    }
}
