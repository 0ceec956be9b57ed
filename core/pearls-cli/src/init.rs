//! Bootstrap for an empty history.
//!
//! The daily loop can only continue from an existing last session, so the
//! first one is entered here with an explicit date.

use chrono::NaiveDate;
use pearls_core::Result;

use crate::console::Console;
use crate::Context;

pub fn run(ctx: &Context, reps: u32, date: Option<NaiveDate>) -> Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let session = tracker.init(date.unwrap_or(ctx.today), reps)?;

    let mut console = Console::stdio();
    console.message("History started.")?;
    console.session_line(session)
}
