//! Non-interactive status snapshot.

use pearls_core::{Presenter, Result};

use crate::console::Console;
use crate::Context;

pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let report = ctx.open_tracker()?.report();
    let mut console = Console::stdio();

    if json {
        return console.message(&report.to_json()?);
    }
    console.present_status(&report)
}
