//! Session history listing.

use pearls_core::Result;

use crate::console::Console;
use crate::Context;

pub fn run(ctx: &Context, limit: Option<usize>) -> Result<()> {
    let tracker = ctx.open_tracker()?;
    let chain = tracker.chain();
    let mut console = Console::stdio();

    if chain.is_empty() {
        return console.message("No sessions recorded yet.");
    }

    let skip = limit.map_or(0, |n| chain.len().saturating_sub(n));
    for session in chain.iter().skip(skip) {
        console.session_line(session)?;
    }
    Ok(())
}
