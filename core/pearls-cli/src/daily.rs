//! Interactive daily loop.

use pearls_core::Result;

use crate::console::Console;
use crate::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let mut console = Console::stdio();
    console.welcome(ctx.today)?;

    let mut tracker = ctx.open_tracker()?;
    tracing::debug!(state = ?tracker.state(), "Starting daily loop");
    tracker.run(&mut console)
}
