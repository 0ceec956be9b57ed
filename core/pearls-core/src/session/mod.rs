//! Session history: records, the linked chain, and state classification.
//!
//! # Module Structure
//!
//! - [`types`]: `SessionRecord` (raw stored pair) and `Session` (parsed day)
//! - [`chain`]: `SessionChain`, the arena of linked sessions with streaks
//! - [`state`]: `ChainState`, where the chain stands relative to today

mod chain;
mod state;
mod types;

pub use chain::{next_day, SessionChain, WalkBack};
pub use state::ChainState;
pub use types::{Session, SessionRecord};
