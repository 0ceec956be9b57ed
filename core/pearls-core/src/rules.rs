//! Reps progression rules.
//!
//! Given a session chain, decides two things about the next day:
//!
//! - **Miss allowed**: once the streak reaches `safe_streak_days`, one skipped
//!   day is tolerated. Advisory only; a skip still resets the streak to 0.
//! - **Required reps**: starts from the most recent non-zero session, adds
//!   `levelup_reps` after `levelup_streak` equal sessions (one skip in between
//!   is tolerated), then subtracts `penalty_decrement` per trailing skip day,
//!   forgiving one skip when the streak before the skips was long enough.
//!
//! ```text
//! reps:  10 10 10 10 10 10  0      first non-zero = 10 (streak 6)
//!                                  level-up: 10 + 2 = 12
//!                                  penalty:  1 skip * 2 - 2 (forgiven) = 0
//!                                  required: 12
//! ```
//!
//! Level-up is gated on `base < max_reps` and the result is not clamped, so the
//! target may end up at most `levelup_reps` above `max_reps`.

use serde::Serialize;

use crate::config::RulesConfig;
use crate::session::{Session, SessionChain};

/// Both answers for the next day, bundled for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub miss_allowed: bool,
    pub required_reps: i64,
}

#[derive(Debug, Clone, Default)]
pub struct RepsRules {
    config: RulesConfig,
}

impl RepsRules {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn advice(&self, chain: &SessionChain) -> Advice {
        Advice {
            miss_allowed: self.is_next_day_miss_allowed(chain),
            required_reps: self.next_day_required_reps(chain),
        }
    }

    pub fn is_next_day_miss_allowed(&self, chain: &SessionChain) -> bool {
        chain
            .last()
            .is_some_and(|last| last.streak >= self.config.safe_streak_days)
    }

    /// Falls back to `min_reps` when the chain has no non-zero session at all.
    pub fn next_day_required_reps(&self, chain: &SessionChain) -> i64 {
        let Some(first_nonzero) = find_first_nonzero(chain) else {
            tracing::debug!(
                min_reps = self.config.min_reps,
                "No non-zero session in history, using minimum"
            );
            return i64::from(self.config.min_reps);
        };

        let base = first_nonzero.reps;
        let mut next = i64::from(base);
        if self.is_levelup_streak_completed(chain, first_nonzero) && base < self.config.max_reps {
            next += i64::from(self.config.levelup_reps);
        }

        next - self.skip_penalty(chain)
    }

    /// True if `levelup_streak` non-zero sessions ending at `start` all have the
    /// same reps, with at most one skip day between them. Running off the start
    /// of the chain counts as not completed.
    fn is_levelup_streak_completed(&self, chain: &SessionChain, start: &Session) -> bool {
        let target = start.reps;
        let mut matched = 1;
        let mut zeros = 0;
        let mut current = start;

        while matched < self.config.levelup_streak {
            let Some(mut candidate) = chain.previous(current) else {
                return false;
            };
            while candidate.reps == 0 {
                let Some(prev) = chain.previous(candidate) else {
                    return false;
                };
                candidate = prev;
                zeros += 1;
                if zeros > 1 {
                    return false;
                }
            }
            if candidate.reps != target {
                return false;
            }
            current = candidate;
            matched += 1;
        }
        true
    }

    /// Penalty for the trailing run of skip days, 0 if the last day was not a skip.
    fn skip_penalty(&self, chain: &SessionChain) -> i64 {
        if !chain.last().is_some_and(Session::is_skip) {
            return 0;
        }

        let decrement = i64::from(self.config.penalty_decrement);
        let mut penalty = 0;
        for session in chain.walk_back() {
            if session.is_skip() {
                penalty += decrement;
                continue;
            }
            if session.streak >= self.config.safe_streak_days {
                penalty -= decrement;
            }
            break;
        }
        penalty
    }
}

fn find_first_nonzero(chain: &SessionChain) -> Option<&Session> {
    chain.walk_back().find(|session| !session.is_skip())
}
