//! Virtual timeline for settle delays.
//!
//! The engine hands out [`Settle`] tokens instead of arming timers. A
//! [`Session`] keeps those tokens on a clock it advances explicitly, which lets
//! a terminal front end sleep for real and tests jump straight to the due time.

use std::time::Duration;

use tracing::trace;

use crate::cards::CardId;
use crate::engine::{MatchEngine, Reveal, Settle};
use crate::errors::EngineError;
use crate::events::RoundEvent;

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    settle: Settle,
}

/// A match engine plus the settles it is waiting on.
#[derive(Debug)]
pub struct Session {
    engine: MatchEngine,
    pending: Vec<Scheduled>,
    now: Duration,
}

impl Session {
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            engine,
            pending: Vec::new(),
            now: Duration::ZERO,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Reveals a card and schedules the settle of a completed pair.
    pub fn reveal(&mut self, id: &CardId) -> Result<Reveal, EngineError> {
        let reveal = self.engine.reveal_card(id)?;
        if let Reveal::Pair { settle, .. } = &reveal {
            let due = self.now.saturating_add(settle.delay());
            trace!(due_ms = due.as_millis() as u64, "settle scheduled");
            self.pending.push(Scheduled {
                due,
                settle: settle.clone(),
            });
        }
        Ok(reveal)
    }

    /// Moves the clock forward and applies every settle that came due, oldest first.
    pub fn advance(&mut self, dt: Duration) -> Vec<RoundEvent> {
        self.now = self.now.saturating_add(dt);
        let now = self.now;

        let mut due: Vec<Scheduled> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|s| s.due);

        due.iter()
            .flat_map(|s| self.engine.settle(&s.settle))
            .collect()
    }

    /// Time left until the next scheduled settle.
    pub fn time_to_next_settle(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }

    /// Advances just far enough to apply everything scheduled.
    pub fn settle_pending(&mut self) -> Vec<RoundEvent> {
        let last = self
            .pending
            .iter()
            .map(|s| s.due.saturating_sub(self.now))
            .max();
        match last {
            Some(dt) => self.advance(dt),
            None => Vec::new(),
        }
    }

    /// Starts a new round. Settles already queued stay queued and are rejected
    /// by their generation when they come due.
    pub fn restart(&mut self) -> Vec<RoundEvent> {
        self.engine.restart()
    }
}
