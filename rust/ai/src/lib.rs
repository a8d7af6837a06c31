//! # maketen-ai: Automated Card Pickers
//!
//! Pickers play Make Ten rounds without a human, for simulations and tests.
//! They see only what a player sees: the board as [`CardView`]s.
//!
//! ## Core Components
//!
//! - [`Picker`] - Trait every picking strategy implements
//! - [`random`] - Uniform choice among face-down cards
//! - [`memory`] - Remembers every card it has seen face-up
//! - [`create_picker`] - Factory by name
//! - [`play_round`] - Drives a session to completion with a picker
//!
//! ## Quick Start
//!
//! ```rust
//! use maketen_ai::{create_picker, play_round};
//! use maketen_engine::engine::MatchEngine;
//! use maketen_engine::game::RoundConfig;
//! use maketen_engine::session::Session;
//!
//! let mut picker = create_picker("memory", 42).unwrap();
//! let engine = MatchEngine::new(RoundConfig::default(), Some(42)).unwrap();
//! let mut session = Session::new(engine);
//!
//! play_round(&mut session, picker.as_mut(), 500).unwrap();
//! assert!(session.engine().is_complete());
//! ```

use maketen_engine::cards::CardId;
use maketen_engine::errors::EngineError;
use maketen_engine::game::CardView;
use maketen_engine::session::Session;

pub mod memory;
pub mod random;

/// Names accepted by [`create_picker`].
pub const PICKERS: &[&str] = &["memory", "random"];

/// Strategy for choosing the next card to reveal.
pub trait Picker: Send {
    /// Chooses a face-down card, or `None` when nothing is left to pick.
    fn pick(&mut self, board: &[CardView]) -> Option<CardId>;

    /// Called after every reveal and settle so the picker can note face-up cards.
    fn observe(&mut self, _board: &[CardView]) {}

    /// Forgets everything; called when a new round is dealt.
    fn reset(&mut self) {}

    fn name(&self) -> &str;
}

/// Creates a picker by name, seeded for reproducible simulations.
///
/// ```rust
/// use maketen_ai::create_picker;
///
/// assert_eq!(create_picker("random", 1).unwrap().name(), "random");
/// assert!(create_picker("psychic", 1).is_err());
/// ```
pub fn create_picker(name: &str, seed: u64) -> Result<Box<dyn Picker>, String> {
    match name {
        "memory" => Ok(Box::new(memory::MemoryPicker::new(seed))),
        "random" => Ok(Box::new(random::RandomPicker::new(seed))),
        other => Err(format!(
            "Unknown picker: {} (expected one of: {})",
            other,
            PICKERS.join(", ")
        )),
    }
}

/// Plays the current round of `session` until it completes or `max_moves`
/// pairs have been evaluated. Settles are applied as soon as they are scheduled.
pub fn play_round(
    session: &mut Session,
    picker: &mut dyn Picker,
    max_moves: u32,
) -> Result<(), EngineError> {
    while !session.engine().is_complete() && session.engine().stats().moves < max_moves {
        let board = session.engine().board();
        picker.observe(&board);
        let Some(id) = picker.pick(&board) else {
            break;
        };
        let reveal = session.reveal(&id)?;
        if reveal.is_ignored() {
            // a picker that keeps choosing unavailable cards would spin forever
            break;
        }
        picker.observe(&session.engine().board());
        session.settle_pending();
    }
    Ok(())
}

pub(crate) fn hidden(board: &[CardView]) -> impl Iterator<Item = &CardView> {
    board.iter().filter(|v| v.is_hidden())
}
