use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Observable transitions of a round, in the order the engine produces them.
/// Renderers react to these; the engine never draws anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    RoundStarted {
        generation: u64,
    },
    CardRevealed {
        id: CardId,
    },
    /// Emitted as soon as a pair matches, before the settle delay
    PairSuccess {
        first: CardId,
        second: CardId,
    },
    /// Emitted as soon as a pair misses, before the settle delay
    PairFailure {
        first: CardId,
        second: CardId,
    },
    CardsRetired {
        first: CardId,
        second: CardId,
    },
    CardsHidden {
        first: CardId,
        second: CardId,
    },
    RoundComplete {
        moves: u32,
        best_streak: u32,
    },
}
