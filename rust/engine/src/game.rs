use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cards::{default_expressions, Card, CardId, CardKind, ExpressionDef};
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::rules::{MATCH_SETTLE, MISMATCH_SETTLE};

/// Fixed inputs of a round: the card set and the two settle delays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    /// One pair per entry
    pub expressions: Vec<ExpressionDef>,
    /// Delay between a match and the pair retiring
    pub match_settle: Duration,
    /// Delay between a mismatch and the pair flipping back
    pub mismatch_settle: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            expressions: default_expressions(),
            match_settle: MATCH_SETTLE,
            mismatch_settle: MISMATCH_SETTLE,
        }
    }
}

impl RoundConfig {
    pub fn total_pairs(&self) -> u32 {
        self.expressions.len() as u32
    }

    /// Every expression must reach ten, otherwise the round could never complete.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.expressions.is_empty() {
            return Err(EngineError::EmptyCardSet);
        }
        if let Some(def) = self.expressions.iter().find(|d| !d.makes_ten()) {
            return Err(EngineError::ExpressionNotTen {
                text: def.text.clone(),
                value: def.value,
            });
        }
        Ok(())
    }
}

/// Scoring counters of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub matches_found: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Completed two-card evaluations, not individual clicks
    pub moves: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    InProgress,
    Complete,
}

/// Where the current pair selection stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairPhase {
    /// Nothing revealed
    Idle,
    /// One card up, input open
    OneRevealed,
    /// Two cards up, input locked until settle
    Evaluating,
}

/// One evaluated pair, by display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRecord {
    pub first: String,
    pub second: String,
    pub matched: bool,
}

/// Mutable state of the round in play.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub(crate) deck: Deck,
    pub(crate) revealed: Vec<CardId>,
    pub(crate) locked: bool,
    pub(crate) stats: RoundStats,
    pub(crate) phase: RoundPhase,
    pub(crate) history: Vec<PairRecord>,
}

impl RoundState {
    pub(crate) fn new(deck: Deck) -> Self {
        Self {
            deck,
            revealed: Vec::with_capacity(2),
            locked: false,
            stats: RoundStats::default(),
            phase: RoundPhase::InProgress,
            history: Vec::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn history(&self) -> &[PairRecord] {
        &self.history
    }

    pub fn pair_phase(&self) -> PairPhase {
        match (self.revealed.len(), self.locked) {
            (0, _) => PairPhase::Idle,
            (1, false) => PairPhase::OneRevealed,
            _ => PairPhase::Evaluating,
        }
    }

    pub fn is_revealed(&self, id: &CardId) -> bool {
        self.revealed.contains(id)
    }

    pub fn board(&self) -> Vec<CardView> {
        self.deck
            .cards()
            .iter()
            .map(|card| CardView::of(card, self.is_revealed(&card.id)))
            .collect()
    }
}

/// What a renderer may show of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Hidden,
    Revealed,
    Matched,
}

/// Renderer-facing projection of a card. Kind and text are only present face-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face: Face,
    pub kind: Option<CardKind>,
    pub text: Option<String>,
}

impl CardView {
    fn of(card: &Card, revealed: bool) -> Self {
        // a freshly matched card stays revealed until the pair settles
        let face = if revealed {
            Face::Revealed
        } else if card.matched {
            Face::Matched
        } else {
            Face::Hidden
        };
        let visible = face != Face::Hidden;
        Self {
            id: card.id.clone(),
            face,
            kind: visible.then_some(card.kind),
            text: visible.then(|| card.text.clone()),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.face == Face::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_with_six_pairs() {
        let cfg = RoundConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.total_pairs(), 6);
        assert_eq!(cfg.match_settle, Duration::from_millis(420));
        assert_eq!(cfg.mismatch_settle, Duration::from_millis(700));
    }

    #[test]
    fn config_rejects_empty_and_non_ten_sets() {
        let empty = RoundConfig {
            expressions: vec![],
            ..RoundConfig::default()
        };
        assert_eq!(empty.validate(), Err(EngineError::EmptyCardSet));

        let mut eleven = RoundConfig::default();
        eleven
            .expressions
            .push(ExpressionDef::parse("6 + 5").unwrap());
        assert!(matches!(
            eleven.validate(),
            Err(EngineError::ExpressionNotTen { value: 11, .. })
        ));
    }

    #[test]
    fn board_hides_text_of_face_down_cards() {
        let deck = Deck::new_with_seed(&default_expressions(), 3);
        let first = deck.cards()[0].id.clone();
        let mut state = RoundState::new(deck);
        state.revealed.push(first.clone());

        let board = state.board();
        assert_eq!(board.len(), 12);
        assert_eq!(board[0].face, Face::Revealed);
        assert!(board[0].text.is_some());
        assert!(board[1..].iter().all(|v| v.is_hidden() && v.text.is_none()));
        assert_eq!(state.pair_phase(), PairPhase::OneRevealed);
    }
}
