use std::time::Duration;

use tracing::{debug, info};

use crate::cards::{Card, CardId};
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::events::RoundEvent;
use crate::game::{CardView, PairPhase, PairRecord, RoundConfig, RoundPhase, RoundState, RoundStats};
use crate::logger::RoundRecord;
use crate::rules::{self, PairOutcome};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Why a reveal was turned away. None of these are errors: the click simply
/// has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// A pair is still settling
    Locked,
    /// The card was already retired by a match
    Matched,
    /// The card is already face-up in the current selection
    AlreadyRevealed,
}

/// Deferred resolution of an evaluated pair.
///
/// The token remembers the generation it was issued in, so applying it after
/// a restart is detected and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settle {
    generation: u64,
    outcome: PairOutcome,
    first: CardId,
    second: CardId,
    delay: Duration,
}

impl Settle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn outcome(&self) -> PairOutcome {
        self.outcome
    }
    pub fn cards(&self) -> (&CardId, &CardId) {
        (&self.first, &self.second)
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Result of [`MatchEngine::reveal_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// No state change
    Ignored(Ignored),
    /// First card of a pair is up
    First(RoundEvent),
    /// Second card is up and the pair was evaluated; apply `settle` after its delay
    Pair {
        events: Vec<RoundEvent>,
        settle: Settle,
    },
}

impl Reveal {
    pub fn events(&self) -> &[RoundEvent] {
        match self {
            Reveal::Ignored(_) => &[],
            Reveal::First(event) => std::slice::from_ref(event),
            Reveal::Pair { events, .. } => events,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Reveal::Ignored(_))
    }
}

/// Owns one round of the game: the deck, the revealed selection and the scoring
/// counters. Single-threaded; the caller decides when settle delays elapse.
///
/// # Examples
///
/// ```
/// use maketen_engine::engine::{MatchEngine, Reveal};
/// use maketen_engine::game::RoundConfig;
///
/// let mut engine = MatchEngine::new(RoundConfig::default(), Some(7)).unwrap();
/// let ids: Vec<_> = engine.board().into_iter().map(|v| v.id).collect();
///
/// engine.reveal_card(&ids[0]).unwrap();
/// let reveal = engine.reveal_card(&ids[1]).unwrap();
/// assert_eq!(engine.stats().moves, 1);
///
/// // input stays locked until the pair settles
/// assert!(engine.reveal_card(&ids[2]).unwrap().is_ignored());
/// if let Reveal::Pair { settle, .. } = reveal {
///     engine.settle(&settle);
/// }
/// assert!(!engine.state().is_locked());
/// ```
#[derive(Debug)]
pub struct MatchEngine {
    config: RoundConfig,
    /// Base seed; each round shuffles with `seed + generation`
    seed: u64,
    /// Bumped by every restart
    generation: u64,
    state: RoundState,
}

impl MatchEngine {
    pub fn new(config: RoundConfig, seed: Option<u64>) -> Result<Self, EngineError> {
        config.validate()?;
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let deck = Deck::new_with_seed(&config.expressions, seed);
        info!(seed, pairs = config.total_pairs(), "round started");
        Ok(Self {
            config,
            seed,
            generation: 0,
            state: RoundState::new(deck),
        })
    }

    /// Abandons the current round, including any pair still settling, and deals a new one.
    pub fn restart(&mut self) -> Vec<RoundEvent> {
        self.generation += 1;
        let round_seed = self.round_seed();
        self.state = RoundState::new(Deck::new_with_seed(&self.config.expressions, round_seed));
        info!(
            generation = self.generation,
            seed = round_seed,
            "round restarted"
        );
        vec![RoundEvent::RoundStarted {
            generation: self.generation,
        }]
    }

    pub fn reveal_card(&mut self, id: &CardId) -> Result<Reveal, EngineError> {
        if self.state.locked {
            debug!(card = %id, "reveal ignored: input locked");
            return Ok(Reveal::Ignored(Ignored::Locked));
        }
        if self.card(id)?.matched {
            debug!(card = %id, "reveal ignored: card already matched");
            return Ok(Reveal::Ignored(Ignored::Matched));
        }
        if self.state.is_revealed(id) {
            debug!(card = %id, "reveal ignored: card already revealed");
            return Ok(Reveal::Ignored(Ignored::AlreadyRevealed));
        }

        self.state.revealed.push(id.clone());
        debug!(card = %id, revealed = self.state.revealed.len(), "card revealed");
        let revealed = RoundEvent::CardRevealed { id: id.clone() };
        if self.state.revealed.len() < 2 {
            return Ok(Reveal::First(revealed));
        }

        self.state.stats.moves += 1;
        let first = self.state.revealed[0].clone();
        let second = self.state.revealed[1].clone();
        let (event, settle) = self.evaluate_pair(first, second)?;
        Ok(Reveal::Pair {
            events: vec![revealed, event],
            settle,
        })
    }

    /// Locks input and scores the pair. Counters change immediately; retiring or
    /// hiding the cards waits for the returned settle token.
    fn evaluate_pair(
        &mut self,
        first: CardId,
        second: CardId,
    ) -> Result<(RoundEvent, Settle), EngineError> {
        self.state.locked = true;

        let a = self.card(&first)?;
        let b = self.card(&second)?;
        let outcome = rules::outcome(a, b);
        let record = PairRecord {
            first: a.text.clone(),
            second: b.text.clone(),
            matched: outcome == PairOutcome::Match,
        };

        let stats = &mut self.state.stats;
        let (event, delay) = match outcome {
            PairOutcome::Match => {
                stats.matches_found += 1;
                stats.streak += 1;
                stats.best_streak = stats.best_streak.max(stats.streak);
                for id in [&first, &second] {
                    if let Some(card) = self.state.deck.get_mut(id) {
                        card.matched = true;
                    }
                }
                (
                    RoundEvent::PairSuccess {
                        first: first.clone(),
                        second: second.clone(),
                    },
                    self.config.match_settle,
                )
            }
            PairOutcome::Mismatch => {
                stats.streak = 0;
                (
                    RoundEvent::PairFailure {
                        first: first.clone(),
                        second: second.clone(),
                    },
                    self.config.mismatch_settle,
                )
            }
        };

        debug!(
            first = %record.first,
            second = %record.second,
            outcome = ?outcome,
            moves = self.state.stats.moves,
            streak = self.state.stats.streak,
            "pair evaluated"
        );
        self.state.history.push(record);

        Ok((
            event,
            Settle {
                generation: self.generation,
                outcome,
                first,
                second,
                delay,
            },
        ))
    }

    /// Applies a deferred resolution. Tokens from an earlier generation, or
    /// ones already applied, are dropped without touching the round.
    pub fn settle(&mut self, settle: &Settle) -> Vec<RoundEvent> {
        if settle.generation != self.generation {
            debug!(
                token_generation = settle.generation,
                generation = self.generation,
                "stale settle dropped"
            );
            return Vec::new();
        }
        let revealed = &self.state.revealed;
        if !self.state.locked
            || revealed.len() != 2
            || revealed[0] != settle.first
            || revealed[1] != settle.second
        {
            debug!(first = %settle.first, second = %settle.second, "settle already applied");
            return Vec::new();
        }

        self.state.revealed.clear();
        self.state.locked = false;

        let first = settle.first.clone();
        let second = settle.second.clone();
        match settle.outcome {
            PairOutcome::Match => {
                let mut events = vec![RoundEvent::CardsRetired { first, second }];
                let stats = self.state.stats;
                if stats.matches_found >= self.config.total_pairs() {
                    self.state.phase = RoundPhase::Complete;
                    info!(
                        moves = stats.moves,
                        best_streak = stats.best_streak,
                        "round complete"
                    );
                    events.push(RoundEvent::RoundComplete {
                        moves: stats.moves,
                        best_streak: stats.best_streak,
                    });
                }
                events
            }
            PairOutcome::Mismatch => vec![RoundEvent::CardsHidden { first, second }],
        }
    }

    /// Checked lookup; a miss means the caller holds an id from another round.
    pub fn card(&self, id: &CardId) -> Result<&Card, EngineError> {
        self.state
            .deck
            .get(id)
            .ok_or_else(|| EngineError::CardNotFound {
                id: id.to_string(),
            })
    }

    pub fn board(&self) -> Vec<CardView> {
        self.state.board()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn stats(&self) -> RoundStats {
        self.state.stats
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn pair_phase(&self) -> PairPhase {
        self.state.pair_phase()
    }

    pub fn is_complete(&self) -> bool {
        self.state.phase == RoundPhase::Complete
    }

    pub fn total_pairs(&self) -> u32 {
        self.config.total_pairs()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn round_seed(&self) -> u64 {
        self.seed.wrapping_add(self.generation)
    }

    pub fn record(&self, round_id: String) -> RoundRecord {
        RoundRecord {
            round_id,
            seed: self.round_seed(),
            picker: None,
            pairs: self.state.history.clone(),
            stats: self.state.stats,
            completed: self.is_complete(),
            ts: None,
            meta: None,
        }
    }
}
