//! # maketen-engine: Make Ten Match Engine
//!
//! Core of a matching-card game for children. A round deals twelve cards: six
//! arithmetic expressions that make ten and six "10" cards. Players reveal two
//! cards at a time; an expression paired with a ten is a match.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, CardKind, CardId and the expression card set
//! - [`deck`] - Seeded deck construction and shuffling with ChaCha20
//! - [`rules`] - Pair evaluation and settle delays
//! - [`game`] - Round configuration, round state, stats and board views
//! - [`engine`] - The reveal/evaluate/settle state machine
//! - [`session`] - Virtual clock that applies settles when they come due
//! - [`events`] - Events emitted for renderers
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use maketen_engine::engine::MatchEngine;
//! use maketen_engine::game::RoundConfig;
//! use maketen_engine::session::Session;
//!
//! let engine = MatchEngine::new(RoundConfig::default(), Some(42)).unwrap();
//! let mut session = Session::new(engine);
//!
//! let board = session.engine().board();
//! session.reveal(&board[0].id).unwrap();
//! session.reveal(&board[1].id).unwrap();
//!
//! // nothing resolves until the settle delay has elapsed
//! let events = session.settle_pending();
//! assert!(!events.is_empty());
//! assert_eq!(session.engine().stats().moves, 1);
//! ```
//!
//! ## Deterministic Deals
//!
//! ```rust
//! use maketen_engine::cards::default_expressions;
//! use maketen_engine::deck::Deck;
//!
//! let a = Deck::new_with_seed(&default_expressions(), 9);
//! let b = Deck::new_with_seed(&default_expressions(), 9);
//! assert_eq!(a.cards(), b.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod logger;
pub mod rules;
pub mod session;
