//! Terminal rendering of boards, events and the round HUD.
//!
//! All functions are pure and return strings; commands decide where to write
//! them.
//!
//! ```rust
//! use maketen_engine::engine::MatchEngine;
//! use maketen_engine::game::RoundConfig;
//! use maketen_cli::formatters::{format_board, format_hud};
//!
//! let engine = MatchEngine::new(RoundConfig::default(), Some(1)).unwrap();
//! let board = format_board(&engine.board());
//! assert_eq!(board.lines().count(), 3);
//! assert!(board.contains("[   ?   ]"));
//! assert_eq!(format_hud(&engine), "Matches: 0/6  Streak: 0  Moves: 0");
//! ```

use maketen_engine::cards::CardId;
use maketen_engine::engine::MatchEngine;
use maketen_engine::events::RoundEvent;
use maketen_engine::game::{CardView, Face};

/// Cards per row on the board.
pub const COLUMNS: usize = 4;

const CELL_WIDTH: usize = 7;

fn format_cell(view: &CardView) -> String {
    let label = match view.face {
        Face::Hidden => "?",
        Face::Matched => "--",
        Face::Revealed => view.text.as_deref().unwrap_or("?"),
    };
    format!("[{:^width$}]", label, width = CELL_WIDTH)
}

/// Grid of `COLUMNS` cards per row, each prefixed with its 1-based position.
pub fn format_board(board: &[CardView]) -> String {
    let mut out = String::new();
    for (row_idx, row) in board.chunks(COLUMNS).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, view)| format!("{:>2} {}", row_idx * COLUMNS + i + 1, format_cell(view)))
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

/// Every card face-up, in deck order.
pub fn format_layout(engine: &MatchEngine) -> String {
    let views: Vec<CardView> = engine
        .state()
        .deck()
        .cards()
        .iter()
        .map(|card| CardView {
            id: card.id.clone(),
            face: Face::Revealed,
            kind: Some(card.kind),
            text: Some(card.text.clone()),
        })
        .collect();
    format_board(&views)
}

pub fn format_hud(engine: &MatchEngine) -> String {
    let stats = engine.stats();
    format!(
        "Matches: {}/{}  Streak: {}  Moves: {}",
        stats.matches_found,
        engine.total_pairs(),
        stats.streak,
        stats.moves
    )
}

fn label(engine: &MatchEngine, id: &CardId) -> String {
    engine
        .card(id)
        .map(|c| c.text.clone())
        .unwrap_or_else(|_| id.to_string())
}

/// One line describing an event, or `None` for events the board already shows.
pub fn format_event(event: &RoundEvent, engine: &MatchEngine) -> Option<String> {
    match event {
        RoundEvent::RoundStarted { generation } => {
            Some(format!("New round (#{})", generation + 1))
        }
        RoundEvent::PairSuccess { first, second } => Some(format!(
            "Match! {} and {} make ten.",
            label(engine, first),
            label(engine, second)
        )),
        RoundEvent::PairFailure { first, second } => Some(format!(
            "No match: {} and {}.",
            label(engine, first),
            label(engine, second)
        )),
        RoundEvent::RoundComplete { moves, best_streak } => Some(format!(
            "Round complete! moves={} best streak={}",
            moves, best_streak
        )),
        RoundEvent::CardRevealed { .. }
        | RoundEvent::CardsRetired { .. }
        | RoundEvent::CardsHidden { .. } => None,
    }
}
