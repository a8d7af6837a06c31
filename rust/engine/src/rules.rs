use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cards::{Card, CardKind};

/// Value every expression has to reach.
pub const TARGET_VALUE: i64 = 10;

/// Pause after a match before the pair retires and input unlocks.
pub const MATCH_SETTLE: Duration = Duration::from_millis(420);

/// Pause after a mismatch before the pair flips back and input unlocks.
pub const MISMATCH_SETTLE: Duration = Duration::from_millis(700);

/// Result of evaluating two revealed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairOutcome {
    Match,
    Mismatch,
}

/// Decides whether two cards form a pair.
///
/// A pair is exactly one expression card worth [`TARGET_VALUE`] and one ten
/// card. Expression/expression and ten/ten never pair, whatever their values.
///
/// # Examples
///
/// ```
/// use maketen_engine::cards::{Card, CardId, CardKind};
/// use maketen_engine::rules::is_match;
///
/// let expr = Card {
///     id: CardId::new("expr-3"),
///     kind: CardKind::Expression,
///     text: "4 + 6".into(),
///     value: 10,
///     matched: false,
/// };
/// let ten = Card {
///     id: CardId::new("ten-0"),
///     kind: CardKind::Ten,
///     text: "10".into(),
///     value: 10,
///     matched: false,
/// };
/// let other = Card {
///     id: CardId::new("expr-2"),
///     text: "3 + 7".into(),
///     ..expr.clone()
/// };
///
/// assert!(is_match(&expr, &ten));
/// assert!(is_match(&ten, &expr));
/// assert!(!is_match(&expr, &other));
/// ```
pub fn is_match(a: &Card, b: &Card) -> bool {
    let pairs = |expr: &Card, ten: &Card| {
        expr.kind == CardKind::Expression && ten.kind == CardKind::Ten && expr.value == TARGET_VALUE
    };
    pairs(a, b) || pairs(b, a)
}

pub fn outcome(a: &Card, b: &Card) -> PairOutcome {
    if is_match(a, b) {
        PairOutcome::Match
    } else {
        PairOutcome::Mismatch
    }
}
