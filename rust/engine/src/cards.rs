use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::EngineError;
use crate::rules::TARGET_VALUE;

/// Display text of every ten card.
pub const TEN_TEXT: &str = "10";

/// The two faces a card can carry.
/// An expression card pairs with a ten card; two cards of the same kind never pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Arithmetic expression such as `4 + 6`
    Expression,
    /// The literal result `10`
    Ten,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Expression => "expr",
            CardKind::Ten => "ten",
        }
    }

    pub fn opposite(&self) -> CardKind {
        match self {
            CardKind::Expression => CardKind::Ten,
            CardKind::Ten => CardKind::Expression,
        }
    }
}

/// Opaque identity of a card within one round.
/// Ids stay unique even when two expressions share the same text.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single card on the board.
/// Everything except `matched` is fixed when the deck is built.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the round
    pub id: CardId,
    /// Expression or ten
    pub kind: CardKind,
    /// Text shown on the front face
    pub text: String,
    /// Numeric value of the face
    pub value: i64,
    /// Set once a successful match retires the card
    pub matched: bool,
}

/// One entry of the card set: an expression and the value it evaluates to.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExpressionDef {
    pub text: String,
    pub value: i64,
}

impl ExpressionDef {
    /// Parses a sum/difference chain such as `3 + 7` or `12 - 4 + 2`.
    ///
    /// The value is computed from the text, so the card face and its value
    /// cannot drift apart.
    ///
    /// ```
    /// use maketen_engine::cards::ExpressionDef;
    ///
    /// let def = ExpressionDef::parse("12 - 4 + 2").unwrap();
    /// assert_eq!(def.text, "12 - 4 + 2");
    /// assert_eq!(def.value, 10);
    /// assert!(ExpressionDef::parse("4 +").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidExpression {
            text: text.to_string(),
        };

        let mut total: i64 = 0;
        let mut sign: Option<i64> = Some(1);
        let mut operators = 0usize;
        let mut chars = text.trim().chars().peekable();

        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
            } else if c.is_ascii_digit() {
                let s = sign.take().ok_or_else(invalid)?;
                let mut n: i64 = 0;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    n = n
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(d as i64))
                        .ok_or_else(invalid)?;
                    chars.next();
                }
                total = total.checked_add(s * n).ok_or_else(invalid)?;
            } else if c == '+' || c == '-' {
                if sign.is_some() {
                    return Err(invalid());
                }
                sign = Some(if c == '+' { 1 } else { -1 });
                operators += 1;
                chars.next();
            } else {
                return Err(invalid());
            }
        }

        // trailing operator or no operator at all
        if sign.is_some() || operators == 0 {
            return Err(invalid());
        }

        Ok(Self {
            text: text.trim().to_string(),
            value: total,
        })
    }

    pub fn makes_ten(&self) -> bool {
        self.value == TARGET_VALUE
    }
}

/// The stock card set. `8 + 2` repeats `2 + 8` on purpose.
pub fn default_expressions() -> Vec<ExpressionDef> {
    ["1 + 9", "2 + 8", "3 + 7", "4 + 6", "5 + 5", "8 + 2"]
        .iter()
        .map(|text| ExpressionDef {
            text: (*text).to_string(),
            value: TARGET_VALUE,
        })
        .collect()
}
