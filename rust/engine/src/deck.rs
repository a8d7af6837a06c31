use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, CardId, CardKind, ExpressionDef, TEN_TEXT};
use crate::rules::TARGET_VALUE;

/// The cards of one round in board order.
///
/// Built from a card set: every expression contributes one expression card and
/// one ten card, then the whole sequence is shuffled with a seeded ChaCha20 RNG.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new_with_seed(defs: &[ExpressionDef], seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(defs.len() * 2);
        for (idx, def) in defs.iter().enumerate() {
            cards.push(Card {
                id: CardId::new(format!("expr-{}-{:08x}", idx, rng.next_u32())),
                kind: CardKind::Expression,
                text: def.text.clone(),
                value: def.value,
                matched: false,
            });
            cards.push(Card {
                id: CardId::new(format!("ten-{}-{:08x}", idx, rng.next_u32())),
                kind: CardKind::Ten,
                text: TEN_TEXT.to_string(),
                value: TARGET_VALUE,
                matched: false,
            });
        }
        cards.shuffle(&mut rng);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|c| c.kind == kind).count()
    }

    pub fn remaining(&self) -> usize {
        self.cards.iter().filter(|c| !c.matched).count()
    }
}
