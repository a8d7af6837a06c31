//! Picker with perfect recall.
//!
//! Every card it has seen face-up is remembered by kind. When it knows an
//! expression and a ten that are both still face-down it takes them; otherwise
//! it explores a card it has not seen yet.

use std::collections::HashMap;

use crate::{Picker, hidden};
use maketen_engine::cards::{CardId, CardKind};
use maketen_engine::game::{CardView, Face};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone)]
pub struct MemoryPicker {
    seen: HashMap<CardId, CardKind>,
    rng: ChaCha20Rng,
}

impl MemoryPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            seen: HashMap::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn remembered(&self) -> usize {
        self.seen.len()
    }

    fn known<'a>(&self, board: &'a [CardView], kind: CardKind) -> Option<&'a CardView> {
        hidden(board).find(|v| self.seen.get(&v.id) == Some(&kind))
    }

    fn explore(&mut self, board: &[CardView]) -> Option<CardId> {
        let unseen: Vec<&CardView> = hidden(board)
            .filter(|v| !self.seen.contains_key(&v.id))
            .collect();
        let pool: Vec<&CardView> = if unseen.is_empty() {
            hidden(board).collect()
        } else {
            unseen
        };
        if pool.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..pool.len());
        Some(pool[idx].id.clone())
    }
}

impl Picker for MemoryPicker {
    fn pick(&mut self, board: &[CardView]) -> Option<CardId> {
        let face_up = board
            .iter()
            .find(|v| v.face == Face::Revealed)
            .and_then(|v| v.kind);

        match face_up {
            Some(kind) => {
                if let Some(partner) = self.known(board, kind.opposite()) {
                    return Some(partner.id.clone());
                }
            }
            None => {
                let expr = self.known(board, CardKind::Expression);
                let ten = self.known(board, CardKind::Ten);
                if let (Some(expr), Some(_)) = (expr, ten) {
                    return Some(expr.id.clone());
                }
            }
        }
        self.explore(board)
    }

    fn observe(&mut self, board: &[CardView]) {
        for view in board {
            match (view.face, view.kind) {
                (Face::Matched, _) => {
                    self.seen.remove(&view.id);
                }
                (Face::Revealed, Some(kind)) => {
                    self.seen.insert(view.id.clone(), kind);
                }
                _ => {}
            }
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }

    fn name(&self) -> &str {
        "memory"
    }
}
