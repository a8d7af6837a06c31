//! Picker that reveals a uniformly random face-down card and remembers nothing.

use crate::{Picker, hidden};
use maketen_engine::cards::CardId;
use maketen_engine::game::CardView;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: ChaCha20Rng,
}

impl RandomPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, board: &[CardView]) -> Option<CardId> {
        let candidates: Vec<&CardView> = hidden(board).collect();
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx].id.clone())
    }

    fn name(&self) -> &str {
        "random"
    }
}
