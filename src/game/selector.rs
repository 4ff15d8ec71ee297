//! Question drawing.

use crate::config::SelectionStrategy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Picks indices into the question set according to a [`SelectionStrategy`].
#[derive(Debug, Clone)]
pub struct QuestionSelector {
    strategy: SelectionStrategy,
    rng: StdRng,
    deck: Vec<usize>,
}

impl QuestionSelector {
    pub fn new(strategy: SelectionStrategy) -> Self {
        Self::with_rng(strategy, StdRng::from_entropy())
    }

    /// Deterministic selector for replays and tests.
    pub fn seeded(strategy: SelectionStrategy, seed: u64) -> Self {
        Self::with_rng(strategy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(strategy: SelectionStrategy, rng: StdRng) -> Self {
        Self {
            strategy,
            rng,
            deck: Vec::new(),
        }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Forget any partially dealt deck. Called when the question set changes.
    pub fn reset(&mut self) {
        self.deck.clear();
    }

    /// Next index into a question set of `len` entries, `None` if empty.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self.strategy {
            SelectionStrategy::Uniform => Some(self.rng.gen_range(0..len)),
            SelectionStrategy::Shuffled => {
                if self.deck.is_empty() || self.deck.iter().any(|&i| i >= len) {
                    self.deck = (0..len).collect();
                    self.deck.shuffle(&mut self.rng);
                }
                self.deck.pop()
            }
        }
    }
}
