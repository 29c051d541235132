use crate::game::{Board, Player};

use super::policy::{winning_column, MovePolicy};
use super::random::RandomPolicy;

/// One-ply policy: take the first immediately winning column, otherwise
/// play like [`RandomPolicy`].
pub struct GreedyPolicy {
    fallback: RandomPolicy,
}

impl GreedyPolicy {
    pub fn new() -> Self {
        GreedyPolicy {
            fallback: RandomPolicy::new(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        GreedyPolicy {
            fallback: RandomPolicy::with_seed(seed),
        }
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for GreedyPolicy {
    fn select_column(&mut self, board: &Board, player: Player) -> usize {
        if let Some(col) = winning_column(board, player) {
            return col;
        }
        self.fallback.select_column(board, player)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
