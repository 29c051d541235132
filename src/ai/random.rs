use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::policy::MovePolicy;

/// A policy that draws columns uniformly at random until it hits one
/// that is not full.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn select_column(&mut self, board: &Board, _player: Player) -> usize {
        assert!(!board.is_full(), "no open column available");
        // Cannot starve: at least one column is open.
        loop {
            let col = self.rng.random_range(0..board.cols());
            if !board.is_column_full(col) {
                return col;
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
