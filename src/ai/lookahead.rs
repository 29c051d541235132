use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::BoardError;
use crate::game::{Board, Player};

use super::policy::{winning_column, MovePolicy};
use super::random::RandomPolicy;

/// Two-ply policy: take an immediate win if one exists; otherwise avoid
/// every column that would hand the opponent a win on the next turn,
/// choosing uniformly among the remaining safe columns.
pub struct LookaheadPolicy {
    rng: StdRng,
    fallback: RandomPolicy,
}

impl LookaheadPolicy {
    pub fn new() -> Self {
        LookaheadPolicy {
            rng: StdRng::from_os_rng(),
            fallback: RandomPolicy::new(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        LookaheadPolicy {
            rng: StdRng::seed_from_u64(seed),
            fallback: RandomPolicy::with_seed(seed.wrapping_add(1)),
        }
    }

    /// Columns where `player` can move without the opponent winning on
    /// the reply. Full columns are not candidates at all; they are
    /// filtered here, not marked unsafe.
    fn safe_columns(board: &Board, player: Player) -> Vec<usize> {
        let opponent = player.other();
        let mut safe = Vec::with_capacity(board.cols());

        for col in 0..board.cols() {
            let mut own = board.clone();
            match own.insert(col, player.to_cell()) {
                Ok(_) => {}
                Err(BoardError::ColumnFull { .. }) => continue,
                Err(_) => unreachable!("probe insert failed for a reason other than a full column"),
            }
            if winning_column(&own, opponent).is_none() {
                safe.push(col);
            }
        }

        safe
    }
}

impl Default for LookaheadPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for LookaheadPolicy {
    fn select_column(&mut self, board: &Board, player: Player) -> usize {
        if let Some(col) = winning_column(board, player) {
            return col;
        }

        let safe = Self::safe_columns(board, player);
        if safe.is_empty() {
            // Every open column loses; accept it and play like Random.
            debug!("{}: no safe column for {}", self.name(), player.name());
            return self.fallback.select_column(board, player);
        }

        safe[self.rng.random_range(0..safe.len())]
    }

    fn name(&self) -> &str {
        "Lookahead"
    }
}
