use crate::error::BoardError;
use crate::game::{Board, Player};

/// Interface for automated move selection.
///
/// Callers must not invoke a policy on a full board; every policy
/// guarantees the returned column accepts an insertion.
pub trait MovePolicy {
    /// Select a column for `player` on `board`.
    fn select_column(&mut self, board: &Board, player: Player) -> usize;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}

/// The lowest-indexed column where inserting `player`'s marker wins
/// immediately, probed on a clone of the board. Ascending scan order is
/// the tie-break between several winning columns. A full column is not
/// a candidate.
pub(crate) fn winning_column(board: &Board, player: Player) -> Option<usize> {
    for col in 0..board.cols() {
        let mut probe = board.clone();
        match probe.insert(col, player.to_cell()) {
            Ok(_) => {
                if probe.winner() == Some(player) {
                    return Some(col);
                }
            }
            Err(BoardError::ColumnFull { .. }) => {}
            // The column index is in range and the marker is a player
            // marker, so no other error can occur.
            Err(_) => unreachable!("probe insert failed for a reason other than a full column"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    /// Cross holds three cells of a lying S; only column 2 completes it:
    ///   . . .        . . .
    ///   . X .   ->   . X X
    ///   X X O        X X O
    fn one_threat_board() -> Board {
        let mut board = Board::new(3, 3).unwrap();
        board.insert(0, Cell::Cross).unwrap();
        board.insert(1, Cell::Cross).unwrap();
        board.insert(1, Cell::Cross).unwrap();
        board.insert(2, Cell::Circle).unwrap();
        board
    }

    #[test]
    fn test_winning_column_finds_completing_move() {
        let board = one_threat_board();
        assert_eq!(winning_column(&board, Player::Cross), Some(2));
        assert_eq!(winning_column(&board, Player::Circle), None);
    }

    #[test]
    fn test_winning_column_skips_full_columns() {
        let mut board = Board::new(3, 3).unwrap();
        for _ in 0..3 {
            board.insert(0, Cell::Circle).unwrap();
        }
        assert_eq!(winning_column(&board, Player::Cross), None);
    }

    #[test]
    fn test_winning_column_does_not_mutate_board() {
        let board = one_threat_board();
        let before = board.clone();
        winning_column(&board, Player::Cross);
        assert_eq!(board, before);
    }
}
