use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Cross,
    Circle,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Cross => Cell::Cross,
            Player::Circle => Cell::Circle,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Cross => "Cross",
            Player::Circle => "Circle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Cross.other(), Player::Circle);
        assert_eq!(Player::Circle.other(), Player::Cross);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Cross.name(), "Cross");
        assert_eq!(Player::Circle.name(), "Circle");
    }

    #[test]
    fn test_cell_roundtrip() {
        assert_eq!(Player::Cross.to_cell().player(), Some(Player::Cross));
        assert_eq!(Player::Circle.to_cell().player(), Some(Player::Circle));
        assert_eq!(Cell::Empty.player(), None);
    }
}
