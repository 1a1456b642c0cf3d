use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::P1 => Cell::P1,
            Player::P2 => Cell::P2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::P1 => "Player 1",
            Player::P2 => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::P1.other(), Player::P2);
        assert_eq!(Player::P2.other(), Player::P1);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::P1.to_cell(), Cell::P1);
        assert_eq!(Player::P2.to_cell(), Cell::P2);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::P1.name(), "Player 1");
        assert_eq!(Player::P2.name(), "Player 2");
    }
}
