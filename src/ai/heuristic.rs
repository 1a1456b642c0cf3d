use crate::game::{Board, Cell, Player, Variant};

/// Immutable scoring tables for one board geometry.
///
/// `weights` is a row-major per-cell positional table (center-biased,
/// symmetric). `line_scores` maps the number of own pieces in a window of
/// `run_len` cells to a score; the weights grow convexly so near-complete
/// threats dominate.
#[derive(Debug, Clone)]
pub struct EvalTables {
    pub weights: Vec<i32>,
    pub line_scores: Vec<i32>,
}

impl EvalTables {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::ConnectFour => EvalTables {
                weights: vec![
                    3, 4,  5,  7,  5, 4, 3,
                    4, 6,  8, 10,  8, 6, 4,
                    5, 8, 11, 13, 11, 8, 5,
                    5, 8, 11, 13, 11, 8, 5,
                    4, 6,  8, 10,  8, 6, 4,
                    3, 4,  5,  7,  5, 4, 3,
                ],
                line_scores: vec![0, 1, 4, 15],
            },
            // Never reached by the search (the 3x3 tree is solved to full
            // depth), but kept so both variants share the evaluator API.
            Variant::TicTacToe => EvalTables {
                weights: vec![
                    2, 1, 2,
                    1, 3, 1,
                    2, 1, 2,
                ],
                line_scores: vec![0, 1, 4],
            },
        }
    }
}

/// Static position evaluator used when the search cuts off before reaching a
/// terminal state.
#[derive(Debug, Clone)]
pub struct HeuristicEvaluator {
    tables: EvalTables,
}

impl HeuristicEvaluator {
    pub fn new(variant: Variant) -> Self {
        HeuristicEvaluator {
            tables: EvalTables::for_variant(variant),
        }
    }

    /// Build an evaluator over substitute tables.
    pub fn with_tables(tables: EvalTables) -> Self {
        HeuristicEvaluator { tables }
    }

    /// Score a non-terminal board from `perspective`'s point of view.
    ///
    /// Pure: depends only on board contents and perspective. The board must
    /// not already contain a winning run (the search checks terminals first).
    pub fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        self.score_position(board, perspective) + self.score_potential_lines(board, perspective)
    }

    /// Per-cell positional weight, added for own pieces, subtracted for the
    /// opponent's.
    fn score_position(&self, board: &Board, perspective: Player) -> i32 {
        let own = perspective.to_cell();
        let mut score = 0;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let weight = self.tables.weights[row * board.cols() + col];
                match board.get(row, col) {
                    Cell::Empty => {}
                    cell if cell == own => score += weight,
                    _ => score -= weight,
                }
            }
        }
        score
    }

    /// Slide a window of `run_len` cells along every line; open windows score
    /// by occupant count, mixed windows are dead and contribute nothing.
    fn score_potential_lines(&self, board: &Board, perspective: Player) -> i32 {
        let own_cell = perspective.to_cell();
        let opp_cell = perspective.other().to_cell();
        let k = board.run_len();
        let mut score = 0;

        for line in board.lines() {
            for window in line.windows(k) {
                let own = window.iter().filter(|&&c| c == own_cell).count();
                let opp = window.iter().filter(|&&c| c == opp_cell).count();
                if own > 0 && opp == 0 {
                    score += self.tables.line_scores[own];
                } else if opp > 0 && own == 0 {
                    score -= self.tables.line_scores[opp];
                }
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_zero() {
        let h = HeuristicEvaluator::new(Variant::ConnectFour);
        let board = Board::new(Variant::ConnectFour);
        assert_eq!(h.evaluate(&board, Player::P1), 0);
        assert_eq!(h.evaluate(&board, Player::P2), 0);
    }

    #[test]
    fn single_center_piece_scores_exactly() {
        let h = HeuristicEvaluator::new(Variant::ConnectFour);
        let mut board = Board::new(Variant::ConnectFour);
        board.apply(3, Cell::P1).unwrap();
        // Positional weight 7, plus 7 open windows through (5, 3):
        // four horizontal, one vertical, one per diagonal family.
        assert_eq!(h.evaluate(&board, Player::P1), 14);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let h = HeuristicEvaluator::new(Variant::ConnectFour);
        let mut board = Board::new(Variant::ConnectFour);
        for (i, &col) in [3, 2, 3, 4, 1, 1].iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::P1 } else { Cell::P2 };
            board.apply(col, cell).unwrap();
        }
        assert_eq!(
            h.evaluate(&board, Player::P1),
            -h.evaluate(&board, Player::P2)
        );
    }

    #[test]
    fn center_beats_edge() {
        let h = HeuristicEvaluator::new(Variant::ConnectFour);
        let mut center = Board::new(Variant::ConnectFour);
        center.apply(3, Cell::P1).unwrap();
        let mut edge = Board::new(Variant::ConnectFour);
        edge.apply(0, Cell::P1).unwrap();
        assert!(h.evaluate(&center, Player::P1) > h.evaluate(&edge, Player::P1));
    }

    #[test]
    fn near_complete_threat_dominates() {
        let h = HeuristicEvaluator::new(Variant::ConnectFour);
        let mut threat = Board::new(Variant::ConnectFour);
        for col in 1..4 {
            threat.apply(col, Cell::P1).unwrap();
        }
        let mut scattered = Board::new(Variant::ConnectFour);
        for col in [0, 2, 4] {
            scattered.apply(col, Cell::P1).unwrap();
        }
        assert!(h.evaluate(&threat, Player::P1) > h.evaluate(&scattered, Player::P1));
    }

    #[test]
    fn blocked_window_contributes_nothing() {
        let h = HeuristicEvaluator::new(Variant::TicTacToe);
        // Top row X X O: every window in that row is mixed.
        let mut board = Board::new(Variant::TicTacToe);
        board.apply(0, Cell::P1).unwrap();
        board.apply(1, Cell::P1).unwrap();
        board.apply(2, Cell::P2).unwrap();
        // Compare against the same position with the blocker absent.
        let mut open = Board::new(Variant::TicTacToe);
        open.apply(0, Cell::P1).unwrap();
        open.apply(1, Cell::P1).unwrap();
        assert!(h.evaluate(&board, Player::P1) < h.evaluate(&open, Player::P1));
    }

    #[test]
    fn substitute_tables_change_scores() {
        let mut board = Board::new(Variant::ConnectFour);
        board.apply(3, Cell::P1).unwrap();

        let flat = HeuristicEvaluator::with_tables(EvalTables {
            weights: vec![0; 42],
            line_scores: vec![0, 0, 0, 0],
        });
        assert_eq!(flat.evaluate(&board, Player::P1), 0);
    }
}
