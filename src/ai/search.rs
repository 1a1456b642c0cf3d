use crate::game::{Board, Player, Variant};

use super::heuristic::{EvalTables, HeuristicEvaluator};

/// Base score for a decided game, adjusted by ply so faster wins (and slower
/// losses) score better. Larger than any achievable heuristic value.
pub const WIN_SCORE: i32 = 1000;

/// Window sentinels standing in for +/- infinity.
const SCORE_BOUND: i32 = 10_000;

/// Depth-limited negamax with alpha-beta pruning.
///
/// Stateless between calls: every search is a pure function of the board it
/// is handed. Tables and the cutoff schedule are injected at construction so
/// concurrent games cannot interfere and tests can substitute their own.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    evaluator: HeuristicEvaluator,
    cutoff_depths: Vec<u32>,
}

impl SearchEngine {
    pub fn new(variant: Variant) -> Self {
        SearchEngine {
            evaluator: HeuristicEvaluator::new(variant),
            cutoff_depths: cutoff_schedule(variant),
        }
    }

    /// Build an engine over substitute tables and cutoff schedule. The
    /// schedule is indexed by the count of remaining legal moves.
    pub fn with_tables(tables: EvalTables, cutoff_depths: Vec<u32>) -> Self {
        SearchEngine {
            evaluator: HeuristicEvaluator::with_tables(tables),
            cutoff_depths,
        }
    }

    /// Cutoff depth for a position with `remaining` legal moves: deeper caps
    /// as the branching factor shrinks.
    pub fn cutoff_for(&self, remaining: usize) -> u32 {
        let idx = remaining.min(self.cutoff_depths.len() - 1);
        self.cutoff_depths[idx]
    }

    /// Score `board` from `to_move`'s perspective with a full window.
    pub fn search(&self, board: &mut Board, to_move: Player, cutoff: u32) -> i32 {
        self.negamax(board, to_move, cutoff, 0, -SCORE_BOUND, SCORE_BOUND)
    }

    fn negamax(
        &self,
        board: &mut Board,
        to_move: Player,
        cutoff: u32,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if board.is_full() {
            return 0;
        }
        if board.is_win() {
            // The winning run was completed by the previous mover; from the
            // side to move this is a loss, worse the sooner it arrives.
            return -(WIN_SCORE - depth as i32);
        }
        if depth == cutoff {
            return self.evaluator.evaluate(board, to_move);
        }

        for mv in board.legal_moves().to_vec() {
            board.apply_unchecked(mv, to_move.to_cell());
            let score = -self.negamax(board, to_move.other(), cutoff, depth + 1, -beta, -alpha);
            board.undo(mv);
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                return alpha;
            }
        }

        alpha
    }
}

/// Adaptive cutoff depth keyed by the number of open columns/cells. The wide
/// board caps the search while many columns remain and runs unbounded once
/// the tree is small; the 3x3 tree is always solved exhaustively.
fn cutoff_schedule(variant: Variant) -> Vec<u32> {
    const UNBOUNDED: u32 = 1000;
    match variant {
        Variant::ConnectFour => vec![
            UNBOUNDED, UNBOUNDED, UNBOUNDED, UNBOUNDED, 8, 6, 5, 5,
        ],
        Variant::TicTacToe => vec![UNBOUNDED; 10],
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::game::Cell;

    use super::*;

    /// Reference negamax without pruning, for equivalence checks.
    fn plain_negamax(
        engine: &SearchEngine,
        board: &mut Board,
        to_move: Player,
        cutoff: u32,
        depth: u32,
    ) -> i32 {
        if board.is_full() {
            return 0;
        }
        if board.is_win() {
            return -(WIN_SCORE - depth as i32);
        }
        if depth == cutoff {
            return engine.evaluator.evaluate(board, to_move);
        }
        let mut best = -SCORE_BOUND;
        for mv in board.legal_moves().to_vec() {
            board.apply_unchecked(mv, to_move.to_cell());
            let score = -plain_negamax(engine, board, to_move.other(), cutoff, depth + 1);
            board.undo(mv);
            best = best.max(score);
        }
        best
    }

    /// Play `plies` random legal moves, retrying until the position is
    /// non-terminal.
    fn random_midgame(rng: &mut StdRng, plies: usize) -> Board {
        'outer: loop {
            let mut board = Board::new(Variant::ConnectFour);
            for i in 0..plies {
                let legal = board.legal_moves().to_vec();
                let mv = legal[rng.random_range(0..legal.len())];
                let cell = if i % 2 == 0 { Cell::P1 } else { Cell::P2 };
                board.apply(mv, cell).unwrap();
                if board.is_win() {
                    continue 'outer;
                }
            }
            return board;
        }
    }

    #[test]
    fn draw_scores_zero() {
        let engine = SearchEngine::new(Variant::ConnectFour);
        let row_types = [0usize, 0, 1, 1, 0, 1];
        let mut board = Board::new(Variant::ConnectFour);
        for col in 0..7 {
            for t in row_types {
                let cell = if (col + t) % 2 == 0 { Cell::P1 } else { Cell::P2 };
                board.apply(col, cell).unwrap();
            }
        }
        assert!(board.is_full() && !board.is_win());
        assert_eq!(engine.search(&mut board, Player::P1, 5), 0);
    }

    #[test]
    fn won_position_scores_as_depth_scaled_loss() {
        let engine = SearchEngine::new(Variant::ConnectFour);
        let mut board = Board::new(Variant::ConnectFour);
        for col in 0..4 {
            board.apply(col, Cell::P1).unwrap();
        }
        // P2 to move into a completed run: loss at depth 0.
        assert_eq!(engine.search(&mut board, Player::P2, 5), -(WIN_SCORE));
    }

    #[test]
    fn faster_win_scores_higher() {
        let engine = SearchEngine::new(Variant::ConnectFour);

        // P1 mates in one: three stacked in column 2.
        let mut board = Board::new(Variant::ConnectFour);
        for _ in 0..3 {
            board.apply(2, Cell::P1).unwrap();
            board.apply(6, Cell::P2).unwrap();
        }
        let score = engine.search(&mut board, Player::P1, 8);
        // Win delivered at depth 1.
        assert_eq!(score, WIN_SCORE - 1);
    }

    #[test]
    fn cutoff_depth_tracks_remaining_moves() {
        let engine = SearchEngine::new(Variant::ConnectFour);
        assert_eq!(engine.cutoff_for(7), 5);
        assert_eq!(engine.cutoff_for(6), 5);
        assert_eq!(engine.cutoff_for(5), 6);
        assert_eq!(engine.cutoff_for(4), 8);
        assert_eq!(engine.cutoff_for(3), 1000);
        assert_eq!(engine.cutoff_for(1), 1000);

        let ttt = SearchEngine::new(Variant::TicTacToe);
        assert_eq!(ttt.cutoff_for(9), 1000);
    }

    #[test]
    fn pruning_never_changes_the_root_value() {
        let engine = SearchEngine::new(Variant::ConnectFour);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let mut board = random_midgame(&mut rng, 10);
            for to_move in [Player::P1, Player::P2] {
                let pruned = engine.search(&mut board, to_move, 4);
                let plain = plain_negamax(&engine, &mut board.clone(), to_move, 4, 0);
                assert_eq!(pruned, plain, "diverged on:\n{}", board.render());
            }
        }
    }

    #[test]
    fn search_leaves_board_untouched() {
        let engine = SearchEngine::new(Variant::ConnectFour);
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = random_midgame(&mut rng, 8);
        let before = board.clone();
        engine.search(&mut board, Player::P1, 5);
        assert_eq!(board, before);
    }

    #[test]
    fn tic_tac_toe_is_a_solved_draw() {
        let engine = SearchEngine::new(Variant::TicTacToe);
        let mut board = Board::new(Variant::TicTacToe);
        // Full-depth search from the empty board: perfect play draws.
        assert_eq!(engine.search(&mut board, Player::P1, engine.cutoff_for(9)), 0);
    }
}
