use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::game::{Board, Cell, Player, Variant};

use super::search::SearchEngine;

/// Move-selection policy tiers, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Uniformly random legal move.
    Random,
    /// Takes immediate wins, blocks immediate losses, otherwise random.
    Tactical,
    /// Full negamax search with random tie-break among equal-best moves.
    Search,
}

/// A computer-controlled side: one of the closed set of tiers bound to a
/// search engine and its own RNG.
///
/// Stateless with respect to the game: every selection is a function of the
/// board passed in (plus RNG draws).
pub struct MoveStrategy {
    tier: Tier,
    engine: SearchEngine,
    rng: StdRng,
}

impl MoveStrategy {
    pub fn new(tier: Tier, variant: Variant) -> Self {
        MoveStrategy {
            tier,
            engine: SearchEngine::new(variant),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic RNG for tests and reproducible matches.
    pub fn seeded(tier: Tier, variant: Variant, seed: u64) -> Self {
        MoveStrategy {
            tier,
            engine: SearchEngine::new(variant),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Substitute engine (alternate tables or cutoff schedule).
    pub fn with_engine(tier: Tier, engine: SearchEngine, seed: u64) -> Self {
        MoveStrategy {
            tier,
            engine,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Select a move for `player`. The caller verifies it is that side's turn
    /// and applies the returned move to the live board.
    pub fn select(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        match self.tier {
            Tier::Random => self.select_random(board),
            Tier::Tactical => self.select_tactical(board, player),
            Tier::Search => self.select_search(board, player),
        }
    }

    fn select_random(&mut self, board: &Board) -> Result<usize, EngineError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(EngineError::EmptyMoveSet);
        }
        Ok(legal[self.rng.random_range(0..legal.len())])
    }

    fn select_tactical(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        if board.turn_count() == 1 {
            return Ok(board.variant().opening_move());
        }
        if let Some(mv) = immediate_win(board, player.to_cell()) {
            return Ok(mv);
        }
        if let Some(mv) = immediate_win(board, player.other().to_cell()) {
            return Ok(mv);
        }
        self.select_random(board)
    }

    fn select_search(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        // The symmetric center is the known-best opening; skip the search.
        if board.turn_count() == 1 {
            return Ok(board.variant().opening_move());
        }

        let legal = board.legal_moves().to_vec();
        if legal.is_empty() {
            return Err(EngineError::EmptyMoveSet);
        }
        let cutoff = self.engine.cutoff_for(legal.len());

        let mut scratch = board.clone();
        let mut scored = Vec::with_capacity(legal.len());
        for mv in legal {
            scratch.apply_unchecked(mv, player.to_cell());
            let score = -self.engine.search(&mut scratch, player.other(), cutoff);
            scratch.undo(mv);
            scored.push((mv, score));
        }

        // Uniform choice over the max-scoring subset; first-found would make
        // the engine deterministically exploitable.
        let best = scored.iter().map(|&(_, score)| score).max().unwrap_or(0);
        let best_moves: Vec<usize> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(mv, _)| mv)
            .collect();
        Ok(best_moves[self.rng.random_range(0..best_moves.len())])
    }
}

/// First legal move that completes a winning run for `cell`, if any.
fn immediate_win(board: &Board, cell: Cell) -> Option<usize> {
    let mut scratch = board.clone();
    for &mv in board.legal_moves() {
        scratch.apply_unchecked(mv, cell);
        let wins = scratch.is_win();
        scratch.undo(mv);
        if wins {
            return Some(mv);
        }
    }
    None
}
