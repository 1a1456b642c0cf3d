//! Move selection: static evaluation, negamax search, and the tiered
//! strategies built on top of them.

pub mod heuristic;
pub mod search;
pub mod strategy;

pub use heuristic::{EvalTables, HeuristicEvaluator};
pub use search::{SearchEngine, WIN_SCORE};
pub use strategy::{MoveStrategy, Tier};
