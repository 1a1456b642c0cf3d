//! Core game logic: board representation, legal-move tracking, line-based win
//! detection, and player types for both instantiated variants.

mod board;
mod player;

pub use board::{Board, Cell, Variant};
pub use player::Player;
