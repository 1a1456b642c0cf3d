//! # line_games
//!
//! Adversarial search engine for two-player line games, instantiated for
//! 6x7 Connect Four and 3x3 tic-tac-toe: a board abstraction with line-based
//! win detection, a static heuristic evaluator, depth-limited alpha-beta
//! negamax, and three tiers of computer opponents.
//!
//! ## Modules
//!
//! - [`game`] — Board, variants, players, win/draw detection
//! - [`ai`] — Heuristic evaluator, search engine, strategy tiers
//! - [`config`] — TOML match configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
