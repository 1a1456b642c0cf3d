use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use line_games::ai::{MoveStrategy, Tier};
use line_games::config::MatchConfig;
use line_games::game::{Board, Player, Variant};

/// Run a series of games between two configured computer opponents.
#[derive(Parser)]
#[command(name = "line_games", about = "Line-game match runner with tiered AI opponents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "match.toml")]
    config: PathBuf,

    /// Override game variant: connect_four or tic_tac_toe
    #[arg(long)]
    variant: Option<String>,

    /// Override player 1 tier: random, tactical, or search
    #[arg(long)]
    p1: Option<String>,

    /// Override player 2 tier: random, tactical, or search
    #[arg(long)]
    p2: Option<String>,

    /// Override number of games in the series
    #[arg(long)]
    games: Option<usize>,

    /// Override RNG seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[arg(long)]
    show_boards: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(variant) = &cli.variant {
        config.variant = parse_variant(variant)?;
    }
    if let Some(tier) = &cli.p1 {
        config.p1_tier = parse_tier(tier)?;
    }
    if let Some(tier) = &cli.p2 {
        config.p2_tier = parse_tier(tier)?;
    }
    if let Some(games) = cli.games {
        config.games = games;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    run_series(&config, cli.show_boards)
}

fn parse_variant(name: &str) -> Result<Variant> {
    match name {
        "connect_four" => Ok(Variant::ConnectFour),
        "tic_tac_toe" => Ok(Variant::TicTacToe),
        other => bail!("unknown variant '{}' (expected 'connect_four' or 'tic_tac_toe')", other),
    }
}

fn parse_tier(name: &str) -> Result<Tier> {
    match name {
        "random" => Ok(Tier::Random),
        "tactical" => Ok(Tier::Tactical),
        "search" => Ok(Tier::Search),
        other => bail!("unknown tier '{}' (expected 'random', 'tactical', or 'search')", other),
    }
}

fn run_series(config: &MatchConfig, show_boards: bool) -> Result<()> {
    let mut p1_wins = 0usize;
    let mut p2_wins = 0usize;
    let mut draws = 0usize;

    for game in 0..config.games {
        let outcome = play_game(config, game as u64, show_boards)?;
        match outcome {
            Some(Player::P1) => p1_wins += 1,
            Some(Player::P2) => p2_wins += 1,
            None => draws += 1,
        }
        let result = match outcome {
            Some(winner) => format!("{} wins", winner.name()),
            None => "draw".to_string(),
        };
        println!("game {}: {}", game + 1, result);
    }

    println!(
        "series over {} games: {} {:?} {} - {} {:?} {} - draws {}",
        config.games, Player::P1.name(), config.p1_tier, p1_wins,
        Player::P2.name(), config.p2_tier, p2_wins, draws,
    );
    Ok(())
}

fn play_game(config: &MatchConfig, game_idx: u64, show_boards: bool) -> Result<Option<Player>> {
    let strategy_for = |tier, offset: u64| match config.seed {
        Some(seed) => MoveStrategy::seeded(tier, config.variant, seed + game_idx * 2 + offset),
        None => MoveStrategy::new(tier, config.variant),
    };
    let mut p1 = strategy_for(config.p1_tier, 0);
    let mut p2 = strategy_for(config.p2_tier, 1);
    let mut board = Board::new(config.variant);

    loop {
        let mover = board.to_move();
        let strategy = if mover == Player::P1 { &mut p1 } else { &mut p2 };
        let mv = strategy.select(&board, mover)?;
        board.apply(mv, mover.to_cell())?;
        if show_boards {
            println!("{} plays {}\n{}", mover.name(), mv, board.render());
        }
        if board.is_win() {
            return Ok(Some(mover));
        }
        if board.is_full() {
            return Ok(None);
        }
    }
}
