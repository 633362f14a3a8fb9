//! The text user interface: turn sequencing, board printing and human input.

use crate::{Args, Mode};
use anyhow::Context;
use engine::config::Config;
use engine::engine::Engine;
use engine::random;
use engine::{ChessError, Color, Game, Outcome, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tracing::info;

enum Controller {
    Human,
    Random,
    Minimax,
}

impl Controller {
    fn for_side(mode: Mode, color: Color) -> Controller {
        match (mode, color) {
            (Mode::Pvp, _) => Controller::Human,
            (Mode::PlayerVsRandom, Color::White) => Controller::Human,
            (Mode::PlayerVsRandom, Color::Black) => Controller::Random,
            (Mode::RandomVsRandom, _) => Controller::Random,
            (Mode::PlayerVsAi, Color::White) => Controller::Human,
            (Mode::PlayerVsAi, Color::Black) => Controller::Minimax,
            (Mode::AiVsAi, _) => Controller::Minimax,
        }
    }
}

/// What a line of human input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(Square, Square),
    Exit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line == "exit" || line == "quit" {
        return Ok(Command::Exit);
    }

    let coords = line
        .split_whitespace()
        .map(|token| token.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("not a number: {e}"))?;
    let [fr, fc, tr, tc] = coords[..] else {
        return Err("expected four numbers: from_row from_col to_row to_col".to_string());
    };

    let from = Square::try_new(fr, fc).map_err(|e| e.to_string())?;
    let to = Square::try_new(tr, tc).map_err(|e| e.to_string())?;
    Ok(Command::Move(from, to))
}

/// Runs games until one ends, the ply limit is hit or a human exits.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = Config::default();
    let depth = args.depth.unwrap_or(config.default_search_depth);
    let mut engine = Engine::with_config(config);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut plies = 0u32;

    info!(mode = ?args.mode, depth, "starting game");
    println!("--- Chess in Rust ---");
    if matches!(args.mode, Mode::Pvp | Mode::PlayerVsRandom | Mode::PlayerVsAi) {
        println!(
            "Enter moves as 'from_row from_col to_row to_col' (e.g. 6 4 4 4). Type 'exit' to quit."
        );
    }

    loop {
        println!();
        println!("{}", game.board());

        let color = game.turn();
        if let Some(outcome) = game.outcome(color) {
            match outcome {
                Outcome::Checkmate { winner } => println!("Checkmate! {winner} wins."),
                Outcome::Stalemate => println!("Stalemate! It's a draw."),
            }
            info!(?outcome, plies, "game over");
            break;
        }
        if args.max_plies.is_some_and(|max| plies >= max) {
            println!("Ply limit reached after {plies} plies.");
            break;
        }
        if game.is_in_check(color) {
            println!("{color} is in check.");
        }

        match Controller::for_side(args.mode, color) {
            Controller::Human => {
                print!("{color} to move: ");
                io::stdout().flush().context("flushing stdout")?;

                let Some(line) = lines.next() else {
                    break;
                };
                let line = line.context("reading a move from stdin")?;
                match parse_command(&line) {
                    Ok(Command::Exit) => break,
                    Ok(Command::Move(from, to)) => match game.try_move(from, to) {
                        Ok(mv) => println!("{color} plays {mv}"),
                        Err(
                            err @ (ChessError::InvalidMove { .. }
                            | ChessError::NoPieceAtSquare { .. }),
                        ) => {
                            println!("{err}. Please try again.");
                            continue;
                        }
                        Err(err) => return Err(err.into()),
                    },
                    Err(msg) => {
                        println!("{msg}. Please try again.");
                        continue;
                    }
                }
            }
            Controller::Random => {
                if !random::make_random_move(&mut game, color, &mut rng) {
                    break;
                }
                report_last_move(&game, color);
            }
            Controller::Minimax => {
                println!("{color} is thinking...");
                if !engine.make_smart_move(&mut game, color, depth) {
                    break;
                }
                report_last_move(&game, color);
            }
        }

        plies += 1;
        game.advance_turn();
    }

    Ok(())
}

fn report_last_move(game: &Game, color: Color) {
    if let Some(mv) = game.last_move() {
        println!("{color} plays {mv}");
    }
}
