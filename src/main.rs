use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

pub mod tui;

/// Who plays which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two humans at the same terminal.
    Pvp,
    PlayerVsRandom,
    RandomVsRandom,
    PlayerVsAi,
    AiVsAi,
}

/// Terminal chess against humans, a random mover or a minimax search.
#[derive(Debug, Parser)]
#[command(name = "chess", version, about)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Mode::PlayerVsAi)]
    pub mode: Mode,

    /// Search depth in plies for the AI side. Defaults to the engine config.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Seed for the random mover, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many plies even if the game is not over.
    #[arg(long)]
    pub max_plies: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tui::run(&args)
}
