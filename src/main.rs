//! baduk-engine CLI: a small demo driver for the 9x9 Go engine library.
//!
//! - `baduk-engine demo` - self-play two configured bot levels and print
//!   the board after each move.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use baduk_engine::bot::{GenMove, Level, Move};
use baduk_engine::engine::Engine;
use baduk_engine::geometry::Color;

#[derive(Parser)]
#[command(name = "baduk-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Self-play two bots against each other and print the board after
    /// every move.
    Demo {
        #[arg(long, value_enum, default_value = "medium")]
        black: CliLevel,
        #[arg(long, value_enum, default_value = "medium")]
        white: CliLevel,
        #[arg(long, default_value_t = 80)]
        max_moves: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CliLevel {
    Joke,
    Easy,
    Medium,
    Hard,
    Crazy,
    Demon,
}

impl From<CliLevel> for Level {
    fn from(l: CliLevel) -> Level {
        match l {
            CliLevel::Joke => Level::Joke,
            CliLevel::Easy => Level::Easy,
            CliLevel::Medium => Level::Medium,
            CliLevel::Hard => Level::Hard,
            CliLevel::Crazy => Level::Crazy,
            CliLevel::Demon => Level::Demon,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { black, white, max_moves, seed }) => {
            run_demo(black.into(), white.into(), max_moves, seed)
        }
        None => run_demo(Level::Medium, Level::Medium, 80, None),
    }
}

fn run_demo(black_level: Level, white_level: Level, max_moves: u32, seed: Option<u64>) -> Result<()> {
    println!("baduk-engine demo: {black_level:?} (B) vs {white_level:?} (W)\n");

    let mut engine = Engine::new();
    let black = match seed {
        Some(s) => engine.new_bot_seeded(black_level, Color::Black, s),
        None => engine.new_bot(black_level, Color::Black),
    };
    let white = match seed {
        Some(s) => engine.new_bot_seeded(white_level, Color::White, s.wrapping_add(1)),
        None => engine.new_bot(white_level, Color::White),
    };

    let mut to_move = Color::Black;
    for ply in 1..=max_moves {
        let (mover, other) = if to_move == Color::Black { (black, white) } else { (white, black) };
        let decision = engine.get_move(mover).context("bot handle should still be registered")?;
        match decision {
            GenMove::Play(pos) => {
                println!("{ply}: {to_move} plays {pos}");
                engine.play(other, Move::Place(to_move, pos)).context("opponent handle should still be registered")?;
                println!("{}", engine.render_board(mover).context("bot handle should still be registered")?);
            }
            GenMove::Pass => {
                println!("{ply}: {to_move} passes");
            }
            GenMove::Resign => {
                println!("{ply}: {to_move} resigns");
                break;
            }
        }
        to_move = to_move.other();
    }

    engine.destroy(black).ok();
    engine.destroy(white).ok();
    Ok(())
}
