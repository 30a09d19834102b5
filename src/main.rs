//! PlyChess - Self-play driver
//!
//! Usage:
//!     ply_chess [config.toml]
//!
//! Plays the engine against itself from the standard starting position,
//! printing the board after every move. Set `RUST_LOG=ply_chess=debug` to
//! see per-move search details.

use anyhow::Context;
use ply_chess::config::EngineConfig;
use ply_chess::{Board, Color, GameStatus, MoveGenerator, PieceKind, SearchEngine};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => EngineConfig::default(),
    };

    let mut engine = match config.open_store() {
        Some(store) => SearchEngine::with_store(Box::new(store)),
        None => SearchEngine::new(),
    };
    let generator = MoveGenerator::new();
    let mut board = Board::standard();
    let mut side = Color::White;

    println!("{}\n", board.render());

    for ply in 1..=config.max_plies {
        // Only `best_move` is backed by the position store
        let chosen = match side {
            Color::White => engine.best_move_for(&board, config.depth, side)?,
            Color::Black => engine.best_move(&board, config.depth)?,
        };
        let Some(mv) = chosen else {
            break;
        };

        let outcome = board.move_piece(mv.from, mv.to)?;
        if outcome.promotion_reached {
            board.promote(mv.to, PieceKind::Queen, mv.handle)?;
        }

        println!(
            "{}. {} {} -> {}{} (score {}, {} nodes)",
            ply,
            side,
            mv.from,
            mv.to,
            if outcome.is_capture() { " x" } else { "" },
            mv.score,
            engine.nodes_searched
        );
        println!("{}\n", board.render());

        side = side.opposite();
        match generator.game_status(&board, side)? {
            GameStatus::Checkmate => {
                println!("Checkmate: {} wins!", side.opposite());
                return Ok(());
            }
            GameStatus::Stalemate => {
                println!("Stalemate: it's a draw!");
                return Ok(());
            }
            GameStatus::Check => println!("{} is in check!", side),
            GameStatus::Ongoing => {}
        }
    }

    println!("Stopped after {} plies", config.max_plies);
    Ok(())
}
