//! Headless demo runner (default binary).
//!
//! Plays one seeded game with no display: each tick it may nudge the piece
//! left or right at random, then applies gravity, until the game tops out or
//! the tick limit is reached. Progress goes to the log; the final board is
//! printed at the end.

use anyhow::{ensure, Result};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

use falling_blocks::config::DemoConfig;
use falling_blocks::core::{generate_piece, AdvanceOutcome, GameState, SimpleRng};
use falling_blocks::types::Direction;

fn main() -> Result<()> {
    let config = DemoConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            config.log_level,
        ))
        .init();

    run(&config)
}

fn run(config: &DemoConfig) -> Result<()> {
    ensure!(config.max_ticks > 0, "BLOCKS_MAX_TICKS must be positive");
    info!(seed = config.seed, max_ticks = config.max_ticks, "starting game");

    let mut rng = SimpleRng::new(config.seed);
    let mut state = GameState::new(generate_piece(None, &mut rng));
    let mut next = generate_piece(None, &mut rng);

    let mut ticks = 0u32;
    let mut pieces = 1u32;
    let mut lines = 0u32;

    while ticks < config.max_ticks && !state.terminated() {
        match rng.next_range(3) {
            0 => {
                state.try_move(Direction::Left);
            }
            1 => {
                state.try_move(Direction::Right);
            }
            _ => {}
        }

        let outcome = state.advance(&next);
        ticks += 1;

        if outcome.changed_piece() {
            pieces += 1;
            lines += outcome.lines_cleared();
            next = generate_piece(None, &mut rng);
        }

        if let AdvanceOutcome::Locked { lines_cleared } = outcome {
            if lines_cleared > 0 {
                debug!(tick = ticks, lines_cleared, total = lines, "lines cleared");
            }
        }
    }

    info!(
        ticks,
        pieces,
        lines,
        terminated = state.terminated(),
        "game finished"
    );
    print!("{}", state.snapshot());

    Ok(())
}
