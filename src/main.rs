//! Brick Breaker entry point
//!
//! Native headless runner: plays the game for a fixed number of ticks,
//! optionally dumping ASCII frames to stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use brick_breaker::platform::CommandBuffer;
use brick_breaker::renderer::{tessellate, vertex};
use brick_breaker::sim::{HeldKeys, autopilot_keys};
use brick_breaker::{Game, GameError, Settings};

fn main() -> ExitCode {
    env_logger::init();

    log::info!("Brick Breaker (native) starting...");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Wall-clock seed so each run gets a different layout
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run(settings: &Settings) -> Result<(), GameError> {
    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut game = Game::new(seed, settings);
    let mut stdout = std::io::stdout().lock();

    let mut bricks_destroyed = 0u64;
    let mut lives_lost = 0u64;
    let mut levels_cleared = 0u64;

    for tick in 1..=settings.demo_ticks {
        let keys = if settings.autopilot {
            autopilot_keys(game.state())
        } else {
            HeldKeys::default()
        };
        game.update(&keys)?;

        let events = game.last_events();
        bricks_destroyed += u64::from(events.bricks_destroyed);
        lives_lost += u64::from(events.life_lost);
        levels_cleared += u64::from(events.level_cleared);

        if settings.dumps_frame(tick) {
            game.present(&mut stdout)?;
        }
    }

    let mut frame = CommandBuffer::new();
    game.render(&mut frame);
    let vertices = tessellate(&frame.commands);
    log::debug!(
        "Final frame: {} draw commands, {} vertices ({} bytes)",
        frame.commands.len(),
        vertices.len(),
        vertex::as_bytes(&vertices).len()
    );

    let state = game.state();
    log::info!(
        "Finished {} ticks: level {}, score {}, lives {}, status {:?}",
        settings.demo_ticks,
        state.level,
        state.score,
        state.lives,
        state.status
    );
    log::info!(
        "Totals: {} bricks destroyed, {} lives lost, {} levels cleared",
        bricks_destroyed,
        lives_lost,
        levels_cleared
    );

    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {json}"),
        Err(e) => log::warn!("Could not serialize final state: {e}"),
    }

    Ok(())
}
