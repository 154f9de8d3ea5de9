//! Frame driver
//!
//! Owns the single `GameState` and runs one update then one render per
//! tick on the calling thread. Update has exclusive access; render only
//! borrows the state afterwards.

use crate::consts::BALL_RADIUS;
use crate::error::GameError;
use crate::platform::{Canvas, InputSource, TextCanvas, poll_keys};
use crate::renderer::{Sprite, draw_frame};
use crate::settings::Settings;
use crate::sim::{ConfirmAction, ConfirmEdge, GameState, Rgba, TickEvents, TickInput, tick};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    confirm: ConfirmEdge,
    ball_sprite: Sprite,
    last_events: TickEvents,
}

impl Game {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::from_state(GameState::new(seed), settings)
    }

    /// Wrap an existing state (injected RNG, test fixtures)
    pub fn from_state(state: GameState, settings: &Settings) -> Self {
        Self {
            state,
            confirm: ConfirmEdge::new(settings.confirm_mode),
            ball_sprite: Sprite::disc(BALL_RADIUS as u32, Rgba::WHITE),
            last_events: TickEvents::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events produced by the most recent update
    pub fn last_events(&self) -> &TickEvents {
        &self.last_events
    }

    /// Run one simulation tick.
    ///
    /// Never fails in normal operation; the `Result` is the frame loop's
    /// stop signal.
    pub fn update(&mut self, input: &dyn InputSource) -> Result<(), GameError> {
        let keys = poll_keys(input);
        let tick_input = TickInput {
            left: keys.left,
            right: keys.right,
            confirm: self.confirm.sample(keys.confirm),
        };

        let events = tick(&mut self.state, &tick_input);
        self.log_events(&events);
        self.last_events = events;
        Ok(())
    }

    /// Draw the current state
    pub fn render(&self, canvas: &mut dyn Canvas) {
        draw_frame(&self.state, &self.ball_sprite, canvas);
    }

    /// Rasterize the current state as text and write it to `out`
    pub fn present<W: std::io::Write>(&self, out: &mut W) -> Result<(), GameError> {
        let mut canvas = TextCanvas::new();
        self.render(&mut canvas);
        canvas.present(out)?;
        Ok(())
    }

    fn log_events(&self, events: &TickEvents) {
        let state = &self.state;
        if events.level_cleared {
            log::info!("Level {} cleared! Score: {}", state.level, state.score);
        } else if events.game_over {
            log::info!("Game over at level {} with score {}", state.level, state.score);
        }
        match events.confirmed {
            Some(ConfirmAction::NextLevel) => log::info!("Advancing to level {}", state.level),
            Some(ConfirmAction::Restart) => log::info!("Restarting from level 1"),
            None => {}
        }
    }
}
