//! Demo mode - the game plays itself
//!
//! Steers the paddle under the ball and confirms whenever a round ends.

use super::input::HeldKeys;
use super::state::{GameState, GameStatus};
use crate::consts::PADDLE_STEP;

/// Keys the autopilot would hold this tick
pub fn autopilot_keys(state: &GameState) -> HeldKeys {
    if state.status != GameStatus::Playing {
        return HeldKeys {
            confirm: true,
            ..Default::default()
        };
    }

    // Dead zone of one step keeps the paddle from jittering around the ball
    let delta = state.ball.pos.x - state.paddle.center_x();
    HeldKeys {
        left: delta < -PADDLE_STEP,
        right: delta > PADDLE_STEP,
        confirm: false,
    }
}
