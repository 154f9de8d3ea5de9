//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_keys;
pub use collision::{Rect, WallHits, ball_hits_paddle, ball_missed, bounce_off_walls};
pub use input::{ConfirmEdge, ConfirmMode, HeldKeys};
pub use state::{
    Ball, Brick, BrickGrid, GameState, GameStatus, Paddle, Rgba, ball_velocity_for_level,
    brick_rect, level_speed_factor, paddle_width_for_level,
};
pub use tick::{ConfirmAction, TickEvents, TickInput, tick};
