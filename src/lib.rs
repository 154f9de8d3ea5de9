//! Brick Breaker - A classic ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Draw command generation and tessellation
//! - `platform`: Input and canvas collaborator interfaces
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `settings`: Runtime configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, SettingsError};
pub use game::Game;
pub use settings::{ConfirmMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis launch speed at level 1 (pixels per tick)
    pub const BALL_BASE_SPEED: f32 = 3.0;
    /// Fractional speed gain per level above the first
    pub const LEVEL_SPEED_STEP: f32 = 0.2;

    /// Paddle defaults - sits at the bottom of the play area
    pub const INITIAL_PADDLE_WIDTH: f32 = 96.0;
    pub const PADDLE_HEIGHT: f32 = 16.0;
    pub const PADDLE_Y: f32 = SCREEN_HEIGHT - PADDLE_HEIGHT;
    /// Horizontal paddle movement per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 5.0;
    /// Width lost on every even level
    pub const PADDLE_SHRINK: f32 = 8.0;
    /// Paddle never gets narrower than three ball diameters
    pub const MIN_PADDLE_WIDTH: f32 = BALL_RADIUS * 6.0;
    /// Horizontal velocity added per pixel of paddle hit offset
    pub const PADDLE_ENGLISH: f32 = 0.1;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 56.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_GAP: f32 = 4.0;
    /// Probability threshold above which a brick is visible on level 2+
    pub const BRICK_HIDDEN_CHANCE: f64 = 0.2;
    pub const BRICK_SCORE: u32 = 10;

    pub const STARTING_LIVES: u32 = 3;

    /// Width of one HUD glyph, used to center overlay text
    pub const GLYPH_WIDTH: f32 = 7.0;
}
