//! Game state and core simulation types
//!
//! Everything the update step mutates and the renderer reads lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Rect;
use crate::consts::*;

/// Coarse game mode gating which update logic runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Active gameplay
    Playing,
    /// Out of lives; waiting for confirm to restart from level 1
    GameOver,
    /// Grid cleared; waiting for confirm to advance a level
    Win,
}

impl GameStatus {
    /// Overlay text shown while waiting for confirm
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameStatus::Playing => None,
            GameStatus::GameOver => Some("GAME OVER - Press SPACE to Restart"),
            GameStatus::Win => Some("YOU WIN! - Press SPACE for Next Level"),
        }
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);
    pub const BACKGROUND: Rgba = Rgba::opaque(0x10, 0x10, 0x10);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Normalized float channels for vertex data
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// The ball
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at screen center heading up and to the right at the level's speed
    pub fn spawn(level: u32) -> Self {
        Self {
            pos: screen_center(),
            vel: ball_velocity_for_level(level),
            radius: BALL_RADIUS,
        }
    }

    /// Place the ball back at screen center with a fresh launch velocity
    pub fn respawn(&mut self, level: u32) {
        self.pos = screen_center();
        self.vel = ball_velocity_for_level(level);
    }

    /// Axis-aligned bounding box used for brick tests
    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
}

impl Paddle {
    /// Centered paddle of the given width
    pub fn centered(width: f32) -> Self {
        let mut paddle = Self { x: 0.0, width };
        paddle.recenter();
        paddle
    }

    pub fn recenter(&mut self) {
        self.x = SCREEN_WIDTH / 2.0 - self.width / 2.0;
    }

    /// Move horizontally, keeping the paddle fully on screen
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, SCREEN_WIDTH - self.width);
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, self.width, PADDLE_HEIGHT)
    }
}

/// A single brick cell. Position is derived from its grid index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Brick {
    pub visible: bool,
    pub color: Rgba,
}

/// Fixed-size brick grid, indexed `[row][col]`
pub type BrickGrid = [[Brick; BRICK_COLS]; BRICK_ROWS];

/// Screen rectangle of the brick at (row, col)
pub fn brick_rect(row: usize, col: usize) -> Rect {
    Rect::new(
        col as f32 * (BRICK_WIDTH + BRICK_GAP) + BRICK_GAP,
        row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_GAP,
        BRICK_WIDTH,
        BRICK_HEIGHT,
    )
}

/// Speed multiplier for a level: +20% per level above the first
pub fn level_speed_factor(level: u32) -> f32 {
    1.0 + level.saturating_sub(1) as f32 * LEVEL_SPEED_STEP
}

/// Launch velocity for a level (up and to the right)
pub fn ball_velocity_for_level(level: u32) -> Vec2 {
    Vec2::new(BALL_BASE_SPEED, -BALL_BASE_SPEED) * level_speed_factor(level)
}

/// Paddle width for a level, re-derived from the initial width.
///
/// Every even level shrinks the paddle, never below the minimum.
pub fn paddle_width_for_level(level: u32) -> f32 {
    (2..=level)
        .step_by(2)
        .fold(INITIAL_PADDLE_WIDTH, |width, _| {
            (width - PADDLE_SHRINK).max(MIN_PADDLE_WIDTH)
        })
}

#[inline]
fn screen_center() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    pub status: GameStatus,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Brick layout and color source
    #[serde(skip)]
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    /// Create a new game drawing brick layouts from the given RNG
    pub fn with_rng(rng: Pcg32) -> Self {
        let mut state = Self {
            ball: Ball::spawn(1),
            paddle: Paddle::centered(INITIAL_PADDLE_WIDTH),
            bricks: [[Brick::default(); BRICK_COLS]; BRICK_ROWS],
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            status: GameStatus::Playing,
            time_ticks: 0,
            rng,
        };
        state.reset_level();
        state
    }

    /// Start (or restart) the current level.
    ///
    /// Regenerates the brick grid, respawns the ball, re-derives the paddle
    /// width and sets status to Playing. Score, lives and level are kept.
    pub fn reset_level(&mut self) {
        let all_visible = self.level == 1;
        for row in self.bricks.iter_mut() {
            for brick in row.iter_mut() {
                let roll: f64 = self.rng.random();
                brick.visible = roll > BRICK_HIDDEN_CHANCE || all_visible;
                brick.color = Rgba::opaque(self.rng.random(), self.rng.random(), self.rng.random());
            }
        }

        self.ball.respawn(self.level);
        self.paddle.width = paddle_width_for_level(self.level);
        self.paddle.recenter();
        self.status = GameStatus::Playing;

        log::info!(
            "Level {}: {} bricks, paddle width {}",
            self.level,
            self.visible_bricks(),
            self.paddle.width
        );
    }

    /// Advance to the next level after a win
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.reset_level();
    }

    /// Start over from level 1 after game over
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.reset_level();
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().flatten().filter(|b| b.visible).count()
    }

    pub fn all_bricks_cleared(&self) -> bool {
        self.bricks.iter().flatten().all(|b| !b.visible)
    }

    /// Visible bricks with their grid indices, in row-major order
    pub fn iter_visible_bricks(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.bricks.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, b)| b.visible)
                .map(move |(col, b)| (row, col, b))
        })
    }

    /// HUD line
    pub fn hud_text(&self) -> String {
        format!("Score: {}  Lives: {}  Level: {}", self.score, self.lives, self.level)
    }
}
