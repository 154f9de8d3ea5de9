//! Collision detection and response for axis-aligned geometry
//!
//! Everything in the play area is a rectangle or a ball treated as its
//! bounding box. Response is simple reflection: the offending velocity
//! component changes sign.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding box of a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }
}

/// Which walls the ball bounced off this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallHits {
    pub fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.top as u32
    }
}

/// Bounce the ball off the left, right and top walls.
///
/// The bottom edge is open: crossing it is a miss, not a bounce.
pub fn bounce_off_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32) -> WallHits {
    let mut hits = WallHits::default();

    if pos.x - radius < 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
        hits.left = true;
    }
    if pos.x + radius > SCREEN_WIDTH {
        pos.x = SCREEN_WIDTH - radius;
        vel.x = -vel.x;
        hits.right = true;
    }
    if pos.y - radius < 0.0 {
        pos.y = radius;
        vel.y = -vel.y;
        hits.top = true;
    }

    hits
}

/// Check whether the ball has reached the paddle band.
///
/// The ball's bottom edge must be below the paddle's top and its center must
/// lie strictly inside the paddle's horizontal span.
pub fn ball_hits_paddle(ball_pos: Vec2, radius: f32, paddle: &Rect) -> bool {
    ball_pos.y + radius > paddle.y && ball_pos.x > paddle.x && ball_pos.x < paddle.right()
}

/// Paddle rebound: sit the ball on top of the paddle, reflect vertically and
/// add English proportional to how far from center the ball struck.
pub fn paddle_rebound(pos: &mut Vec2, vel: &mut Vec2, radius: f32, paddle: &Rect) {
    pos.y = paddle.y - radius;
    vel.y = -vel.y;

    let offset = pos.x - paddle.center().x;
    vel.x += offset * PADDLE_ENGLISH;
}

/// Ball has fully left the play area through the bottom edge
#[inline]
pub fn ball_missed(ball_pos: Vec2, radius: f32) -> bool {
    ball_pos.y - radius > SCREEN_HEIGHT
}
