//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame.

use super::collision::{ball_hits_paddle, ball_missed, bounce_off_walls, paddle_rebound};
use super::state::{GameState, GameStatus, brick_rect};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
    /// Confirm action (already edge-resolved by the caller)
    pub confirm: bool,
}

/// What a confirm input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    NextLevel,
    Restart,
}

/// Observable results of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounces: u32,
    pub paddle_hit: bool,
    pub bricks_destroyed: u32,
    pub points: u32,
    pub life_lost: bool,
    pub game_over: bool,
    pub level_cleared: bool,
    pub confirmed: Option<ConfirmAction>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    // Round over: only confirm does anything
    match state.status {
        GameStatus::Win | GameStatus::GameOver => {
            if input.confirm {
                let action = if state.status == GameStatus::Win {
                    state.advance_level();
                    ConfirmAction::NextLevel
                } else {
                    state.restart();
                    ConfirmAction::Restart
                };
                events.confirmed = Some(action);
            }
            return events;
        }
        GameStatus::Playing => {}
    }

    state.time_ticks += 1;

    // Paddle control
    if input.left {
        state.paddle.shift(-PADDLE_STEP);
    }
    if input.right {
        state.paddle.shift(PADDLE_STEP);
    }

    // Integrate
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    events.wall_bounces = bounce_off_walls(&mut ball.pos, &mut ball.vel, ball.radius).count();

    let paddle_rect = state.paddle.rect();
    if ball_hits_paddle(ball.pos, ball.radius, &paddle_rect) {
        paddle_rebound(&mut ball.pos, &mut ball.vel, ball.radius, &paddle_rect);
        events.paddle_hit = true;
    }

    // Missed the paddle
    if ball_missed(ball.pos, ball.radius) {
        state.lives = state.lives.saturating_sub(1);
        events.life_lost = true;
        if state.lives == 0 {
            state.status = GameStatus::GameOver;
            events.game_over = true;
        } else {
            // Bricks survive a lost life
            state.ball.respawn(state.level);
            state.paddle.recenter();
        }
        log::debug!("Life lost at tick {}, {} remaining", state.time_ticks, state.lives);
    }

    // Bricks: every overlapping brick registers, no early exit
    let ball_box = state.ball.bounds();
    for (row, cells) in state.bricks.iter_mut().enumerate() {
        for (col, brick) in cells.iter_mut().enumerate() {
            if !brick.visible || !ball_box.overlaps(&brick_rect(row, col)) {
                continue;
            }
            brick.visible = false;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += BRICK_SCORE;
            events.bricks_destroyed += 1;
            events.points += BRICK_SCORE;
        }
    }
    if events.bricks_destroyed > 0 {
        log::debug!(
            "Tick {}: {} brick(s) destroyed, score {}",
            state.time_ticks,
            events.bricks_destroyed,
            state.score
        );
    }

    // Cleared grid wins even on the tick the last life was lost
    if state.all_bricks_cleared() {
        state.status = GameStatus::Win;
        events.level_cleared = true;
    }

    events
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::state::{level_speed_factor, paddle_width_for_level};
    use proptest::prelude::*;

    fn tick_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, confirm)| {
            TickInput {
                left,
                right,
                confirm,
            }
        })
    }

    proptest! {
        #[test]
        fn paddle_stays_on_screen(
            seed in any::<u64>(),
            inputs in prop::collection::vec(tick_input(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            for input in &inputs {
                tick(&mut state, input);
                prop_assert!(state.paddle.x >= 0.0);
                prop_assert!(state.paddle.x <= SCREEN_WIDTH - state.paddle.width);
            }
        }

        #[test]
        fn ball_stays_inside_side_and_top_walls(
            seed in any::<u64>(),
            inputs in prop::collection::vec(tick_input(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            for input in &inputs {
                tick(&mut state, input);
                let ball = &state.ball;
                prop_assert!(ball.pos.x - ball.radius >= 0.0);
                prop_assert!(ball.pos.x + ball.radius <= SCREEN_WIDTH);
                prop_assert!(ball.pos.y - ball.radius >= 0.0);
            }
        }

        #[test]
        fn score_never_decreases_while_playing(
            seed in any::<u64>(),
            inputs in prop::collection::vec(tick_input(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            for input in &inputs {
                let before = state.score;
                let was_playing = state.status == GameStatus::Playing;
                tick(&mut state, input);
                if was_playing {
                    prop_assert!(state.score >= before);
                }
            }
        }

        #[test]
        fn paddle_width_non_increasing(level in 1u32..200) {
            let here = paddle_width_for_level(level);
            prop_assert!(paddle_width_for_level(level + 1) <= here);
            prop_assert!(here >= MIN_PADDLE_WIDTH);
        }

        #[test]
        fn level_start_speed_matches_formula(seed in any::<u64>(), level in 1u32..30) {
            let mut state = GameState::new(seed);
            state.level = level;
            state.reset_level();
            let base = (2.0 * BALL_BASE_SPEED * BALL_BASE_SPEED).sqrt();
            let expected = base * (1.0 + (level - 1) as f32 * 0.2);
            prop_assert!((state.ball.vel.length() - expected).abs() < 1e-3);
            prop_assert!((level_speed_factor(level) - expected / base).abs() < 1e-5);
        }
    }
}
