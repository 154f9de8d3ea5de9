//! Per-frame draw pass

use glam::Vec2;

use crate::consts::*;
use crate::platform::Canvas;
use crate::sim::{GameState, Rgba, brick_rect};

use super::Sprite;

/// Top-left position of a centered overlay message
pub fn message_position(message: &str) -> Vec2 {
    let width = message.chars().count() as f32 * GLYPH_WIDTH;
    Vec2::new(((SCREEN_WIDTH - width) / 2.0).floor(), SCREEN_HEIGHT / 2.0)
}

/// Draw one frame from a read-only state snapshot.
///
/// Order: background, bricks, paddle, ball, HUD, status message.
pub fn draw_frame(state: &GameState, ball_sprite: &Sprite, canvas: &mut dyn Canvas) {
    canvas.clear(Rgba::BACKGROUND);

    for (row, col, brick) in state.iter_visible_bricks() {
        canvas.fill_rect(brick_rect(row, col), brick.color);
    }

    canvas.fill_rect(state.paddle.rect(), Rgba::WHITE);

    let ball = &state.ball;
    canvas.draw_sprite(ball_sprite, ball.pos - Vec2::splat(ball.radius));

    canvas.draw_text(&state.hud_text(), Vec2::ZERO);

    if let Some(message) = state.status.message() {
        canvas.draw_text(message, message_position(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{CommandBuffer, DrawCommand};
    use crate::sim::GameStatus;

    fn render(state: &GameState) -> Vec<DrawCommand> {
        let sprite = Sprite::disc(BALL_RADIUS as u32, Rgba::WHITE);
        let mut buffer = CommandBuffer::new();
        draw_frame(state, &sprite, &mut buffer);
        buffer.commands
    }

    #[test]
    fn test_playing_frame() {
        let state = GameState::new(10);
        let commands = render(&state);

        // clear + 50 bricks + paddle + ball + hud
        assert_eq!(commands.len(), 54);
        assert_eq!(commands[0], DrawCommand::Clear(Rgba::BACKGROUND));
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: brick_rect(0, 0),
                color: state.bricks[0][0].color,
            }
        );
        assert_eq!(
            commands[51],
            DrawCommand::FillRect {
                rect: state.paddle.rect(),
                color: Rgba::WHITE,
            }
        );
        assert_eq!(
            commands[52],
            DrawCommand::Sprite {
                top_left: Vec2::new(312.0, 232.0),
                sprite: Sprite::disc(8, Rgba::WHITE),
            }
        );
        assert_eq!(
            commands[53],
            DrawCommand::Text {
                text: "Score: 0  Lives: 3  Level: 1".to_string(),
                pos: Vec2::ZERO,
            }
        );
    }

    #[test]
    fn test_hidden_bricks_not_drawn() {
        let mut state = GameState::new(10);
        state.bricks[2][2].visible = false;
        state.bricks[3][7].visible = false;
        let rects = render(&state)
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(rects, 48 + 1);
    }

    #[test]
    fn test_game_over_message_centered() {
        let mut state = GameState::new(10);
        state.status = GameStatus::GameOver;
        let commands = render(&state);

        let last = commands.last().cloned();
        let message = "GAME OVER - Press SPACE to Restart";
        assert_eq!(
            last,
            Some(DrawCommand::Text {
                text: message.to_string(),
                pos: Vec2::new(201.0, 240.0),
            })
        );
    }

    #[test]
    fn test_win_message() {
        let mut state = GameState::new(10);
        state.status = GameStatus::Win;
        let commands = render(&state);
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, .. } if text == "YOU WIN! - Press SPACE for Next Level"
        )));
    }
}
