//! Shape generation for 2D primitives
//!
//! Turns recorded draw commands into triangle lists a GPU backend can upload
//! directly. Text is left to the backend's font path.

use glam::Vec2;

use super::sprite::Sprite;
use super::vertex::Vertex;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::DrawCommand;
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = Vec2::new(r.x, r.y);
    let br = Vec2::new(r.right(), r.bottom());

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// One unit quad per covered sprite pixel
pub fn sprite_pixels(sprite: &Sprite, top_left: Vec2) -> Vec<Vertex> {
    let color = sprite.color().to_f32();
    let mut vertices = Vec::with_capacity(sprite.coverage() * 6);

    for y in 0..sprite.size() {
        for x in 0..sprite.size() {
            if sprite.covers(x, y) {
                let pixel = Rect::new(top_left.x + x as f32, top_left.y + y as f32, 1.0, 1.0);
                vertices.extend(rect(&pixel, color));
            }
        }
    }

    vertices
}

/// Tessellate a frame's draw commands in submission order
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(commands.len() * 6);

    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
                vertices.extend(rect(&screen, color.to_f32()));
            }
            DrawCommand::FillRect { rect: r, color } => {
                vertices.extend(rect(r, color.to_f32()));
            }
            DrawCommand::Sprite { top_left, sprite } => {
                vertices.extend(sprite_pixels(sprite, *top_left));
            }
            DrawCommand::Text { .. } => {}
        }
    }

    vertices
}
