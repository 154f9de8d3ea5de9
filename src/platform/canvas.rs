//! Rendering collaborator
//!
//! The renderer issues declarative draw calls against a `Canvas`. Two
//! canvases ship with the crate: `CommandBuffer` records the calls for a
//! GPU backend (see `renderer::shapes::tessellate`), `TextCanvas` rasterizes
//! them into a character grid for the headless binary.

use std::io::{self, Write};

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::Sprite;
use crate::sim::{Rect, Rgba};

/// Draw target
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    /// Blit a pre-rendered sprite with its top-left corner at `top_left`
    fn draw_sprite(&mut self, sprite: &Sprite, top_left: Vec2);
    /// Overlay text starting at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect { rect: Rect, color: Rgba },
    Sprite { top_left: Vec2, sprite: Sprite },
    Text { text: String, pos: Vec2 },
}

/// Canvas that records every call in order
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for CommandBuffer {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_sprite(&mut self, sprite: &Sprite, top_left: Vec2) {
        self.commands.push(DrawCommand::Sprite {
            top_left,
            sprite: sprite.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }
}

/// Pixel size of one character cell
const CELL_WIDTH: f32 = 8.0;
const CELL_HEIGHT: f32 = 16.0;

/// Canvas that rasterizes into a grid of characters
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCanvas {
    pub fn new() -> Self {
        let cols = (SCREEN_WIDTH / CELL_WIDTH) as usize;
        let rows = (SCREEN_HEIGHT / CELL_HEIGHT) as usize;
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    /// Cell coordinates for a pixel position, if on screen
    fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let col = (pos.x / CELL_WIDTH) as usize;
        let row = (pos.y / CELL_HEIGHT) as usize;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    /// Text of one row, trailing blanks included
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols].iter().collect()
    }

    /// Write the grid to a sink, one line per row
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in 0..self.rows {
            writeln!(out, "{}", self.row_text(row).trim_end())?;
        }
        writeln!(out, "{}", "-".repeat(self.cols))?;
        out.flush()
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self, _color: Rgba) {
        self.cells.fill(' ');
    }

    fn fill_rect(&mut self, rect: Rect, _color: Rgba) {
        // Cells whose center lies inside the rectangle
        for row in 0..self.rows {
            let cy = (row as f32 + 0.5) * CELL_HEIGHT;
            if cy < rect.y || cy >= rect.bottom() {
                continue;
            }
            for col in 0..self.cols {
                let cx = (col as f32 + 0.5) * CELL_WIDTH;
                if cx >= rect.x && cx < rect.right() {
                    self.put(col, row, '#');
                }
            }
        }
    }

    fn draw_sprite(&mut self, sprite: &Sprite, top_left: Vec2) {
        // Cells whose center samples a covered sprite pixel
        let size = sprite.size() as f32;
        for row in 0..self.rows {
            let cy = (row as f32 + 0.5) * CELL_HEIGHT - top_left.y;
            if cy < 0.0 || cy >= size {
                continue;
            }
            for col in 0..self.cols {
                let cx = (col as f32 + 0.5) * CELL_WIDTH - top_left.x;
                if cx >= 0.0 && cx < size && sprite.covers(cx as u32, cy as u32) {
                    self.put(col, row, 'o');
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        if let Some((col, row)) = self.cell_at(pos) {
            for (i, ch) in text.chars().enumerate() {
                self.put(col + i, row, ch);
            }
        }
    }
}
