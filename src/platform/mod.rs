//! Platform abstraction layer
//!
//! The simulation only talks to the outside world through two collaborators:
//! - `InputSource`: "is key K held right now"
//! - `Canvas`: declarative draw commands

pub mod canvas;
pub mod input;

pub use canvas::{Canvas, CommandBuffer, DrawCommand, TextCanvas};
pub use input::{InputSource, Key, poll_keys};
