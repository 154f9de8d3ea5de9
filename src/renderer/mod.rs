//! Rendering module
//!
//! Reads a `GameState` snapshot and issues draw calls against a `Canvas`.
//! Nothing here mutates simulation state.

pub mod frame;
pub mod shapes;
pub mod sprite;
pub mod vertex;

pub use frame::{draw_frame, message_position};
pub use shapes::tessellate;
pub use sprite::Sprite;
pub use vertex::Vertex;
