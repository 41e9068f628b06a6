//! Geometry module: Grid points and axis-aligned rectangles.
//!
//! All coordinates are in character cells, x (column) before y (row),
//! with the origin in the upper-left corner of the grid.

mod rect;
mod vec2;

pub use rect::{FloatRect, IntRect, Rect};
pub use vec2::{Vec2, Vec2f, Vec2i};
