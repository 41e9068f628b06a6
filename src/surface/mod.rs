//! Surface module: The character-grid collaborator every draw call goes through.
//!
//! A [`Surface`] owns the grid. Renderables and panels only ever write to
//! it: they never read cells back. Windows are rectangular views onto the
//! grid with their own coordinate space and attribute state; passing `None`
//! as the target addresses the full-grid screen.
//!
//! This module contains:
//! - [`Surface`]: The draw-call interface
//! - [`Canvas`]: In-memory grid with read-back queries
//! - [`CrosstermSurface`]: A [`Canvas`] that flushes regions to a terminal

mod canvas;
mod cell;
mod term;

pub use canvas::Canvas;
pub use cell::{Cell, CellFlags};
pub use term::CrosstermSurface;

use crate::geometry::{IntRect, Vec2i};
use crate::style::Attr;
use std::io;

/// Handle to a window created on a [`Surface`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WindowId(pub u32);

/// Character-cell output on a fixed-size grid.
///
/// Writes that fall outside the target window or outside the grid are
/// dropped by the surface.
pub trait Surface {
    /// Grid size as `(columns, lines)`.
    fn grid_size(&self) -> Vec2i;

    /// Create a window covering `bounds` (grid coordinates).
    fn create_window(&mut self, bounds: IntRect) -> WindowId;

    /// Destroy a window. Unknown handles are ignored.
    fn destroy_window(&mut self, win: WindowId);

    /// Flush a window (or the screen) to the display.
    fn refresh(&mut self, win: Option<WindowId>) -> io::Result<()>;

    /// Write one character at `p`, relative to the target's origin, using
    /// the target's active attributes.
    fn write_char(&mut self, win: Option<WindowId>, p: Vec2i, ch: char);

    /// Turn attributes on for subsequent writes to the target.
    fn set_attr(&mut self, win: Option<WindowId>, attr: Attr);

    /// Turn attributes off for subsequent writes to the target.
    fn unset_attr(&mut self, win: Option<WindowId>, attr: Attr);
}
