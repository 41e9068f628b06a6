//! Panel: A titled, bordered sub-window bound to a region of the grid.
//!
//! A panel owns a surface window one cell wider and taller than its bounds,
//! so the border (which runs corner to corner over `0..=w` and `0..=h`)
//! fits inside it. Everything the panel draws is in local coordinates.

use crate::geometry::{IntRect, Vec2i};
use crate::render::{Border, Draw, Text};
use crate::surface::{Surface, WindowId};
use std::io;

/// A bordered window with a centered title on its top edge.
///
/// The backing window lives on the surface, not in the panel. Dropping a
/// panel does not release it: call [`Panel::close`] when done, or the
/// surface keeps the window until the surface itself goes away.
#[derive(Debug, PartialEq, Eq)]
pub struct Panel {
    /// Surface window backing the panel.
    window: WindowId,
    /// Title, centered on the top edge.
    title: Text,
    /// Frame around the local bounds.
    border: Border,
    /// Bounds on the grid.
    global: IntRect,
    /// Bounds in the panel's own coordinates. Origin is always `(0, 0)`.
    local: IntRect,
}

impl Panel {
    /// Create a panel over `bounds`, allocating its window on `surface`.
    pub fn new(surface: &mut dyn Surface, bounds: IntRect, title: impl Into<String>) -> Self {
        let local = local_bounds(bounds);
        Self {
            window: surface.create_window(window_bounds(bounds)),
            title: Text::new(title, title_anchor(local)).with_centered(true),
            border: Border::new(local),
            global: bounds,
            local,
        }
    }

    /// Draw the border, then the title, then flush the window.
    pub fn draw(&self, surface: &mut dyn Surface) -> io::Result<()> {
        self.border.draw(surface, Some(self.window));
        self.title.draw(surface, Some(self.window));
        surface.refresh(Some(self.window))
    }

    /// Move the panel to new bounds.
    ///
    /// The title text and border glyphs are kept; the title and border are
    /// repositioned and the window is recreated at the new location.
    pub fn resize(&mut self, surface: &mut dyn Surface, bounds: IntRect) {
        log::debug!("resizing panel {:?}: {:?} -> {bounds:?}", self.window, self.global);
        self.global = bounds;
        self.local = local_bounds(bounds);
        self.title.set_position(title_anchor(self.local));
        self.border.set_dimensions(self.local);

        surface.destroy_window(self.window);
        self.window = surface.create_window(window_bounds(bounds));
    }

    /// Replace the title text. Geometry is unchanged.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title.set_text(title);
    }

    /// The title renderable.
    pub const fn title(&self) -> &Text {
        &self.title
    }

    /// The border renderable.
    pub const fn border(&self) -> &Border {
        &self.border
    }

    /// The backing window.
    pub const fn window(&self) -> WindowId {
        self.window
    }

    /// Bounds on the grid.
    pub const fn bounds(&self) -> IntRect {
        self.global
    }

    /// Bounds in local coordinates.
    pub const fn local_bounds(&self) -> IntRect {
        self.local
    }

    /// Release the backing window.
    pub fn close(self, surface: &mut dyn Surface) {
        log::trace!("closing panel {:?}", self.window);
        surface.destroy_window(self.window);
    }
}

const fn local_bounds(bounds: IntRect) -> IntRect {
    IntRect::new(0, 0, bounds.width, bounds.height)
}

const fn window_bounds(bounds: IntRect) -> IntRect {
    IntRect::new(bounds.x, bounds.y, bounds.width + 1, bounds.height + 1)
}

const fn title_anchor(local: IntRect) -> Vec2i {
    Vec2i::new(local.width / 2, 0)
}
