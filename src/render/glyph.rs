//! Glyph: One character at one point.

use super::{with_attr, Draw, Placement};
use crate::geometry::Vec2i;
use crate::surface::{Surface, WindowId};

/// A single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
    placement: Placement,
}

impl Glyph {
    /// Create a glyph at `pos`.
    pub const fn new(symbol: char, pos: Vec2i) -> Self {
        Self {
            symbol,
            placement: Placement::at(pos),
        }
    }

    /// The character drawn.
    pub const fn symbol(&self) -> char {
        self.symbol
    }
}

impl Draw for Glyph {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        let Placement { pos, attr } = self.placement;
        with_attr(surface, win, attr, |s| s.write_char(win, pos, self.symbol));
    }
}
