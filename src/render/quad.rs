//! Quads: Filled rectangles.

use super::{with_attr, Draw, Placement};
use crate::geometry::{IntRect, Vec2i};
use crate::style::Attr;
use crate::surface::{Surface, WindowId};

/// A rectangle filled with one character.
///
/// Covers `width x height` cells starting at the rectangle's origin; a
/// rectangle with a zero extent draws nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomQuad {
    symbol: char,
    bounds: IntRect,
    placement: Placement,
}

impl CustomQuad {
    /// Create a quad filled with `symbol`.
    pub const fn new(symbol: char, bounds: IntRect) -> Self {
        Self {
            symbol,
            bounds,
            placement: Placement::at(Vec2i::new(bounds.x, bounds.y)),
        }
    }

    /// The fill character.
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The filled rectangle.
    pub const fn bounds(&self) -> IntRect {
        self.bounds
    }

    /// Center cell of the rectangle.
    pub fn center(&self) -> Vec2i {
        self.bounds.center()
    }
}

impl Draw for CustomQuad {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        if self.bounds.is_empty() {
            return;
        }
        let IntRect { x, y, width, height } = self.bounds;
        with_attr(surface, win, self.placement.attr, |s| {
            for col in x..x + width {
                for row in y..y + height {
                    s.write_char(win, Vec2i::new(col, row), self.symbol);
                }
            }
        });
    }
}

/// A solid block: spaces drawn in reverse video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad(CustomQuad);

impl Quad {
    /// Create a solid block over `bounds`.
    pub const fn new(bounds: IntRect) -> Self {
        Self(CustomQuad::new(' ', bounds))
    }

    /// The filled rectangle.
    pub const fn bounds(&self) -> IntRect {
        self.0.bounds()
    }

    /// Center cell of the rectangle.
    pub fn center(&self) -> Vec2i {
        self.0.center()
    }
}

impl Draw for Quad {
    fn placement(&self) -> &Placement {
        self.0.placement()
    }

    fn placement_mut(&mut self) -> &mut Placement {
        self.0.placement_mut()
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        with_attr(surface, win, Attr::REVERSE, |s| self.0.draw(s, win));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::surface::Canvas;

    #[test]
    fn test_custom_quad_fill() {
        let mut canvas = Canvas::new(10, 6);
        CustomQuad::new('.', IntRect::new(2, 1, 3, 2)).draw(&mut canvas, None);

        assert_eq!(canvas.row_text(0), "          ");
        assert_eq!(canvas.row_text(1), "  ...     ");
        assert_eq!(canvas.row_text(2), "  ...     ");
        assert_eq!(canvas.row_text(3), "          ");
        assert_eq!(canvas.attr_at(Vec2i::new(2, 1)), Some(Attr::NORMAL));
    }

    #[test]
    fn test_quad_is_reverse_block() {
        let mut canvas = Canvas::new(10, 6);
        let mut quad = Quad::new(IntRect::new(0, 0, 4, 3));
        quad.set_attributes(Attr::from(Color::Blue));
        quad.draw(&mut canvas, None);

        let expected = Attr::REVERSE | Attr::from(Color::Blue);
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(canvas.attr_at(Vec2i::new(x, y)), Some(expected));
            }
        }
        assert_eq!(canvas.attr_at(Vec2i::new(4, 0)), Some(Attr::NORMAL));
        assert_eq!(canvas.active_attr(None), Some(Attr::NORMAL));
    }

    #[test]
    fn test_zero_area_quad_draws_nothing() {
        let mut canvas = Canvas::new(5, 5);
        CustomQuad::new('#', IntRect::new(1, 1, 0, 3)).draw(&mut canvas, None);
        assert!((0..5).all(|y| !canvas.row_text(y).contains('#')));
    }

    #[test]
    fn test_empty_quad_leaves_attr_state_untouched() {
        let mut canvas = Canvas::new(5, 5);
        let mut quad = CustomQuad::new('#', IntRect::new(1, 1, 3, -2));
        quad.set_attributes(Attr::BOLD);
        quad.draw(&mut canvas, None);

        assert!((0..5).all(|y| !canvas.row_text(y).contains('#')));
        assert_eq!(canvas.attr_at(Vec2i::new(1, 1)), Some(Attr::NORMAL));
    }

    #[test]
    fn test_quad_center() {
        let quad = Quad::new(IntRect::new(10, 1, 30, 9));
        assert_eq!(quad.center(), Vec2i::new(25, 5));
        assert_eq!(quad.position(), Vec2i::new(10, 1));
    }
}
