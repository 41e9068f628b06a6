//! Borders: Rectangle perimeters built from four edges and four corners.

use super::glyph::Glyph;
use super::line::Line;
use super::{with_attr, Draw, Placement};
use crate::geometry::{IntRect, Vec2i};
use crate::style::{acs, Attr};
use crate::surface::{Surface, WindowId};

/// The eight characters of a border.
///
/// As an array they are ordered top, bottom, left, right edge, then the
/// upper-left, upper-right, lower-left and lower-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderGlyphs {
    /// Top edge
    pub top: char,
    /// Bottom edge
    pub bottom: char,
    /// Left edge
    pub left: char,
    /// Right edge
    pub right: char,
    /// Upper-left corner
    pub upper_left: char,
    /// Upper-right corner
    pub upper_right: char,
    /// Lower-left corner
    pub lower_left: char,
    /// Lower-right corner
    pub lower_right: char,
}

impl BorderGlyphs {
    /// The line-drawing set.
    pub const LINE_DRAWING: Self = Self::from_array([
        acs::HLINE,
        acs::HLINE,
        acs::VLINE,
        acs::VLINE,
        acs::ULCORNER,
        acs::URCORNER,
        acs::LLCORNER,
        acs::LRCORNER,
    ]);

    /// Build from the eight-character ordering.
    pub const fn from_array(glyphs: [char; 8]) -> Self {
        let [top, bottom, left, right, upper_left, upper_right, lower_left, lower_right] = glyphs;
        Self {
            top,
            bottom,
            left,
            right,
            upper_left,
            upper_right,
            lower_left,
            lower_right,
        }
    }

    /// The eight-character ordering.
    pub const fn to_array(self) -> [char; 8] {
        [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.upper_left,
            self.upper_right,
            self.lower_left,
            self.lower_right,
        ]
    }
}

impl From<[char; 8]> for BorderGlyphs {
    fn from(glyphs: [char; 8]) -> Self {
        Self::from_array(glyphs)
    }
}

/// A border drawn with caller-chosen characters.
///
/// Edges run corner to corner, so a border over `(x, y, w, h)` touches
/// columns `x..=x + w` and rows `y..=y + h`. Corners are drawn last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBorder {
    glyphs: BorderGlyphs,
    bounds: IntRect,
    edges: [Line; 4],
    corners: [Glyph; 4],
    placement: Placement,
}

impl CustomBorder {
    /// Create a border around `bounds`.
    pub fn new(glyphs: BorderGlyphs, bounds: IntRect) -> Self {
        let (edges, corners) = pieces(glyphs, bounds);
        Self {
            glyphs,
            bounds,
            edges,
            corners,
            placement: Placement::at(bounds.origin()),
        }
    }

    /// The border characters.
    pub const fn glyphs(&self) -> BorderGlyphs {
        self.glyphs
    }

    /// The framed rectangle.
    pub const fn bounds(&self) -> IntRect {
        self.bounds
    }

    /// Center cell of the framed rectangle.
    pub fn center(&self) -> Vec2i {
        self.bounds.center()
    }

    /// Edge lines: top, bottom, left, right.
    pub const fn edges(&self) -> &[Line; 4] {
        &self.edges
    }

    /// Corner glyphs: upper-left, upper-right, lower-left, lower-right.
    pub const fn corners(&self) -> &[Glyph; 4] {
        &self.corners
    }

    /// Move the border to new bounds, rebuilding every piece.
    pub fn set_dimensions(&mut self, bounds: IntRect) {
        self.bounds = bounds;
        (self.edges, self.corners) = pieces(self.glyphs, bounds);
    }
}

fn pieces(g: BorderGlyphs, r: IntRect) -> ([Line; 4], [Glyph; 4]) {
    let edges = [
        Line::new(g.top, r.ul(), r.ur()),
        Line::new(g.bottom, r.ll(), r.lr()),
        Line::new(g.left, r.ul(), r.ll()),
        Line::new(g.right, r.ur(), r.lr()),
    ];
    let corners = [
        Glyph::new(g.upper_left, r.ul()),
        Glyph::new(g.upper_right, r.ur()),
        Glyph::new(g.lower_left, r.ll()),
        Glyph::new(g.lower_right, r.lr()),
    ];
    (edges, corners)
}

impl Draw for CustomBorder {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        with_attr(surface, win, self.placement.attr, |s| {
            for edge in &self.edges {
                edge.draw(s, win);
            }
            for corner in &self.corners {
                corner.draw(s, win);
            }
        });
    }
}

/// A border in the surface's line-drawing set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border(CustomBorder);

impl Border {
    /// Create a line-drawing border around `bounds`.
    pub fn new(bounds: IntRect) -> Self {
        Self(CustomBorder::new(BorderGlyphs::LINE_DRAWING, bounds))
    }

    /// The border characters.
    pub const fn glyphs(&self) -> BorderGlyphs {
        self.0.glyphs()
    }

    /// The framed rectangle.
    pub const fn bounds(&self) -> IntRect {
        self.0.bounds()
    }

    /// Center cell of the framed rectangle.
    pub fn center(&self) -> Vec2i {
        self.0.center()
    }

    /// Move the border to new bounds.
    pub fn set_dimensions(&mut self, bounds: IntRect) {
        self.0.set_dimensions(bounds);
    }
}

impl Draw for Border {
    fn placement(&self) -> &Placement {
        self.0.placement()
    }

    fn placement_mut(&mut self) -> &mut Placement {
        self.0.placement_mut()
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        with_attr(surface, win, Attr::ALTERNATE, |s| self.0.draw(s, win));
    }
}
