//! Render module: Drawable shape primitives.
//!
//! Every primitive carries a [`Placement`] (position and attribute mask) and
//! implements [`Draw`]. Geometry is fixed at construction; only the
//! attributes, and the informational position, change afterwards.
//!
//! [`Renderable`] is the closed set of primitives, for callers that keep a
//! heterogeneous collection of owned shapes.
//!
//! # Example
//!
//! ```rust
//! use vexes::render::{Draw, HLine, Renderable, Text};
//! use vexes::{Canvas, Vec2i};
//!
//! let mut canvas = Canvas::new(40, 10);
//! let scene: Vec<Renderable> = vec![
//!     HLine::new(Vec2i::new(3, 3), Vec2i::new(9, 3)).into(),
//!     Text::new("We have HLines", Vec2i::new(11, 3)).into(),
//! ];
//! for obj in &scene {
//!     obj.draw(&mut canvas, None);
//! }
//! assert_eq!(canvas.char_at(Vec2i::new(11, 3)), Some('W'));
//! ```

mod border;
mod glyph;
mod line;
mod quad;
pub mod raster;
mod text;

pub use border::{Border, BorderGlyphs, CustomBorder};
pub use glyph::Glyph;
pub use line::{HLine, Line, VLine};
pub use quad::{CustomQuad, Quad};
pub use text::Text;

use crate::geometry::Vec2i;
use crate::style::Attr;
use crate::surface::{Surface, WindowId};

/// Position and attribute mask shared by every primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Anchor point.
    pub pos: Vec2i,
    /// Attributes applied while drawing.
    pub attr: Attr,
}

impl Placement {
    /// A placement at `pos` with no attributes.
    pub const fn at(pos: Vec2i) -> Self {
        Self {
            pos,
            attr: Attr::NORMAL,
        }
    }
}

/// Something that can be drawn onto a [`Surface`].
pub trait Draw {
    /// Shared placement data.
    fn placement(&self) -> &Placement;

    /// Shared placement data, mutably.
    fn placement_mut(&mut self) -> &mut Placement;

    /// Draw onto `win`, or onto the full-grid screen when `None`.
    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>);

    /// Anchor point.
    fn position(&self) -> Vec2i {
        self.placement().pos
    }

    /// Move the anchor point. Constructor geometry is unaffected.
    fn set_position(&mut self, pos: Vec2i) {
        self.placement_mut().pos = pos;
    }

    /// Attributes applied while drawing.
    fn attributes(&self) -> Attr {
        self.placement().attr
    }

    /// Replace the attribute mask.
    fn set_attributes(&mut self, attr: Attr) {
        self.placement_mut().attr = attr;
    }
}

/// Run `body` with `attr` turned on for the target, then turn it off.
pub(crate) fn with_attr(
    surface: &mut dyn Surface,
    win: Option<WindowId>,
    attr: Attr,
    body: impl FnOnce(&mut dyn Surface),
) {
    surface.set_attr(win, attr);
    body(&mut *surface);
    surface.unset_attr(win, attr);
}

/// The closed set of drawable primitives.
#[derive(Debug, Clone)]
pub enum Renderable {
    /// Single character.
    Glyph(Glyph),
    /// Run of characters.
    Text(Text),
    /// Arbitrary segment.
    Line(Line),
    /// Horizontal segment in the line-drawing set.
    HLine(HLine),
    /// Vertical segment in the line-drawing set.
    VLine(VLine),
    /// Solid reverse-video block.
    Quad(Quad),
    /// Block filled with a chosen character.
    CustomQuad(CustomQuad),
    /// Line-drawing frame.
    Border(Border),
    /// Frame built from eight chosen characters.
    CustomBorder(CustomBorder),
}

macro_rules! dispatch {
    ($self:expr, $obj:ident => $body:expr) => {
        match $self {
            Renderable::Glyph($obj) => $body,
            Renderable::Text($obj) => $body,
            Renderable::Line($obj) => $body,
            Renderable::HLine($obj) => $body,
            Renderable::VLine($obj) => $body,
            Renderable::Quad($obj) => $body,
            Renderable::CustomQuad($obj) => $body,
            Renderable::Border($obj) => $body,
            Renderable::CustomBorder($obj) => $body,
        }
    };
}

impl Draw for Renderable {
    fn placement(&self) -> &Placement {
        dispatch!(self, obj => obj.placement())
    }

    fn placement_mut(&mut self) -> &mut Placement {
        dispatch!(self, obj => obj.placement_mut())
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        dispatch!(self, obj => obj.draw(surface, win));
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Renderable {
                fn from(obj: $variant) -> Self {
                    Self::$variant(obj)
                }
            }
        )*
    };
}

impl_from!(Glyph, Text, Line, HLine, VLine, Quad, CustomQuad, Border, CustomBorder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IntRect;
    use crate::surface::Canvas;

    #[test]
    fn test_placement_accessors() {
        let mut obj: Renderable = Glyph::new('#', Vec2i::new(1, 2)).into();
        assert_eq!(obj.position(), Vec2i::new(1, 2));
        assert_eq!(obj.attributes(), Attr::NORMAL);

        obj.set_attributes(Attr::BOLD);
        obj.set_position(Vec2i::new(5, 5));
        assert_eq!(obj.attributes(), Attr::BOLD);
        assert_eq!(obj.position(), Vec2i::new(5, 5));
    }

    #[test]
    fn test_heterogeneous_scene() {
        let mut canvas = Canvas::new(30, 12);
        let scene: Vec<Renderable> = vec![
            Glyph::new('#', Vec2i::new(0, 0)).into(),
            Text::new("hi", Vec2i::new(2, 0)).into(),
            Line::new('*', Vec2i::new(0, 2), Vec2i::new(4, 2)).into(),
            HLine::new(Vec2i::new(0, 3), Vec2i::new(4, 3)).into(),
            VLine::new(Vec2i::new(6, 0), Vec2i::new(6, 4)).into(),
            Quad::new(IntRect::new(8, 0, 2, 2)).into(),
            CustomQuad::new('.', IntRect::new(11, 0, 2, 2)).into(),
            Border::new(IntRect::new(0, 6, 4, 3)).into(),
            CustomBorder::new(['-', '-', '|', '|', '#', '#', '#', '#'].into(), IntRect::new(6, 6, 4, 3))
                .into(),
        ];
        for obj in &scene {
            obj.draw(&mut canvas, None);
        }

        assert_eq!(canvas.row_text(0).trim_end(), "# hi  x    ..");
        assert_eq!(canvas.row_text(2).trim_end(), "***** x");
        assert_eq!(canvas.char_at(Vec2i::new(8, 0)), Some(' '));
        assert!(canvas.attr_at(Vec2i::new(8, 0)).unwrap().contains(Attr::REVERSE));
        assert_eq!(canvas.char_at(Vec2i::new(6, 6)), Some('#'));
        assert_eq!(canvas.char_at(Vec2i::new(0, 6)), Some(crate::style::acs::ULCORNER));

        // Nothing leaks into the screen's attribute state
        assert_eq!(canvas.active_attr(None), Some(Attr::NORMAL));
    }
}
