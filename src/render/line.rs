//! Lines: Straight segments between two fixed endpoints.
//!
//! The rasterized cells are computed on the first draw and cached for the
//! lifetime of the line. Endpoints never change after construction, so the
//! cache never needs invalidating.

use super::raster::points_on_line;
use super::{with_attr, Draw, Placement};
use crate::geometry::Vec2i;
use crate::style::{acs, Attr};
use crate::surface::{Surface, WindowId};
use once_cell::unsync::OnceCell;

/// An arbitrary segment drawn with one fill character.
#[derive(Debug, Clone)]
pub struct Line {
    symbol: char,
    a: Vec2i,
    b: Vec2i,
    points: OnceCell<Vec<Vec2i>>,
    placement: Placement,
}

impl Line {
    /// Create a segment from `a` to `b`. The position starts at `a`.
    pub fn new(symbol: char, a: Vec2i, b: Vec2i) -> Self {
        Self {
            symbol,
            a,
            b,
            points: OnceCell::new(),
            placement: Placement::at(a),
        }
    }

    /// The fill character.
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Start and end points.
    pub const fn endpoints(&self) -> (Vec2i, Vec2i) {
        (self.a, self.b)
    }

    /// Rasterized cells, computed on first use.
    pub fn points(&self) -> &[Vec2i] {
        self.points.get_or_init(|| points_on_line(self.a, self.b))
    }

    /// Whether the cells have been rasterized yet.
    pub fn is_rasterized(&self) -> bool {
        self.points.get().is_some()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.a == other.a
            && self.b == other.b
            && self.placement == other.placement
    }
}

impl Eq for Line {}

impl Draw for Line {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        with_attr(surface, win, self.placement.attr, |s| {
            for &p in self.points() {
                s.write_char(win, p, self.symbol);
            }
        });
    }
}

macro_rules! axis_line {
    ($(#[$doc:meta])* $name:ident, $symbol:expr, |$a:ident, $b:ident| $snap:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Line);

        impl $name {
            /// Create the segment. The second endpoint is snapped onto the
            /// first endpoint's axis.
            pub fn new($a: Vec2i, $b: Vec2i) -> Self {
                Self(Line::new($symbol, $a, $snap))
            }

            /// The underlying segment.
            pub const fn line(&self) -> &Line {
                &self.0
            }
        }

        impl Draw for $name {
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
    };
}

axis_line!(
    /// A horizontal segment in the line-drawing set.
    HLine,
    acs::HLINE,
    |a, b| Vec2i::new(b.x, a.y)
);

axis_line!(
    /// A vertical segment in the line-drawing set.
    VLine,
    acs::VLINE,
    |a, b| Vec2i::new(a.x, b.y)
);
