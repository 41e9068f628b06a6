//! Rect: An axis-aligned rectangle with derived corner points.

use super::vec2::Vec2;
use std::ops::{Add, Div};

/// A rectangle defined by its origin and dimensions.
///
/// Corners are derived as `origin + extent`, so the lower-right corner of a
/// `w x h` rectangle sits at `(x + w, y + h)`. Extents are expected to be
/// non-negative but this is not enforced.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    /// X coordinate (column) of the upper-left corner.
    pub x: T,
    /// Y coordinate (row) of the upper-left corner.
    pub y: T,
    /// Width in columns.
    pub width: T,
    /// Height in rows.
    pub height: T,
}

/// Rectangle on the character grid.
pub type IntRect = Rect<i32>;
/// Rectangle with fractional coordinates.
pub type FloatRect = Rect<f64>;

impl<T> Rect<T> {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self { x, y, width, height }
    }
}

impl<T> Rect<T>
where
    T: Copy + Add<Output = T> + Div<Output = T> + From<u8>,
{
    /// Upper-left corner.
    #[inline]
    pub fn ul(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Upper-right corner.
    #[inline]
    pub fn ur(&self) -> Vec2<T> {
        Vec2::new(self.x + self.width, self.y)
    }

    /// Lower-left corner.
    #[inline]
    pub fn ll(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y + self.height)
    }

    /// Lower-right corner.
    #[inline]
    pub fn lr(&self) -> Vec2<T> {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Origin point (same as the upper-left corner).
    #[inline]
    pub fn origin(&self) -> Vec2<T> {
        self.ul()
    }

    /// Dimensions as a vector.
    #[inline]
    pub fn dim(&self) -> Vec2<T> {
        Vec2::new(self.width, self.height)
    }

    /// Center point. For integer rectangles the half extents truncate.
    #[inline]
    pub fn center(&self) -> Vec2<T> {
        let two = T::from(2);
        Vec2::new(self.x + self.width / two, self.y + self.height / two)
    }
}

impl Rect<i32> {
    /// Check if the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Vec2<i32>) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Rect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({:?}, {:?} {:?}x{:?})", self.x, self.y, self.width, self.height)
    }
}
