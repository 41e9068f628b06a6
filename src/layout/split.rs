//! Ratio-driven partitioning of a rectangle into adjacent boxes.

use super::ratio::{Ratio, RatioError};
use crate::geometry::{IntRect, Vec2i};

/// Axis along which boxes are laid side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Boxes run left to right; each spans the full height.
    Horizontal,
    /// Boxes run top to bottom; each spans the full width.
    Vertical,
}

/// Default partition region: the full grid minus a one-cell margin on the
/// right and bottom.
pub const fn screen_area(grid: Vec2i) -> IntRect {
    IntRect::new(0, 0, grid.x - 1, grid.y - 1)
}

/// A validated ratio bound to a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    direction: Direction,
    ratio: Ratio,
}

impl Layout {
    /// Parse `ratio` for the given direction.
    pub fn new(direction: Direction, ratio: &str) -> Result<Self, RatioError> {
        let ratio = Ratio::parse(ratio).inspect_err(|e| {
            log::warn!("rejected ratio {ratio:?}: {e}");
        })?;
        Ok(Self::with_ratio(direction, ratio))
    }

    /// Left-to-right layout.
    pub fn horizontal(ratio: &str) -> Result<Self, RatioError> {
        Self::new(Direction::Horizontal, ratio)
    }

    /// Top-to-bottom layout.
    pub fn vertical(ratio: &str) -> Result<Self, RatioError> {
        Self::new(Direction::Vertical, ratio)
    }

    /// Layout from an already validated ratio.
    pub const fn with_ratio(direction: Direction, ratio: Ratio) -> Self {
        Self { direction, ratio }
    }

    /// The partition axis.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The weights.
    pub const fn ratio(&self) -> &Ratio {
        &self.ratio
    }

    /// Partition `area` into one box per weight.
    ///
    /// Each box's extent along the axis is `weight / total * full`,
    /// truncated. Boxes are separated by a one-cell seam. A box that would
    /// reach the end of the region is clamped to it, so all rounding slack
    /// lands in the trailing box(es).
    ///
    /// The clamp is measured from the region's own start, not from grid
    /// column 0, and never goes below zero. A region offset from the origin
    /// therefore splits exactly like one at the origin, shifted. Once the
    /// region is used up, any remaining boxes come back empty.
    pub fn split(&self, area: IntRect) -> Vec<IntRect> {
        let boxes = match self.direction {
            Direction::Horizontal => walk(&self.ratio, area.x, area.width)
                .map(|(x, columns)| IntRect::new(x, area.y, columns, area.height))
                .collect(),
            Direction::Vertical => walk(&self.ratio, area.y, area.height)
                .map(|(y, rows)| IntRect::new(area.x, y, area.width, rows))
                .collect(),
        };
        log::debug!("{:?} {} over {area:?}: {boxes:?}", self.direction, self.ratio);
        boxes
    }

    /// Partition the default screen region of a `grid`-sized surface.
    pub fn split_screen(&self, grid: Vec2i) -> Vec<IntRect> {
        self.split(screen_area(grid))
    }
}

/// Yield `(start, extent)` along one axis for every weight.
fn walk(ratio: &Ratio, start: i32, full: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
    let base = i64::try_from(ratio.total()).unwrap_or(i64::MAX).max(1);
    let mut last = start - 1;

    ratio.weights().iter().map(move |&weight| {
        let share = i64::from(weight) * i64::from(full) / base;
        let mut extent = i32::try_from(share).unwrap_or(full);

        let offset = last + 1 - start;
        if offset + extent >= full {
            extent = (full - offset).max(0);
        }

        let origin = last + 1;
        last += extent + 1;
        (origin, extent)
    })
}

/// Canned layouts over fixed ratios.
///
/// The ratios are known to be valid, so these never fail.
#[derive(Debug, Clone, Copy)]
pub struct Layouts;

impl Layouts {
    /// Parse `ratio` and split `area` left to right.
    pub fn custom_h(ratio: &str, area: IntRect) -> Result<Vec<IntRect>, RatioError> {
        Ok(Layout::horizontal(ratio)?.split(area))
    }

    /// Parse `ratio` and split `area` top to bottom.
    pub fn custom_v(ratio: &str, area: IntRect) -> Result<Vec<IntRect>, RatioError> {
        Ok(Layout::vertical(ratio)?.split(area))
    }

    fn fixed(direction: Direction, weights: &[u32], area: IntRect) -> Vec<IntRect> {
        Layout::with_ratio(direction, Ratio::from_static(weights)).split(area)
    }

    /// Two even columns (`1:1`).
    pub fn h_split(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Horizontal, &[1, 1], area)
    }

    /// Wide left column (`2:1`).
    pub fn h_two_thirds_left(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Horizontal, &[2, 1], area)
    }

    /// Wide right column (`1:2`).
    pub fn h_two_thirds_right(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Horizontal, &[1, 2], area)
    }

    /// Three even columns (`1:1:1`).
    pub fn h_thirds(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Horizontal, &[1, 1, 1], area)
    }

    /// Two even rows (`1:1`).
    pub fn v_split(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Vertical, &[1, 1], area)
    }

    /// Tall upper row (`2:1`).
    pub fn v_two_thirds_above(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Vertical, &[2, 1], area)
    }

    /// Tall lower row (`1:2`).
    pub fn v_two_thirds_below(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Vertical, &[1, 2], area)
    }

    /// Three even rows (`1:1:1`).
    pub fn v_thirds(area: IntRect) -> Vec<IntRect> {
        Self::fixed(Direction::Vertical, &[1, 1, 1], area)
    }
}
