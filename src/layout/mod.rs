//! Layout module: Ratio-driven partitioning of screen regions.
//!
//! A [`Layout`] pairs a validated [`Ratio`] with a [`Direction`] and splits
//! a rectangle into one box per weight. Boxes are separated by one-cell
//! seams and never extend past the region they partition.
//!
//! [`Layouts`] offers the common splits (halves, thirds, two-thirds) as
//! infallible shortcuts.

mod ratio;
mod split;

pub use ratio::{Ratio, RatioError};
pub use split::{screen_area, Direction, Layout, Layouts};
