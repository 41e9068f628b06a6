//! Style module: Attribute masks, the named palette and line-drawing glyphs.
//!
//! This module contains:
//! - [`Attr`]: Attribute bitflags passed to every draw call
//! - [`Color`]: The fixed eight-colour palette
//! - [`resolve`] / [`combine`]: The immutable name registry and mask combinator
//! - [`acs`]: Line-drawing codes and their rendering via [`LineSet`]

pub mod acs;
mod attr;

pub use acs::LineSet;
pub use attr::{attribute_names, combine, resolve, Attr, Color};
