//! # Vexes
//!
//! Shape primitives, bordered panels and ratio layouts for character-grid
//! terminals.
//!
//! Vexes draws through a [`Surface`]: a fixed-size grid of cells with
//! curses-style windows. It never reads the grid back, so any backend that
//! can place a character with attributes will do.
//!
//! ## Core Concepts
//!
//! - **Renderables**: glyphs, text, lines, quads and borders that know how to
//!   draw themselves ([`Draw`], [`Renderable`])
//! - **Panels**: bordered, titled windows with their own local coordinates
//! - **Layouts**: ratio strings like `"2:1"` that partition a region into
//!   adjacent boxes
//! - **Surfaces**: an in-memory [`Canvas`] and a crossterm-backed
//!   [`CrosstermSurface`]
//!
//! ## Example
//!
//! ```rust
//! use vexes::render::Text;
//! use vexes::{Canvas, Engine, EngineConfig, Layouts, Panel};
//!
//! let mut engine = Engine::new(Canvas::new(81, 25), EngineConfig::default());
//! let area = engine.screen_area();
//!
//! let boxes = Layouts::h_two_thirds_left(area);
//! let panels: Vec<Panel> = boxes
//!     .iter()
//!     .map(|&bounds| Panel::new(engine.surface_mut(), bounds, "Panel"))
//!     .collect();
//!
//! for panel in &panels {
//!     engine.draw_panel(panel).unwrap();
//! }
//! let middle = engine.midpoint();
//! engine.draw(&Text::new("hello", middle).with_centered(true));
//! engine.present().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod clock;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod panel;
pub mod render;
pub mod style;
pub mod surface;

// Re-exports for convenience
pub use clock::Clock;
pub use engine::{Engine, EngineConfig};
pub use geometry::{FloatRect, IntRect, Rect, Vec2, Vec2f, Vec2i};
pub use layout::{Direction, Layout, Layouts, Ratio, RatioError};
pub use panel::Panel;
pub use render::{Draw, Renderable};
pub use style::{Attr, Color, LineSet};
pub use surface::{Canvas, CrosstermSurface, Surface, WindowId};
