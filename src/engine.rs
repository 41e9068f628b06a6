//! Engine: The entry point that owns the surface and paces frames.
//!
//! The engine does not run a loop of its own. The host polls input with
//! [`Engine::frame_budget`] as its timeout, draws through the engine, then
//! calls [`Engine::present`] and [`Engine::tick`] once per frame.

use crate::clock::Clock;
use crate::geometry::{IntRect, Vec2i};
use crate::layout;
use crate::panel::Panel;
use crate::render::Draw;
use crate::style::{self, Attr, LineSet};
use crate::surface::{CrosstermSurface, Surface, WindowId};
use std::io::{self, Stdout};
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// How the terminal renders the line-drawing set.
    pub line_set: LineSet,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            line_set: LineSet::Unicode,
        }
    }
}

/// Owns a [`Surface`] and the frame clock.
pub struct Engine<S: Surface> {
    /// Drawing target.
    surface: S,
    /// Configuration.
    config: EngineConfig,
    /// Time since the previous tick.
    clock: Clock,
    /// Frames ticked so far.
    frame_count: u64,
    /// Frame rate measured at the last tick.
    fps: f64,
}

impl Engine<CrosstermSurface<Stdout>> {
    /// Create an engine drawing to stdout, sized to the current terminal.
    ///
    /// Raw mode and the alternate screen are left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn stdout(config: EngineConfig) -> io::Result<Self> {
        let surface = CrosstermSurface::stdout(config.line_set)?;
        Ok(Self::new(surface, config))
    }
}

impl<S: Surface> Engine<S> {
    /// Create an engine over an existing surface.
    pub fn new(surface: S, config: EngineConfig) -> Self {
        log::debug!("engine started on a {:?} grid", surface.grid_size());
        Self {
            surface,
            config,
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// The drawing target.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing target, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Grid size as `(columns, lines)`.
    pub fn grid_size(&self) -> Vec2i {
        self.surface.grid_size()
    }

    /// Middle cell of the grid.
    pub fn midpoint(&self) -> Vec2i {
        let grid = self.grid_size();
        Vec2i::new(grid.x / 2, grid.y / 2)
    }

    /// Default partition region for layouts.
    pub fn screen_area(&self) -> IntRect {
        layout::screen_area(self.grid_size())
    }

    /// Draw onto the screen.
    pub fn draw(&mut self, obj: &impl Draw) {
        obj.draw(&mut self.surface, None);
    }

    /// Draw into a window.
    pub fn draw_in(&mut self, obj: &impl Draw, win: WindowId) {
        obj.draw(&mut self.surface, Some(win));
    }

    /// Draw a panel and flush its window.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the window fails.
    pub fn draw_panel(&mut self, panel: &Panel) -> io::Result<()> {
        panel.draw(&mut self.surface)
    }

    /// Flush the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&mut self) -> io::Result<()> {
        self.surface.refresh(None)
    }

    /// Mark the end of a frame.
    ///
    /// Returns the seconds since the previous tick (or since the engine was
    /// created) and updates the measured frame rate.
    pub fn tick(&mut self) -> f64 {
        let dt = self.clock.elapsed(true);
        self.frame_count += 1;
        self.fps = if dt > 0.0 { dt.recip() } else { 0.0 };
        dt
    }

    /// Frame rate measured at the last tick. Zero before the first tick.
    pub const fn fps(&self) -> f64 {
        self.fps
    }

    /// Frames ticked so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Time available per frame at the target rate.
    ///
    /// Use it as the input poll timeout.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.config.target_fps.max(1)
    }

    /// Resolve an attribute name. Unknown names give [`Attr::NORMAL`].
    #[allow(clippy::unused_self)]
    pub fn attribute(&self, name: &str) -> Attr {
        style::resolve(name)
    }

    /// OR attribute codes into one mask.
    #[allow(clippy::unused_self)]
    pub fn combine<I>(&self, codes: I) -> Attr
    where
        I: IntoIterator<Item = Attr>,
    {
        style::combine(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Quad, Text};
    use crate::surface::Canvas;
    use std::thread;

    fn engine() -> Engine<Canvas> {
        Engine::new(Canvas::new(80, 24), EngineConfig::default())
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.line_set, LineSet::Unicode);
    }

    #[test]
    fn test_grid_queries() {
        let engine = engine();
        assert_eq!(engine.grid_size(), Vec2i::new(80, 24));
        assert_eq!(engine.midpoint(), Vec2i::new(40, 12));
        assert_eq!(engine.screen_area(), IntRect::new(0, 0, 79, 23));
    }

    #[test]
    fn test_draw_and_present() {
        let mut engine = engine();
        engine.draw(&Text::new("hello", Vec2i::new(2, 1)));
        engine.present().unwrap();

        assert_eq!(engine.surface().row_text(1).trim_end(), "  hello");
        assert_eq!(engine.surface().refresh_count(None), 1);
    }

    #[test]
    fn test_draw_in_window() {
        let mut engine = engine();
        let win = engine.surface_mut().create_window(IntRect::new(10, 5, 6, 3));
        engine.draw_in(&Quad::new(IntRect::new(0, 0, 2, 1)), win);

        assert_eq!(engine.surface().attr_at(Vec2i::new(10, 5)), Some(Attr::REVERSE));
        assert_eq!(engine.surface().attr_at(Vec2i::new(11, 5)), Some(Attr::REVERSE));
        assert_eq!(engine.surface().attr_at(Vec2i::new(0, 0)), Some(Attr::NORMAL));
    }

    #[test]
    fn test_draw_panel_refreshes_window() {
        let mut engine = engine();
        let panel = Panel::new(engine.surface_mut(), IntRect::new(0, 0, 20, 5), "Panel");
        engine.draw_panel(&panel).unwrap();

        assert_eq!(engine.surface().refresh_count(Some(panel.window())), 1);
        assert_eq!(engine.surface().char_at(Vec2i::new(8, 0)), Some('P'));
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut engine = engine();
        assert_eq!(engine.frame_count(), 0);
        assert!(engine.fps().abs() < f64::EPSILON);

        thread::sleep(Duration::from_millis(2));
        let dt = engine.tick();
        assert!(dt > 0.0);
        assert!(engine.fps() > 0.0);
        engine.tick();
        assert_eq!(engine.frame_count(), 2);
    }

    #[test]
    fn test_frame_budget() {
        let engine = engine();
        assert_eq!(engine.frame_budget(), Duration::from_secs(1) / 60);

        let stalled = Engine::new(
            Canvas::new(4, 4),
            EngineConfig {
                target_fps: 0,
                ..EngineConfig::default()
            },
        );
        assert_eq!(stalled.frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_attribute_registry() {
        let engine = engine();
        assert_eq!(engine.attribute("bold"), Attr::BOLD);
        assert_eq!(engine.attribute("sparkly"), Attr::NORMAL);
        assert_eq!(
            engine.combine([engine.attribute("bold"), engine.attribute("underline")]),
            Attr::BOLD | Attr::UNDERLINE
        );
    }
}
