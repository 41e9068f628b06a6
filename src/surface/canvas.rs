//! Canvas: An in-memory character grid implementing [`Surface`].
//!
//! The canvas stores cells in a contiguous `Vec` in row-major order. Windows
//! are offset views onto the same grid, so a write through a window lands
//! directly in the shared cells.

use super::cell::Cell;
use super::{Surface, WindowId};
use crate::geometry::{IntRect, Vec2i};
use crate::style::Attr;
use std::collections::HashMap;
use std::io;

/// Per-target drawing state.
#[derive(Debug, Clone)]
struct Window {
    /// Grid-relative bounds.
    bounds: IntRect,
    /// Attributes applied to subsequent writes.
    attr: Attr,
    /// Number of refreshes requested.
    refreshes: u64,
}

impl Window {
    const fn new(bounds: IntRect) -> Self {
        Self {
            bounds,
            attr: Attr::NORMAL,
            refreshes: 0,
        }
    }
}

/// A grid of cells with curses-style windows.
#[derive(Clone)]
pub struct Canvas {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Grid width in columns.
    width: i32,
    /// Grid height in lines.
    height: i32,
    /// The full-grid screen target.
    screen: Window,
    /// Live windows.
    windows: HashMap<WindowId, Window>,
    /// Next window handle to assign.
    next_window: u32,
}

impl Canvas {
    /// Create a new canvas with the given dimensions.
    ///
    /// All cells are initialized to empty.
    ///
    /// # Panics
    /// Panics if columns or lines is 0.
    pub fn new(columns: u16, lines: u16) -> Self {
        assert!(columns > 0 && lines > 0, "Canvas dimensions must be non-zero");
        let (width, height) = (i32::from(columns), i32::from(lines));
        Self {
            cells: vec![Cell::EMPTY; usize::from(columns) * usize::from(lines)],
            width,
            height,
            screen: Window::new(IntRect::new(0, 0, width, height)),
            windows: HashMap::new(),
            next_window: 0,
        }
    }

    /// Grid width in columns.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in lines.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the canvas is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert grid coordinates to a linear index.
    ///
    /// Returns `None` if the point is off the grid.
    #[inline]
    pub fn index_of(&self, p: Vec2i) -> Option<usize> {
        if (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y) {
            usize::try_from(p.y * self.width + p.x).ok()
        } else {
            None
        }
    }

    /// Cell at grid coordinates.
    #[inline]
    pub fn cell(&self, p: Vec2i) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Raw character at grid coordinates.
    #[inline]
    pub fn char_at(&self, p: Vec2i) -> Option<char> {
        self.cell(p).map(Cell::symbol)
    }

    /// Attributes captured at grid coordinates.
    #[inline]
    pub fn attr_at(&self, p: Vec2i) -> Option<Attr> {
        self.cell(p).map(Cell::attr)
    }

    /// Raw characters of one grid row, skipping wide continuations.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(Vec2i::new(x, y)))
            .filter(|c| !c.is_wide_continuation())
            .map(Cell::symbol)
            .collect()
    }

    /// Attributes currently active for a target.
    pub fn active_attr(&self, win: Option<WindowId>) -> Option<Attr> {
        self.target(win).map(|w| w.attr)
    }

    /// Grid-relative bounds of a target.
    pub fn window_bounds(&self, win: Option<WindowId>) -> Option<IntRect> {
        self.target(win).map(|w| w.bounds)
    }

    /// How many times a target has been refreshed.
    pub fn refresh_count(&self, win: Option<WindowId>) -> u64 {
        self.target(win).map_or(0, |w| w.refreshes)
    }

    /// Number of live windows (the screen is not counted).
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Clear the entire grid.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize the grid, preserving content where possible.
    ///
    /// New cells are initialized to empty. Windows keep their bounds.
    ///
    /// # Panics
    /// Panics if columns or lines is 0.
    pub fn resize(&mut self, columns: u16, lines: u16) {
        assert!(columns > 0 && lines > 0, "Canvas dimensions must be non-zero");
        let (width, height) = (i32::from(columns), i32::from(lines));
        if width == self.width && height == self.height {
            return;
        }

        let old_width = self.width as usize;
        let new_width = usize::from(columns);
        let mut cells = vec![Cell::EMPTY; new_width * usize::from(lines)];

        let copy_width = old_width.min(new_width);
        let copy_height = self.height.min(height) as usize;
        for y in 0..copy_height {
            let old_start = y * old_width;
            let new_start = y * new_width;
            cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = cells;
        self.width = width;
        self.height = height;
        self.screen.bounds = IntRect::new(0, 0, width, height);
    }

    /// If `at` is the right half of a wide character, blank its left half.
    fn break_from_head(&mut self, at: Vec2i) {
        let is_tail = self.cell(at).is_some_and(Cell::is_wide_continuation);
        if let (true, Some(head)) = (is_tail, self.index_of(at - Vec2i::new(1, 0))) {
            self.cells[head] = Cell::EMPTY.with_attr(self.cells[head].attr());
        }
    }

    /// If `at` holds a wide character, blank its right half.
    fn break_from_tail(&mut self, at: Vec2i) {
        let is_head = self
            .cell(at)
            .is_some_and(|c| !c.is_wide_continuation() && is_wide(c.symbol()));
        let tail = at + Vec2i::new(1, 0);
        if is_head && self.cell(tail).is_some_and(Cell::is_wide_continuation) {
            if let Some(idx) = self.index_of(tail) {
                self.cells[idx] = Cell::EMPTY.with_attr(self.cells[idx].attr());
            }
        }
    }

    fn target(&self, win: Option<WindowId>) -> Option<&Window> {
        match win {
            None => Some(&self.screen),
            Some(id) => self.windows.get(&id),
        }
    }

    fn target_mut(&mut self, win: Option<WindowId>) -> Option<&mut Window> {
        match win {
            None => Some(&mut self.screen),
            Some(id) => self.windows.get_mut(&id),
        }
    }
}

impl Surface for Canvas {
    fn grid_size(&self) -> Vec2i {
        Vec2i::new(self.width, self.height)
    }

    fn create_window(&mut self, bounds: IntRect) -> WindowId {
        let id = WindowId(self.next_window);
        self.next_window += 1;
        self.windows.insert(id, Window::new(bounds));
        log::trace!("created window {id:?} at {bounds:?}");
        id
    }

    fn destroy_window(&mut self, win: WindowId) {
        if self.windows.remove(&win).is_some() {
            log::trace!("destroyed window {win:?}");
        }
    }

    fn refresh(&mut self, win: Option<WindowId>) -> io::Result<()> {
        if let Some(target) = self.target_mut(win) {
            target.refreshes += 1;
        }
        Ok(())
    }

    fn write_char(&mut self, win: Option<WindowId>, p: Vec2i, ch: char) {
        let Some(target) = self.target(win) else {
            return;
        };
        let local = IntRect::new(0, 0, target.bounds.width, target.bounds.height);
        let at = target.bounds.origin() + p;
        let attr = target.attr;

        if !local.contains(p) {
            log::trace!("dropped {ch:?} at {p:?}: outside {win:?}");
            return;
        }
        let Some(idx) = self.index_of(at) else {
            log::trace!("dropped {ch:?} at {p:?}: off the grid");
            return;
        };

        self.break_from_head(at);
        self.break_from_tail(at);
        self.cells[idx] = Cell::new(ch).with_attr(attr);

        // Wide characters claim the next column as well
        if is_wide(ch) {
            let next = at + Vec2i::new(1, 0);
            if local.contains(p + Vec2i::new(1, 0)) {
                if let Some(next_idx) = self.index_of(next) {
                    self.break_from_tail(next);
                    self.cells[next_idx] = Cell::wide_continuation(attr);
                }
            }
        }
    }

    fn set_attr(&mut self, win: Option<WindowId>, attr: Attr) {
        if let Some(target) = self.target_mut(win) {
            // A colour pair replaces the active one
            if attr.intersects(Attr::COLOR) {
                target.attr.remove(Attr::COLOR);
            }
            target.attr |= attr;
        }
    }

    fn unset_attr(&mut self, win: Option<WindowId>, attr: Attr) {
        if let Some(target) = self.target_mut(win) {
            let mut off = attr;
            if attr.intersects(Attr::COLOR) {
                off |= Attr::COLOR;
            }
            target.attr &= !off;
        }
    }
}

fn is_wide(ch: char) -> bool {
    unicode_width::UnicodeWidthChar::width(ch) == Some(2)
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("windows", &self.windows.len())
            .finish()
    }
}
