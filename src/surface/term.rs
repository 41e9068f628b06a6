//! `CrosstermSurface`: A [`Canvas`] that flushes refreshed regions to a
//! terminal through crossterm.
//!
//! Draw calls only touch the in-memory canvas. `refresh` walks the target's
//! region, queues cursor moves, SGR attributes and characters, then flushes
//! the writer once. Terminal modes (raw mode, alternate screen, cursor
//! visibility) are left to the host application.

use super::canvas::Canvas;
use super::{Surface, WindowId};
use crate::geometry::{IntRect, Vec2i};
use crate::style::{Attr, Color, LineSet};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Stdout, Write};

/// Terminal-backed surface writing ANSI sequences to `W`.
pub struct CrosstermSurface<W: Write> {
    canvas: Canvas,
    writer: W,
    lines: LineSet,
}

impl CrosstermSurface<Stdout> {
    /// Create a surface on stdout sized to the current terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn stdout(lines: LineSet) -> io::Result<Self> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok(Self::new(io::stdout(), columns.max(1), rows.max(1), lines))
    }
}

impl<W: Write> CrosstermSurface<W> {
    /// Create a surface of the given size writing to `writer`.
    pub fn new(writer: W, columns: u16, rows: u16, lines: LineSet) -> Self {
        Self {
            canvas: Canvas::new(columns, rows),
            writer,
            lines,
        }
    }

    /// The backing canvas.
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The output writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Line-drawing rendition in use.
    pub const fn line_set(&self) -> LineSet {
        self.lines
    }

    /// Handle a terminal resize.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.canvas.resize(columns.max(1), rows.max(1));
    }

    /// Emit every cell of `region` (grid coordinates) and flush.
    fn flush_region(&mut self, region: IntRect) -> io::Result<()> {
        let x_start = region.x.max(0);
        let y_start = region.y.max(0);
        let x_end = region.right().min(self.canvas.width());
        let y_end = region.bottom().min(self.canvas.height());

        let mut active: Option<Attr> = None;
        for y in y_start..y_end {
            let (Ok(col), Ok(row)) = (u16::try_from(x_start), u16::try_from(y)) else {
                continue;
            };
            queue!(self.writer, MoveTo(col, row))?;

            for x in x_start..x_end {
                let Some(cell) = self.canvas.cell(Vec2i::new(x, y)).copied() else {
                    continue;
                };
                if cell.is_wide_continuation() {
                    continue;
                }
                if active != Some(cell.attr()) {
                    apply_attr(&mut self.writer, cell.attr())?;
                    active = Some(cell.attr());
                }
                queue!(self.writer, Print(cell.display_char(self.lines)))?;
            }
        }

        queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)?;
        self.writer.flush()
    }
}

/// Queue the SGR sequence for an attribute mask, starting from a reset.
fn apply_attr<W: Write>(writer: &mut W, attr: Attr) -> io::Result<()> {
    queue!(writer, SetAttribute(Attribute::Reset), ResetColor)?;

    let mapping = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::BLINK, Attribute::SlowBlink),
        (Attr::REVERSE | Attr::STANDOUT, Attribute::Reverse),
        (Attr::INVISIBLE, Attribute::Hidden),
    ];
    for (flags, sgr) in mapping {
        if attr.intersects(flags) {
            queue!(writer, SetAttribute(sgr))?;
        }
    }

    if let Some(color) = attr.color() {
        queue!(writer, SetForegroundColor(term_color(color)))?;
    }
    Ok(())
}

/// The eight ANSI colours.
const fn term_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
    }
}

impl<W: Write> Surface for CrosstermSurface<W> {
    fn grid_size(&self) -> Vec2i {
        self.canvas.grid_size()
    }

    fn create_window(&mut self, bounds: IntRect) -> WindowId {
        self.canvas.create_window(bounds)
    }

    fn destroy_window(&mut self, win: WindowId) {
        self.canvas.destroy_window(win);
    }

    fn refresh(&mut self, win: Option<WindowId>) -> io::Result<()> {
        self.canvas.refresh(win)?;
        match self.canvas.window_bounds(win) {
            Some(region) => self.flush_region(region),
            None => Ok(()),
        }
    }

    fn write_char(&mut self, win: Option<WindowId>, p: Vec2i, ch: char) {
        self.canvas.write_char(win, p, ch);
    }

    fn set_attr(&mut self, win: Option<WindowId>, attr: Attr) {
        self.canvas.set_attr(win, attr);
    }

    fn unset_attr(&mut self, win: Option<WindowId>, attr: Attr) {
        self.canvas.unset_attr(win, attr);
    }
}

impl<W: Write> std::fmt::Debug for CrosstermSurface<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermSurface")
            .field("canvas", &self.canvas)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
