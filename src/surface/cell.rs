//! Cell: One character position of the grid.

use crate::style::{Attr, LineSet};
use bitflags::bitflags;

bitflags! {
    /// Cell-level flags for special states.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// This cell is the right half of a double-width character
        const WIDE_CONTINUATION = 0b0000_0001;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single grid cell: the written character and the attributes that were
/// active when it was written.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: char,
    attr: Attr,
    flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space, no attributes).
    pub const EMPTY: Self = Self {
        symbol: ' ',
        attr: Attr::NORMAL,
        flags: CellFlags::empty(),
    };

    /// Create a new cell.
    #[inline]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            attr: Attr::NORMAL,
            flags: CellFlags::empty(),
        }
    }

    /// Placeholder for the right half of a wide character.
    #[inline]
    pub const fn wide_continuation(attr: Attr) -> Self {
        Self {
            symbol: ' ',
            attr,
            flags: CellFlags::WIDE_CONTINUATION,
        }
    }

    /// Builder: set the attributes.
    #[inline]
    #[must_use]
    pub const fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }

    /// The raw character, as written.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Attributes captured at write time.
    #[inline]
    pub const fn attr(&self) -> Attr {
        self.attr
    }

    /// Cell flags.
    #[inline]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_CONTINUATION)
    }

    /// The character to put on screen, translating line-drawing codes when
    /// the cell was written under [`Attr::ALTERNATE`].
    #[inline]
    pub fn display_char(&self, lines: LineSet) -> char {
        if self.attr.contains(Attr::ALTERNATE) {
            lines.translate(self.symbol)
        } else {
            self.symbol
        }
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("attr", &self.attr)
            .field("flags", &self.flags)
            .finish()
    }
}
