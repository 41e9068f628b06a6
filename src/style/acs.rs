//! Line-drawing character set.
//!
//! Glyphs drawn while [`Attr::ALTERNATE`](super::Attr::ALTERNATE) is active are
//! interpreted as DEC special-graphics codes, the same convention curses
//! uses for its `ACS_*` characters. A [`LineSet`] decides what they look like
//! on the wire.

/// Horizontal line.
pub const HLINE: char = 'q';
/// Vertical line.
pub const VLINE: char = 'x';
/// Upper-left corner.
pub const ULCORNER: char = 'l';
/// Upper-right corner.
pub const URCORNER: char = 'k';
/// Lower-left corner.
pub const LLCORNER: char = 'm';
/// Lower-right corner.
pub const LRCORNER: char = 'j';

/// How line-drawing codes are rendered by a terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSet {
    /// Unicode box-drawing glyphs (`─ │ ┌ ┐ └ ┘`).
    #[default]
    Unicode,
    /// Plain ASCII (`- | +`).
    Ascii,
}

impl LineSet {
    /// Translate a line-drawing code. Other characters pass through.
    pub const fn translate(self, ch: char) -> char {
        match (self, ch) {
            (Self::Unicode, HLINE) => '─',
            (Self::Unicode, VLINE) => '│',
            (Self::Unicode, ULCORNER) => '┌',
            (Self::Unicode, URCORNER) => '┐',
            (Self::Unicode, LLCORNER) => '└',
            (Self::Unicode, LRCORNER) => '┘',
            (Self::Ascii, HLINE) => '-',
            (Self::Ascii, VLINE) => '|',
            (Self::Ascii, ULCORNER | URCORNER | LLCORNER | LRCORNER) => '+',
            _ => ch,
        }
    }
}
