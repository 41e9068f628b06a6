//! Attribute masks and the named attribute registry.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use std::collections::HashMap;

bitflags! {
    /// Attribute mask understood by a [`Surface`](crate::surface::Surface).
    ///
    /// The layout follows the curses convention: the low byte is the
    /// character part, the second byte holds a colour-pair index and the
    /// boolean attributes sit above that. Masks combine with bitwise OR.
    ///
    /// # Example
    /// ```
    /// use vexes::Attr;
    /// let style = Attr::BOLD | Attr::REVERSE;
    /// assert!(style.contains(Attr::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u32 {
        /// Character bits of a cell ("extract").
        const CHARTEXT = 0x0000_00ff;
        /// Colour-pair bits.
        const COLOR = 0x0000_ff00;
        /// Best highlighting mode of the terminal.
        const STANDOUT = 1 << 16;
        /// Underlined text
        const UNDERLINE = 1 << 17;
        /// Reversed colors (fg/bg swapped)
        const REVERSE = 1 << 18;
        /// Blinking text
        const BLINK = 1 << 19;
        /// Dim/faint text
        const DIM = 1 << 20;
        /// Bold text
        const BOLD = 1 << 21;
        /// Line-drawing (alternate) character set
        const ALTERNATE = 1 << 22;
        /// Hidden/invisible text
        const INVISIBLE = 1 << 23;
        /// Protected cell
        const PROTECTED = 1 << 24;
    }
}

impl Attr {
    /// The neutral mask.
    pub const NORMAL: Self = Self::empty();

    const COLOR_SHIFT: u32 = 8;

    /// Mask selecting colour pair `pair`.
    #[inline]
    pub const fn color_pair(pair: u8) -> Self {
        Self::from_bits_retain((pair as u32) << Self::COLOR_SHIFT)
    }

    /// Colour-pair index carried by this mask (0 when none).
    #[inline]
    pub const fn pair(self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let pair = ((self.bits() & Self::COLOR.bits()) >> Self::COLOR_SHIFT) as u8;
        pair
    }

    /// Palette colour carried by this mask, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        Color::from_pair(self.pair())
    }
}

impl std::fmt::Debug for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// The fixed eight-colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
}

impl Color {
    /// Every palette colour, in pair order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Registry name of the colour.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Colour-pair index. Pair 0 is reserved for "no colour".
    pub const fn pair(self) -> u8 {
        self as u8 + 1
    }

    /// Look up the colour registered under a pair index.
    pub fn from_pair(pair: u8) -> Option<Self> {
        Self::ALL.get(usize::from(pair.checked_sub(1)?)).copied()
    }
}

impl From<Color> for Attr {
    #[inline]
    fn from(color: Color) -> Self {
        Self::color_pair(color.pair())
    }
}

static ATTRIBUTES: Lazy<HashMap<&'static str, Attr>> = Lazy::new(|| {
    let mut table = HashMap::from([
        ("standout", Attr::STANDOUT),
        ("underline", Attr::UNDERLINE),
        ("reverse", Attr::REVERSE),
        ("blink", Attr::BLINK),
        ("dim", Attr::DIM),
        ("bold", Attr::BOLD),
        ("protected", Attr::PROTECTED),
        ("invisible", Attr::INVISIBLE),
        ("alternate", Attr::ALTERNATE),
        ("extract", Attr::CHARTEXT),
    ]);
    table.extend(Color::ALL.iter().map(|&c| (c.name(), Attr::from(c))));
    table
});

/// Every name the registry knows.
pub fn attribute_names() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES.keys().copied()
}

/// Resolve a capability name to its attribute code.
///
/// Unknown names resolve to [`Attr::NORMAL`].
pub fn resolve(name: &str) -> Attr {
    ATTRIBUTES.get(name).copied().unwrap_or_else(|| {
        log::debug!("unknown attribute {name:?}, using normal");
        Attr::NORMAL
    })
}

/// OR any number of attribute codes into one mask.
pub fn combine<I>(codes: I) -> Attr
where
    I: IntoIterator<Item = Attr>,
{
    codes.into_iter().fold(Attr::NORMAL, |acc, code| acc | code)
}
