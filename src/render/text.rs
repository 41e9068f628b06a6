//! Text: A run of characters anchored at a point.

use super::{with_attr, Draw, Placement};
use crate::geometry::Vec2i;
use crate::surface::{Surface, WindowId};

/// A string drawn one character per cell.
///
/// When centered, the run starts half its length (in characters, truncated)
/// before the anchor. When vertical, it advances down the rows instead of
/// across the columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    text: String,
    half_length: i32,
    centered: bool,
    vertical: bool,
    placement: Placement,
}

impl Text {
    /// Create a left-aligned, horizontal run at `pos`.
    pub fn new(text: impl Into<String>, pos: Vec2i) -> Self {
        let text = text.into();
        Self {
            half_length: half_length(&text),
            text,
            centered: false,
            vertical: false,
            placement: Placement::at(pos),
        }
    }

    /// Builder: center the run on its anchor.
    #[must_use]
    pub const fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Builder: run along the vertical axis.
    #[must_use]
    pub const fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// The text drawn.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.half_length = half_length(&self.text);
    }

    /// Whether the run is centered on its anchor.
    pub const fn is_centered(&self) -> bool {
        self.centered
    }

    /// Center (or stop centering) the run on its anchor.
    pub const fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
    }

    /// Whether the run is vertical.
    pub const fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Switch between the vertical and horizontal axis.
    pub const fn set_vertical(&mut self, vertical: bool) {
        self.vertical = vertical;
    }

    /// Cell of the first character.
    pub fn origin(&self) -> Vec2i {
        let mut origin = self.placement.pos;
        if self.centered {
            if self.vertical {
                origin.y -= self.half_length;
            } else {
                origin.x -= self.half_length;
            }
        }
        origin
    }

    const fn step(&self) -> Vec2i {
        if self.vertical {
            Vec2i::new(0, 1)
        } else {
            Vec2i::new(1, 0)
        }
    }
}

fn half_length(text: &str) -> i32 {
    i32::try_from(text.chars().count() / 2).unwrap_or(i32::MAX)
}

impl Draw for Text {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface, win: Option<WindowId>) {
        let step = self.step();
        with_attr(surface, win, self.placement.attr, |s| {
            let mut cursor = self.origin();
            for ch in self.text.chars() {
                s.write_char(win, cursor, ch);
                cursor = cursor + step;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Attr;
    use crate::surface::Canvas;

    #[test]
    fn test_text_left_aligned() {
        let mut canvas = Canvas::new(20, 3);
        Text::new("hello", Vec2i::new(2, 1)).draw(&mut canvas, None);
        assert_eq!(canvas.row_text(1), "  hello             ");
    }

    #[test]
    fn test_text_centered() {
        let mut canvas = Canvas::new(20, 3);
        let text = Text::new("hello", Vec2i::new(10, 0)).with_centered(true);
        assert_eq!(text.origin(), Vec2i::new(8, 0));
        text.draw(&mut canvas, None);
        assert_eq!(canvas.row_text(0).trim_end(), "        hello");
    }

    #[test]
    fn test_text_centered_even_length() {
        let text = Text::new("abcd", Vec2i::new(10, 0)).with_centered(true);
        assert_eq!(text.origin(), Vec2i::new(8, 0));
    }

    #[test]
    fn test_text_vertical_centered() {
        let mut canvas = Canvas::new(5, 10);
        let text = Text::new("abc", Vec2i::new(1, 5))
            .with_vertical(true)
            .with_centered(true);
        text.draw(&mut canvas, None);

        assert_eq!(canvas.char_at(Vec2i::new(1, 4)), Some('a'));
        assert_eq!(canvas.char_at(Vec2i::new(1, 5)), Some('b'));
        assert_eq!(canvas.char_at(Vec2i::new(1, 6)), Some('c'));
    }

    #[test]
    fn test_text_set_text_recenters() {
        let mut text = Text::new("ab", Vec2i::new(10, 0)).with_centered(true);
        assert_eq!(text.origin(), Vec2i::new(9, 0));
        text.set_text("abcdefgh");
        assert_eq!(text.text(), "abcdefgh");
        assert_eq!(text.origin(), Vec2i::new(6, 0));
    }

    #[test]
    fn test_text_attributes() {
        let mut canvas = Canvas::new(10, 1);
        let mut text = Text::new("ok", Vec2i::ZERO);
        text.set_attributes(Attr::REVERSE | Attr::BOLD);
        text.draw(&mut canvas, None);

        assert_eq!(canvas.attr_at(Vec2i::new(1, 0)), Some(Attr::REVERSE | Attr::BOLD));
        assert_eq!(canvas.attr_at(Vec2i::new(2, 0)), Some(Attr::NORMAL));
    }

    #[test]
    fn test_text_clipped_at_edge() {
        let mut canvas = Canvas::new(4, 1);
        Text::new("overflow", Vec2i::new(1, 0)).draw(&mut canvas, None);
        assert_eq!(canvas.row_text(0), " ove");
    }
}
