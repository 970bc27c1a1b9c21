//! Text Primitive - A leaf that displays a string.
//!
//! Text cannot have children. It wraps its content to the width it is
//! rendered at and reports its natural width as its measurement.
//!
//! # Example
//!
//! ```
//! use spark_flex::{Renderable, Text, Attr, Style};
//!
//! let title = Text::styled("Hello, World!", Style::new().attrs(Attr::BOLD));
//! assert_eq!(title.measure(40).max, 13);
//! ```

use crate::error::Result;
use crate::layout::{widest_line, widest_word, wrap_text};
use crate::types::{Segment, Style};

use super::renderable::{Measurement, Renderable};

/// A block of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    content: String,
    style: Style,
}

impl Text {
    /// Unstyled text.
    pub fn new(content: impl Into<String>) -> Self {
        Self::styled(content, Style::default())
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl Renderable for Text {
    fn measure(&self, available_width: usize) -> Measurement {
        let max = widest_line(&self.content).min(available_width);
        let min = widest_word(&self.content).min(max);
        Measurement { min, max }
    }

    fn render(&self, available_width: usize) -> Result<Vec<Segment>> {
        let mut out = Vec::new();
        for (i, line) in wrap_text(&self.content, available_width).into_iter().enumerate() {
            if i > 0 {
                out.push(Segment::LineBreak);
            }
            if !line.is_empty() {
                out.push(Segment::styled(line, self.style));
            }
        }
        Ok(out)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    #[test]
    fn test_text_measure() {
        let text = Text::new("hello wonderful world");
        assert_eq!(text.measure(80), Measurement { min: 9, max: 21 });
        assert_eq!(text.measure(12), Measurement { min: 9, max: 12 });
        assert_eq!(text.measure(4), Measurement { min: 4, max: 4 });
    }

    #[test]
    fn test_text_measure_multiline() {
        let text = Text::new("ab\nabcdef");
        assert_eq!(text.measure(40), Measurement { min: 6, max: 6 });
    }

    #[test]
    fn test_text_render_single_line() {
        let text = Text::new("AB");
        assert_eq!(text.render(10).unwrap(), vec![Segment::text("AB")]);
    }

    #[test]
    fn test_text_render_wraps() {
        let text = Text::new("hello world");
        assert_eq!(
            text.render(5).unwrap(),
            vec![Segment::text("hello"), Segment::LineBreak, Segment::text("world")]
        );
    }

    #[test]
    fn test_text_render_keeps_style() {
        let style = Style::new().fg(Rgba::RED).attrs(Attr::BOLD);
        let text = Text::styled("hi", style);
        assert_eq!(text.render(10).unwrap(), vec![Segment::styled("hi", style)]);
        assert_eq!(text.style(), style);
    }

    #[test]
    fn test_text_render_empty() {
        assert!(Text::new("").render(10).unwrap().is_empty());
        assert_eq!(Text::new("").measure(10), Measurement::zero());
    }

    #[test]
    fn test_text_render_blank_line() {
        let text = Text::new("a\n\nb");
        assert_eq!(
            text.render(10).unwrap(),
            vec![
                Segment::text("a"),
                Segment::LineBreak,
                Segment::LineBreak,
                Segment::text("b"),
            ]
        );
    }

    #[test]
    fn test_text_render_wide_blank_line() {
        let text = Text::new("ab\n      \ncd");
        assert_eq!(
            text.render(3).unwrap(),
            vec![
                Segment::text("ab"),
                Segment::LineBreak,
                Segment::LineBreak,
                Segment::text("cd"),
            ]
        );
    }
}
