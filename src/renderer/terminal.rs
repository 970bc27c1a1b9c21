//! Terminal output through crossterm.
//!
//! Writes a segment stream inline at the cursor: styled runs get their
//! colors and attributes, blanks become spaces, line breaks become `\r\n`.
//! Styles are reset after every styled run so nothing leaks into the next.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::error::Result;
use crate::primitives::Renderable;
use crate::types::{Attr, Rgba, Segment, Style};

/// Width used when no terminal is attached.
pub const FALLBACK_WIDTH: usize = 80;

const ATTRIBUTES: [(Attr, Attribute); 8] = [
    (Attr::BOLD, Attribute::Bold),
    (Attr::DIM, Attribute::Dim),
    (Attr::ITALIC, Attribute::Italic),
    (Attr::UNDERLINE, Attribute::Underlined),
    (Attr::BLINK, Attribute::SlowBlink),
    (Attr::INVERSE, Attribute::Reverse),
    (Attr::HIDDEN, Attribute::Hidden),
    (Attr::STRIKETHROUGH, Attribute::CrossedOut),
];

/// Current terminal width in columns.
///
/// Uses crossterm to query the terminal, falling back to
/// [`FALLBACK_WIDTH`] when stdout is not a terminal.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => usize::from(width),
        _ => FALLBACK_WIDTH,
    }
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

fn apply_style<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(to_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(to_color(bg)))?;
    }
    for (attr, attribute) in ATTRIBUTES {
        if style.attrs.contains(attr) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Write segments to `out` and flush.
pub fn write_segments<W: Write>(out: &mut W, segments: &[Segment]) -> Result<()> {
    for segment in segments {
        match segment {
            Segment::Text { text, style } if style.is_plain() => queue!(out, Print(text))?,
            Segment::Text { text, style } => {
                apply_style(out, style)?;
                queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
            }
            Segment::Blank(n) => queue!(out, Print(" ".repeat(*n)))?,
            Segment::LineBreak => queue!(out, Print("\r\n"))?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Render at the terminal width and print to stdout, ending with a newline.
pub fn print_renderable(renderable: &dyn Renderable) -> Result<()> {
    let segments = renderable.render(terminal_width())?;
    let mut stdout = io::stdout().lock();
    write_segments(&mut stdout, &segments)?;
    queue!(stdout, Print("\r\n"))?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(segments: &[Segment]) -> String {
        let mut out = Vec::new();
        write_segments(&mut out, segments).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_plain_segments() {
        let out = written(&[
            Segment::text("AB"),
            Segment::Blank(2),
            Segment::LineBreak,
            Segment::text("C"),
        ]);
        assert_eq!(out, "AB  \r\nC");
    }

    #[test]
    fn test_write_styled_segment() {
        let style = Style::new().fg(Rgba::RED).attrs(Attr::BOLD);
        let out = written(&[Segment::styled("hot", style)]);

        assert!(out.contains("\x1b[38;2;255;0;0m"));
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("hot"));
        // Reset after the run
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_terminal_width_is_positive() {
        assert!(terminal_width() > 0);
    }
}
