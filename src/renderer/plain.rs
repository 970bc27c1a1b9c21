//! Plain-text output.
//!
//! Drops styles and turns blank runs into spaces. Handy for logs, snapshots
//! and anything that is not a terminal.

use crate::layout::split_lines;
use crate::types::Segment;

/// Render segments as one string per row.
pub fn to_plain_lines(segments: &[Segment]) -> Vec<String> {
    split_lines(segments.to_vec())
        .into_iter()
        .map(|line| {
            let mut row = String::new();
            for segment in line {
                match segment {
                    Segment::Text { text, .. } => row.push_str(&text),
                    Segment::Blank(n) => row.extend(std::iter::repeat_n(' ', n)),
                    Segment::LineBreak => {}
                }
            }
            row
        })
        .collect()
}

/// Render segments as a single string with `\n` between rows.
pub fn to_plain_string(segments: &[Segment]) -> String {
    to_plain_lines(segments).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Style};

    #[test]
    fn test_plain_lines() {
        let segments = vec![
            Segment::Blank(2),
            Segment::styled("ab", Style::new().attrs(Attr::BOLD)),
            Segment::LineBreak,
            Segment::text("c"),
            Segment::Blank(1),
        ];
        assert_eq!(to_plain_lines(&segments), vec!["  ab", "c "]);
        assert_eq!(to_plain_string(&segments), "  ab\nc ");
    }

    #[test]
    fn test_plain_empty() {
        assert!(to_plain_lines(&[]).is_empty());
        assert_eq!(to_plain_string(&[]), "");
        assert_eq!(to_plain_lines(&[Segment::LineBreak]), vec!["", ""]);
    }
}
