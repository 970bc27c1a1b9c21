//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Emoji: 2 cells (most)
//! - Zero-width characters: 0 cells

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single codepoint in terminal cells.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Misc Symbols and Dingbats (✨, ⚡)
        0x2600..=0x27BF => 2,
        // Pictographs, emoticons, transport
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF => 2,
        // Supplemental Symbols and Pictographs
        0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster in terminal cells.
///
/// Emoji sequences (ZWJ, VS16, skin tones, keycaps) and flags count as 2.
/// A base character followed by combining marks counts as the base.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        if matches!(c as u32, 0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF | 0x20E3) {
            return 2;
        }
    }

    char_width(first)
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Fast path: printable ASCII is one cell per byte
    if s.is_ascii() {
        return s.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }

    s.graphemes(true).map(grapheme_width).sum()
}

/// Width of the widest explicit line (split on `\n`).
pub fn widest_line(text: &str) -> usize {
    text.lines().map(string_width).max().unwrap_or(0)
}

/// Width of the widest whitespace-separated word.
pub fn widest_word(text: &str) -> usize {
    text.split_whitespace().map(string_width).max().unwrap_or(0)
}

/// Word-wrap text to a given width.
///
/// Explicit newlines always start a new line. A paragraph that fits is kept
/// verbatim; otherwise it is re-flowed word by word, and words wider than
/// `width` are broken at grapheme boundaries. A width of 0 disables wrapping.
///
/// Returns an empty vector for empty text.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if width == 0 || string_width(paragraph) <= width {
            lines.push(paragraph.to_string());
            continue;
        }
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let first_line = lines.len();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split_whitespace() {
        let word_width = string_width(word);
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Word is wider than the line: hard-break it
        for grapheme in word.graphemes(true) {
            let gw = grapheme_width(grapheme);
            if current_width + gw > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += gw;
        }
    }

    // A blank paragraph still occupies one line
    if !current.is_empty() || lines.len() == first_line {
        lines.push(current);
    }
}
