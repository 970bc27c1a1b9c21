//! Cell-buffer compositor.
//!
//! Flex items render to flat segment streams. To place them side by side or
//! stack them, the stream is cut into lines ([`Grid`]), every line is padded
//! to a common width, grids are padded to a common height, and the result is
//! interleaved back into a single stream.

use crate::types::{AlignItems, Segment};

use super::spacing::Spacing;

/// One row of segments, without line breaks.
pub type SegmentLine = Vec<Segment>;

// =============================================================================
// Line helpers
// =============================================================================

/// Cut a segment stream into lines at each [`Segment::LineBreak`].
///
/// An empty stream has no lines at all.
pub fn split_lines(segments: Vec<Segment>) -> Vec<SegmentLine> {
    if segments.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![Vec::new()];
    for segment in segments {
        if segment.is_line_break() {
            lines.push(Vec::new());
        } else if let Some(line) = lines.last_mut() {
            line.push(segment);
        }
    }
    lines
}

/// Join lines back into a stream, separated by line breaks.
pub fn join_lines(lines: Vec<SegmentLine>, out: &mut Vec<Segment>) {
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        out.extend(line);
    }
}

/// Cell width of a line.
pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_width).sum()
}

/// Append `n` blank cells, skipping empty runs.
pub fn push_blank(out: &mut Vec<Segment>, n: usize) {
    if n > 0 {
        out.push(Segment::Blank(n));
    }
}

/// A line of `width` blank cells.
pub fn blank_line(width: usize) -> SegmentLine {
    let mut line = Vec::with_capacity(1);
    push_blank(&mut line, width);
    line
}

/// Pad a line horizontally to `width` according to `align`.
///
/// `Stretch` pads like `Start`. Lines already at or beyond `width` are
/// returned unchanged.
pub fn align_line(line: SegmentLine, width: usize, align: AlignItems) -> SegmentLine {
    let deficit = width.saturating_sub(line_width(&line));
    if deficit == 0 {
        return line;
    }

    let (left, right) = match align {
        AlignItems::Start | AlignItems::Stretch => (0, deficit),
        AlignItems::End => (deficit, 0),
        AlignItems::Center => (deficit / 2, deficit - deficit / 2),
    };

    let mut out = Vec::with_capacity(line.len() + 2);
    push_blank(&mut out, left);
    out.extend(line);
    push_blank(&mut out, right);
    out
}

// =============================================================================
// Grid
// =============================================================================

/// A rendered item cut into lines, with the width of its widest line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub lines: Vec<SegmentLine>,
    pub width: usize,
}

impl Grid {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let lines = split_lines(segments);
        let width = lines.iter().map(|l| line_width(l)).max().unwrap_or(0);
        Self { lines, width }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Pad every line to the grid width, then pad vertically to `height`.
    ///
    /// `Start` and `Stretch` add blank lines at the bottom, `End` at the top,
    /// `Center` splits the deficit with the extra line at the bottom.
    pub fn normalize(self, height: usize, align: AlignItems) -> Self {
        let width = self.width;
        let deficit = height.saturating_sub(self.lines.len());

        let (top, bottom) = match align {
            AlignItems::Start | AlignItems::Stretch => (0, deficit),
            AlignItems::End => (deficit, 0),
            AlignItems::Center => (deficit / 2, deficit - deficit / 2),
        };

        let mut lines = Vec::with_capacity(self.lines.len() + deficit);
        lines.extend((0..top).map(|_| blank_line(width)));
        lines.extend(
            self.lines
                .into_iter()
                .map(|line| align_line(line, width, AlignItems::Start)),
        );
        lines.extend((0..bottom).map(|_| blank_line(width)));

        Self { lines, width }
    }
}

/// Interleave normalized grids column-wise into `out`.
///
/// Each row is `leading` blanks, every item's line separated by
/// `gap + between` blanks, then `trailing` blanks. Rows are separated by
/// line breaks. A grid missing a row contributes a full-width blank.
pub fn interleave_row(grids: &[Grid], height: usize, gap: usize, spacing: Spacing, out: &mut Vec<Segment>) {
    for row in 0..height {
        if row > 0 {
            out.push(Segment::LineBreak);
        }

        push_blank(out, spacing.leading);
        for (i, grid) in grids.iter().enumerate() {
            if i > 0 {
                push_blank(out, gap.saturating_add(spacing.between));
            }
            match grid.lines.get(row) {
                Some(line) => out.extend(line.iter().cloned()),
                None => push_blank(out, grid.width),
            }
        }
        push_blank(out, spacing.trailing);
    }
}
