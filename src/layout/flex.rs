//! Flex Layout Node
//!
//! One-dimensional flexbox over already-renderable children.
//!
//! # Algorithm
//!
//! **Row** (main axis horizontal):
//! 1. Partition items into flex lines (only when wrapping)
//! 2. Render each item of a line and cut it into a [`Grid`]
//! 3. Distribute the free space per `justify` ([`compute_spacing`])
//! 4. Normalize every grid to the line height per `align`
//! 5. Interleave the grids row by row
//!
//! **Column** (main axis vertical): render every item at full width, then
//! stack them with blank lines for gap and justify, padding each line
//! horizontally per `align`.
//!
//! Overflow is never truncated: when content exceeds the available space the
//! free space is simply zero.

use tracing::debug;

use crate::error::Result;
use crate::primitives::{Measurement, Renderable};
use crate::types::{AlignItems, FlexDirection, FlexWrap, JustifyContent, Segment};

use super::compositor::{Grid, align_line, blank_line, interleave_row, join_lines, split_lines, SegmentLine};
use super::spacing::compute_spacing;

// =============================================================================
// FlexStyle
// =============================================================================

/// Flex container configuration.
///
/// Built with chained setters from [`FlexStyle::default`], which is a
/// non-wrapping row with start justification and start alignment.
///
/// ```
/// use spark_flex::{FlexStyle, FlexDirection, JustifyContent};
///
/// let style = FlexStyle::default()
///     .direction(FlexDirection::Column)
///     .justify(JustifyContent::SpaceBetween)
///     .gap(-3);
/// assert_eq!(style.gap_cells(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FlexStyle {
    direction: FlexDirection,
    justify: JustifyContent,
    align: AlignItems,
    wrap: FlexWrap,
    gap: usize,
    width: Option<usize>,
    height: Option<usize>,
}

impl FlexStyle {
    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: AlignItems) -> Self {
        self.align = align;
        self
    }

    pub fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Gap between adjacent items in cells. Negative values clamp to 0.
    pub fn gap(mut self, gap: i64) -> Self {
        self.gap = usize::try_from(gap).unwrap_or(0);
        self
    }

    /// Explicit width cap. 0 means no cap.
    pub fn width(mut self, width: usize) -> Self {
        self.width = (width > 0).then_some(width);
        self
    }

    /// Explicit height. 0 means content height.
    pub fn height(mut self, height: usize) -> Self {
        self.height = (height > 0).then_some(height);
        self
    }

    pub fn get_direction(&self) -> FlexDirection {
        self.direction
    }

    pub fn get_justify(&self) -> JustifyContent {
        self.justify
    }

    pub fn get_align(&self) -> AlignItems {
        self.align
    }

    pub fn get_wrap(&self) -> FlexWrap {
        self.wrap
    }

    pub fn gap_cells(&self) -> usize {
        self.gap
    }

    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    pub fn get_height(&self) -> Option<usize> {
        self.height
    }

    /// The width actually used when offered `available_width`.
    pub fn effective_width(&self, available_width: usize) -> usize {
        match self.width {
            Some(w) => w.min(available_width),
            None => available_width,
        }
    }
}

// =============================================================================
// FlexNode
// =============================================================================

/// A flex container.
///
/// Owns its items for its whole lifetime; there is no way to add or remove
/// items after construction.
#[derive(Debug)]
pub struct FlexNode {
    items: Vec<Box<dyn Renderable>>,
    style: FlexStyle,
}

impl FlexNode {
    pub fn new(items: Vec<Box<dyn Renderable>>, style: FlexStyle) -> Self {
        Self { items, style }
    }

    pub fn items(&self) -> &[Box<dyn Renderable>] {
        &self.items
    }

    pub fn style(&self) -> &FlexStyle {
        &self.style
    }

    /// Stored gap in cells (never negative).
    pub fn gap(&self) -> usize {
        self.style.gap
    }

    /// Partition items into flex lines for a row at `width`.
    ///
    /// Returns index ranges into `items`. Without wrapping there is exactly
    /// one line (empty only when there are no items).
    pub fn flex_lines(&self, width: usize) -> Vec<std::ops::Range<usize>> {
        if self.items.is_empty() {
            return Vec::new();
        }
        if self.style.wrap == FlexWrap::NoWrap {
            return vec![0..self.items.len()];
        }

        let gap = self.style.gap;
        let mut lines = Vec::new();
        let mut start = 0;
        let mut running = 0usize;

        for (i, item) in self.items.iter().enumerate() {
            let item_width = item.measure(width).max;

            if i == start {
                running = item_width;
                continue;
            }

            let extended = running.saturating_add(gap).saturating_add(item_width);
            if extended <= width {
                running = extended;
            } else {
                lines.push(start..i);
                start = i;
                running = item_width;
            }
        }
        lines.push(start..self.items.len());
        lines
    }

    // =========================================================================
    // Row
    // =========================================================================

    fn render_row(&self, width: usize) -> Result<Vec<Segment>> {
        let FlexStyle { justify, align, gap, .. } = self.style;
        let lines = self.flex_lines(width);
        debug!(items = self.items.len(), lines = lines.len(), width, "flex row render");

        let mut out = Vec::new();
        for (line_index, range) in lines.into_iter().enumerate() {
            if line_index > 0 {
                out.push(Segment::LineBreak);
            }

            let items = &self.items[range];
            let mut grids = Vec::with_capacity(items.len());
            for item in items {
                grids.push(Grid::from_segments(item.render(width)?));
            }

            let line_height = grids.iter().map(Grid::height).max().unwrap_or(0);
            let content_width = main_axis_width(grids.iter().map(|g| g.width), gap);
            let free_space = width.saturating_sub(content_width);
            let spacing = compute_spacing(justify, free_space, grids.len());

            let grids: Vec<Grid> = grids
                .into_iter()
                .map(|g| g.normalize(line_height, align))
                .collect();
            interleave_row(&grids, line_height, gap, spacing, &mut out);
        }
        Ok(out)
    }

    // =========================================================================
    // Column
    // =========================================================================

    fn render_column(&self, width: usize) -> Result<Vec<Segment>> {
        let FlexStyle { justify, align, gap, height, .. } = self.style;
        debug!(items = self.items.len(), width, "flex column render");

        if self.items.is_empty() {
            return Ok(Vec::new());
        }

        let mut rendered: Vec<Vec<SegmentLine>> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            rendered.push(split_lines(item.render(width)?));
        }

        let content_height = rendered.iter().map(Vec::len).sum::<usize>()
            + gap * rendered.len().saturating_sub(1);
        let target_height = height.unwrap_or(content_height);
        let free_space = target_height.saturating_sub(content_height);
        let spacing = compute_spacing(justify, free_space, rendered.len());

        let mut lines: Vec<SegmentLine> = Vec::with_capacity(target_height.max(content_height));
        lines.extend((0..spacing.leading).map(|_| blank_line(width)));
        for (i, item_lines) in rendered.into_iter().enumerate() {
            if i > 0 {
                lines.extend((0..gap + spacing.between).map(|_| blank_line(width)));
            }
            lines.extend(item_lines.into_iter().map(|line| align_line(line, width, align)));
        }
        lines.extend((0..spacing.trailing).map(|_| blank_line(width)));

        let mut out = Vec::new();
        join_lines(lines, &mut out);
        Ok(out)
    }
}

/// Sum of item widths plus a gap between each pair, saturating at `usize::MAX`.
fn main_axis_width(widths: impl ExactSizeIterator<Item = usize>, gap: usize) -> usize {
    let gaps = gap.saturating_mul(widths.len().saturating_sub(1));
    widths.fold(gaps, usize::saturating_add)
}

impl Renderable for FlexNode {
    fn measure(&self, available_width: usize) -> Measurement {
        if self.items.is_empty() {
            return Measurement::zero();
        }

        let bound = self.style.effective_width(available_width);
        let measurements: Vec<Measurement> = self.items.iter().map(|i| i.measure(bound)).collect();

        let min = measurements.iter().map(|m| m.min).max().unwrap_or(0);
        let max = match self.style.direction {
            FlexDirection::Row => main_axis_width(measurements.iter().map(|m| m.max), self.style.gap),
            FlexDirection::Column => measurements.iter().map(|m| m.max).max().unwrap_or(0),
        };

        Measurement::new(min, max).clamp_to(bound)
    }

    fn render(&self, available_width: usize) -> Result<Vec<Segment>> {
        let width = self.style.effective_width(available_width);
        match self.style.direction {
            FlexDirection::Row => self.render_row(width),
            FlexDirection::Column => self.render_column(width),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
