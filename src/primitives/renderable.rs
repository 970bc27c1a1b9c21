//! Renderable - The capability every layout item provides.
//!
//! Anything that can tell its parent how wide it wants to be and turn itself
//! into segments at a given width is a [`Renderable`]. Text leaves and flex
//! containers both implement it, so containers nest freely.

use std::fmt;

use crate::error::Result;
use crate::types::Segment;

// =============================================================================
// Measurement
// =============================================================================

/// Minimum and maximum width a renderable wants, in cells.
///
/// `min` is the narrowest width the content can be squeezed to; `max` is the
/// width it takes when given unlimited room. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Measurement {
    pub min: usize,
    pub max: usize,
}

impl Measurement {
    /// Create a measurement, raising `max` to `min` if needed.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub const fn zero() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Cap both bounds at `bound`.
    pub fn clamp_to(self, bound: usize) -> Self {
        Self {
            min: self.min.min(bound),
            max: self.max.min(bound),
        }
    }
}

// =============================================================================
// Renderable
// =============================================================================

/// Something that can be measured and rendered onto a fixed-width grid.
///
/// Both methods are pure: the same width always yields the same result.
pub trait Renderable: fmt::Debug {
    /// Size estimate when offered `available_width` cells.
    fn measure(&self, available_width: usize) -> Measurement;

    /// Render into segments at `available_width`.
    ///
    /// Rows are separated by [`Segment::LineBreak`]; there is no trailing
    /// line break after the last row.
    fn render(&self, available_width: usize) -> Result<Vec<Segment>>;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn measure(&self, available_width: usize) -> Measurement {
        (**self).measure(available_width)
    }

    fn render(&self, available_width: usize) -> Result<Vec<Segment>> {
        (**self).render(available_width)
    }
}
