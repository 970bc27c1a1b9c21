//! Main-axis spacing.
//!
//! Turns a justify policy and the free space on a flex line into the blank
//! run before the first item, between adjacent items, and after the last.
//! The same math serves rows (cells) and columns (lines).

use crate::types::JustifyContent;

/// Spacing around and between `n` items on one flex line.
///
/// `leading + between * (n - 1) + trailing` always equals the free space the
/// spacing was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub leading: usize,
    pub between: usize,
    pub trailing: usize,
}

impl Spacing {
    /// Total space consumed by this spacing for `count` items.
    pub fn total(&self, count: usize) -> usize {
        self.leading + self.between * count.saturating_sub(1) + self.trailing
    }
}

/// Distribute `free_space` over `count` items according to `justify`.
///
/// Leading and between slots are truncated independently; whatever integer
/// remainder is left lands in `trailing`.
pub fn compute_spacing(justify: JustifyContent, free_space: usize, count: usize) -> Spacing {
    let gaps = count.saturating_sub(1);

    let (leading, between) = match justify {
        JustifyContent::Start => (0, 0),
        JustifyContent::End => (free_space, 0),
        JustifyContent::Center => (free_space / 2, 0),
        JustifyContent::SpaceBetween if count > 1 => (0, free_space / gaps),
        JustifyContent::SpaceAround if count > 1 => (free_space / (2 * count), free_space / count),
        JustifyContent::SpaceEvenly => {
            let slot = free_space / (count + 1);
            (slot, slot)
        }
        // A single item has nothing to space between
        JustifyContent::SpaceBetween | JustifyContent::SpaceAround => (free_space / 2, 0),
    };

    Spacing {
        leading,
        between,
        trailing: free_space - leading - between * gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [JustifyContent; 6] = [
        JustifyContent::Start,
        JustifyContent::End,
        JustifyContent::Center,
        JustifyContent::SpaceBetween,
        JustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly,
    ];

    fn spacing(leading: usize, between: usize, trailing: usize) -> Spacing {
        Spacing { leading, between, trailing }
    }

    #[test]
    fn test_start_end_center() {
        assert_eq!(compute_spacing(JustifyContent::Start, 8, 2), spacing(0, 0, 8));
        assert_eq!(compute_spacing(JustifyContent::End, 8, 2), spacing(8, 0, 0));
        assert_eq!(compute_spacing(JustifyContent::Center, 9, 2), spacing(4, 0, 5));
    }

    #[test]
    fn test_space_between() {
        assert_eq!(compute_spacing(JustifyContent::SpaceBetween, 10, 3), spacing(0, 5, 0));
        // Remainder is not spread over the edges
        assert_eq!(compute_spacing(JustifyContent::SpaceBetween, 11, 3), spacing(0, 5, 1));
        // Single item falls back to center
        assert_eq!(compute_spacing(JustifyContent::SpaceBetween, 7, 1), spacing(3, 0, 4));
    }

    #[test]
    fn test_space_around() {
        // edge = 12 / 6, between = 12 / 3
        assert_eq!(compute_spacing(JustifyContent::SpaceAround, 12, 3), spacing(2, 4, 2));
        assert_eq!(compute_spacing(JustifyContent::SpaceAround, 10, 3), spacing(1, 3, 3));
        assert_eq!(compute_spacing(JustifyContent::SpaceAround, 6, 1), spacing(3, 0, 3));
    }

    #[test]
    fn test_space_evenly() {
        assert_eq!(compute_spacing(JustifyContent::SpaceEvenly, 12, 3), spacing(3, 3, 3));
        assert_eq!(compute_spacing(JustifyContent::SpaceEvenly, 10, 2), spacing(3, 3, 4));
        assert_eq!(compute_spacing(JustifyContent::SpaceEvenly, 5, 1), spacing(2, 0, 3));
    }

    #[test]
    fn test_zero_free_space() {
        for justify in ALL {
            assert_eq!(compute_spacing(justify, 0, 4), Spacing::default());
        }
    }

    #[test]
    fn test_spacing_always_sums_to_free_space() {
        for justify in ALL {
            for count in 1..=7 {
                for free in 0..=40 {
                    let s = compute_spacing(justify, free, count);
                    assert_eq!(
                        s.total(count),
                        free,
                        "{justify:?} free={free} count={count} -> {s:?}"
                    );
                }
            }
        }
    }
}
