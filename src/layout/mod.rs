//! Layout Module
//!
//! Flexbox layout over renderables on a fixed-width cell grid.
//!
//! # Architecture
//!
//! - [`text_measure`]: Unicode cell widths and word wrapping
//! - [`spacing`]: main-axis free space distribution per justify policy
//! - [`compositor`]: cutting segment streams into grids, padding, interleaving
//! - [`flex`]: the [`FlexNode`] container itself
//!
//! # Example
//!
//! ```
//! use spark_flex::{FlexNode, FlexStyle, JustifyContent, Renderable, Text};
//! use spark_flex::renderer::to_plain_string;
//!
//! let node = FlexNode::new(
//!     vec![Box::new(Text::new("AB"))],
//!     FlexStyle::default().justify(JustifyContent::End),
//! );
//! assert_eq!(to_plain_string(&node.render(10).unwrap()), "        AB");
//! ```

pub mod compositor;
pub mod flex;
pub mod spacing;
pub mod text_measure;

pub use compositor::{Grid, SegmentLine, line_width, split_lines};
pub use flex::{FlexNode, FlexStyle};
pub use spacing::{Spacing, compute_spacing};
pub use text_measure::*;
