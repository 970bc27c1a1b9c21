//! Primitives - Renderable building blocks.
//!
//! - [`Renderable`] - the measure/render capability shared by every item
//! - [`Text`] - a leaf that displays wrapped text
//!
//! Containers ([`FlexNode`](crate::layout::FlexNode)) live in the layout
//! module and hold boxed renderables, so any of these can be nested.

mod renderable;
mod text;

pub use renderable::{Measurement, Renderable};
pub use text::Text;
