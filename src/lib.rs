//! # spark-flex
//!
//! Flexbox layout for fixed-width terminal grids.
//!
//! ## Architecture
//!
//! Generic UI trees are translated into renderables, which render into flat
//! streams of styled segments:
//! ```text
//! TreeNode → Pipeline (middleware chain) → Renderable tree → render(width) → Vec<Segment>
//! ```
//!
//! Every render computes its full output from scratch; nothing is cached or
//! diffed between calls.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Segment, Style, flex enums)
//! - [`primitives`] - The Renderable trait and the Text leaf
//! - [`layout`] - FlexNode, spacing math, grid compositing, text measurement
//! - [`pipeline`] - TreeNode, Middleware, Pipeline and the built-in translators
//! - [`renderer`] - Plain-text and terminal output
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use layout::{FlexNode, FlexStyle, Spacing, compute_spacing, string_width, wrap_text};

pub use pipeline::{
    FlexTranslator, Middleware, Next, NodeKind, Pipeline, PipelineBuilder, TextTranslator,
    TreeNode,
};

pub use primitives::{Measurement, Renderable, Text};

pub use renderer::{print_renderable, terminal_width, to_plain_lines, to_plain_string, write_segments};
