//! Renderer Module
//!
//! Turns segment streams into something a human can see: plain strings, or
//! styled output on a terminal.

mod plain;
mod terminal;

pub use plain::{to_plain_lines, to_plain_string};
pub use terminal::{FALLBACK_WIDTH, print_renderable, terminal_width, write_segments};
