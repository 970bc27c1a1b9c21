//! Core types for spark-flex.
//!
//! Styles, segments and the flex enums. Everything the layout engine
//! produces is expressed in these types; the renderer is the only consumer
//! that looks inside a [`Style`].

use crate::layout::string_width;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Parse a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or without the leading
    /// `#`. Surrounding whitespace is ignored.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Some(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => None,
        }
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Style
// =============================================================================

/// Opaque style carried by a text run.
///
/// `None` colors mean "terminal default". Layout never reads these fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: Attr::NONE,
        }
    }

    pub fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Rgba) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    /// True when the style carries nothing beyond terminal defaults.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

// =============================================================================
// Segment - The atomic unit of output
// =============================================================================

/// One unit of rendered output.
///
/// A rendered tree is a flat `Vec<Segment>`; rows are separated by
/// [`Segment::LineBreak`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A run of text with a style. Never contains a newline.
    Text { text: String, style: Style },
    /// `n` blank cells.
    Blank(usize),
    /// End of the current row.
    LineBreak,
}

impl Segment {
    /// Unstyled text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    /// Display width in terminal cells.
    pub fn cell_width(&self) -> usize {
        match self {
            Self::Text { text, .. } => string_width(text),
            Self::Blank(n) => *n,
            Self::LineBreak => 0,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

/// Justify content (main axis distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AlignItems {
    #[default]
    Start,
    End,
    Center,
    Stretch,
}

// =============================================================================
// Tests
// =============================================================================
