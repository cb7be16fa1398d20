//! Terminal colors and display width.

/// Foreground colors used in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Diagnostics.
    Red,
    /// Station names.
    Cyan,
    /// Available seats.
    Magenta,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
        }
    }
}

const RESET: &str = "\x1b[39m";

/// Applies colors, or doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Wrap `text` in `color`.
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("{}{}{}", color.code(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

/// Whether a seat-count cell signals availability.
///
/// `"--"` (not offered) and `"无"` (sold out) are plain; `"有"` and any
/// literal count are emphasized.
pub fn seats_available(value: &str) -> bool {
    (value != "--" && value != "无") || value == "有"
}

/// Terminal columns occupied by `text`. Wide (CJK, fullwidth) characters
/// take two columns.
///
/// Every other non-control character counts as one column, including
/// combining marks and zero-width characters such as U+200B, so text using
/// them measures wider than it renders. Station names and seat counts from
/// the ticket service don't contain any.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6 => 2,
        0x0000..=0x001F | 0x007F => 0,
        _ => 1,
    }
}
