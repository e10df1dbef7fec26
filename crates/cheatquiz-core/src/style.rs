//! Terminal styling.
//!
//! The quiz never writes escape codes itself; it asks a [`Styler`] to paint
//! text in a [`StyleRole`]. [`AnsiStyler`] colors the text, [`PlainStyler`]
//! leaves it untouched for pipes, logs, and tests.

use colored::Colorize;

/// The colors the quiz uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Reset,
}

impl StyleRole {
    pub const ALL: [StyleRole; 6] = [
        StyleRole::Red,
        StyleRole::Green,
        StyleRole::Yellow,
        StyleRole::Blue,
        StyleRole::Cyan,
        StyleRole::Reset,
    ];
}

/// Strategy for rendering styled text.
pub trait Styler {
    /// Render `text` in `role`.
    fn paint(&self, role: StyleRole, text: &str) -> String;
}

/// ANSI color output.
///
/// Honors `NO_COLOR` and `CLICOLOR_FORCE` through `colored`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, role: StyleRole, text: &str) -> String {
        match role {
            StyleRole::Red => text.red().to_string(),
            StyleRole::Green => text.green().to_string(),
            StyleRole::Yellow => text.yellow().to_string(),
            StyleRole::Blue => text.blue().to_string(),
            StyleRole::Cyan => text.cyan().to_string(),
            StyleRole::Reset => text.normal().to_string(),
        }
    }
}

/// No-op styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _role: StyleRole, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a styler for the given color preference.
pub fn styler_for(color: bool) -> Box<dyn Styler> {
    if color {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}
