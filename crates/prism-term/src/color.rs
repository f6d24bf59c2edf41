//! ANSI colour codes.

use std::fmt;
use std::io::{self, Write};

/// Escape sequence that restores the terminal's default colour.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Foreground colours selectable by index `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    /// `ESC[32m`
    Green,
    /// `ESC[33m`
    Yellow,
    /// `ESC[34m`
    Blue,
    /// `ESC[35m`
    Magenta,
    /// `ESC[36m`
    Cyan,
}

impl TermColor {
    /// All colours in index order.
    pub const ALL: [TermColor; 5] = [
        TermColor::Green,
        TermColor::Yellow,
        TermColor::Blue,
        TermColor::Magenta,
        TermColor::Cyan,
    ];

    /// Colour for index `k`, cycling past the last one.
    pub fn from_index(k: usize) -> Self {
        Self::ALL[k % Self::ALL.len()]
    }

    /// The escape sequence selecting this colour.
    pub fn code(self) -> &'static str {
        match self {
            TermColor::Green => "\x1b[32m",
            TermColor::Yellow => "\x1b[33m",
            TermColor::Blue => "\x1b[34m",
            TermColor::Magenta => "\x1b[35m",
            TermColor::Cyan => "\x1b[36m",
        }
    }
}

impl fmt::Display for TermColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Escape sequence for colour `k`; same as `TermColor::from_index(k).code()`.
pub fn term_color(k: usize) -> &'static str {
    TermColor::from_index(k).code()
}

/// Write `args` to `w` wrapped in `color` and [`COLOR_RESET`].
pub fn write_colored<W: Write>(
    w: &mut W,
    color: TermColor,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    w.write_all(color.code().as_bytes())?;
    w.write_fmt(args)?;
    w.write_all(COLOR_RESET.as_bytes())
}

/// Coloured `print!`. Write errors are ignored, as with `print!` on a closed pipe.
#[macro_export]
macro_rules! c_print {
    ($color:expr, $($arg:tt)*) => {{
        let _ = $crate::write_colored(&mut ::std::io::stdout().lock(), $color, format_args!($($arg)*));
    }};
}

/// Coloured `eprint!`.
#[macro_export]
macro_rules! c_eprint {
    ($color:expr, $($arg:tt)*) => {{
        let _ = $crate::write_colored(&mut ::std::io::stderr().lock(), $color, format_args!($($arg)*));
    }};
}
