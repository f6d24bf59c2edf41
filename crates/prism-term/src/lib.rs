#![warn(missing_docs)]

//! Console helpers for prism tools.
//!
//! - [`TermColor`] and [`write_colored`] for ANSI colour-coded output
//! - [`c_print!`] / [`c_eprint!`] as coloured `print!` / `eprint!`
//! - [`Timer`] for wall-clock timing of a render or benchmark step

mod color;
mod timer;

pub use color::{term_color, write_colored, TermColor, COLOR_RESET};
pub use timer::Timer;
