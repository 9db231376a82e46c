//! Styling helpers for terminal output.
//!
//! The [`ScaffoldStyle`] trait applies ANSI styling via the `colored` crate.
//! Implementations for `&str` and `String` are provided so string literals can
//! be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to scaffolder output.
pub trait ScaffoldStyle {
    fn heading_style(&self) -> ColoredString;
    fn retry_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn hint_style(&self) -> ColoredString;
}

impl ScaffoldStyle for &str {
    fn heading_style(&self) -> ColoredString {
        self.bold().truecolor(223, 77, 10)
    }
    fn retry_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn success_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn hint_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
}

impl ScaffoldStyle for String {
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn retry_style(&self) -> ColoredString {
        self.as_str().retry_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn hint_style(&self) -> ColoredString {
        self.as_str().hint_style()
    }
}
