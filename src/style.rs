// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Terminal styling, built on [owo_colors]
//!
//! ```
//! use advent::style::{answer, paint};
//! use owo_colors::OwoColorize;
//!
//! assert_eq!(paint(42, Some(answer())).to_string(), 42_i32.style(answer()).to_string());
//! assert_eq!(paint(42, None).to_string(), "42");
//! ```

use std::fmt::{self, Display};

use owo_colors::OwoColorize;
pub use owo_colors::Style;

/// The style puzzle answers are printed in
pub fn answer() -> Style {
    Style::new().bold().green()
}

/// The style for highlighted grid cells
pub fn highlight() -> Style {
    Style::new().reversed()
}

/// A value displayed with an optional [Style]
///
/// Created with [paint].
#[derive(Debug, Clone, Copy)]
pub struct Styled<T> {
    value: T,
    style: Option<Style>,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Some(style) => self.value.style(style).fmt(f),
            None => self.value.fmt(f),
        }
    }
}

/// Display `value` with `style` applied, or unchanged if `style` is [None]
pub fn paint<T>(value: T, style: Option<Style>) -> Styled<T> {
    Styled { value, style }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyled_has_no_escapes() {
        assert_eq!(paint("plain", None).to_string(), "plain");
    }

    #[test]
    fn styled_wraps_value() {
        let s = paint('#', Some(highlight())).to_string();
        assert!(s.starts_with("\x1b["));
        assert!(s.contains('#'));
        assert!(s.ends_with("\x1b[0m"));
    }
}
