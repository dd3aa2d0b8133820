//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for the prompts and the
//! torque report.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold cyan for section headings.
    pub const CYAN_BOLD: &str = "\x1b[1;36m";
    /// Bright bold white for computed values.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for defaults and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Orange (256-color) for the safety disclaimer.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for rejected input.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub value: &'static str,
    pub muted: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::CYAN_BOLD,
            value: colors::WHITE_BOLD,
            muted: colors::GRAY,
            warning: colors::ORANGE,
            error: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            value: "",
            muted: "",
            warning: "",
            error: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    ///
    /// Returns `colored()` if the terminal supports ANSI colors,
    /// otherwise returns `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_palette_colored() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert!(!p.heading.is_empty());
        assert!(!p.warning.is_empty());
    }

    #[test]
    fn test_color_palette_plain() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.heading.is_empty());
        assert!(p.value.is_empty());
        assert!(p.muted.is_empty());
        assert!(p.warning.is_empty());
        assert!(p.error.is_empty());
    }
}
