//! ANSI styling for text output.

/// Role-based escape codes used by the text renderers.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Location, vehicle and part names.
    pub const NAME: &str = "\x1b[1;97m";
    /// Secondary details such as facilities and installed parts.
    pub const MUTED: &str = "\x1b[90m";
    /// Compass directions.
    pub const DIRECTION: &str = "\x1b[36m";
    /// Numeric figures such as part boosts.
    pub const METRIC: &str = "\x1b[32m";
}

/// Escape codes resolved for the current terminal; empty when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub name: &'static str,
    pub muted: &'static str,
    pub direction: &'static str,
    pub metric: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            name: colors::NAME,
            muted: colors::MUTED,
            direction: colors::DIRECTION,
            metric: colors::METRIC,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            name: "",
            muted: "",
            direction: "",
            metric: "",
        }
    }

    /// Palette for the current process environment.
    #[must_use]
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        Self::for_environment(std::env::var_os("NO_COLOR").is_some(), term.as_deref())
    }

    /// Palette for an explicit `NO_COLOR` flag and `TERM` value.
    #[must_use]
    pub fn for_environment(no_color: bool, term: Option<&str>) -> Self {
        if color_enabled(no_color, term) {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Color is off when `NO_COLOR` is set (https://no-color.org/) or `TERM=dumb`.
#[must_use]
pub fn color_enabled(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_wins_over_capable_terminal() {
        assert!(!color_enabled(true, Some("xterm-256color")));
        assert_eq!(
            ColorPalette::for_environment(true, Some("xterm-256color")),
            ColorPalette::plain()
        );
    }

    #[test]
    fn dumb_terminal_is_plain() {
        assert!(!color_enabled(false, Some("DUMB")));
    }

    #[test]
    fn regular_or_unknown_terminal_is_colored() {
        assert!(color_enabled(false, Some("xterm-256color")));
        assert!(color_enabled(false, None));
        let palette = ColorPalette::for_environment(false, None);
        assert_eq!(palette.direction, colors::DIRECTION);
        assert!(!palette.reset.is_empty());
    }
}
