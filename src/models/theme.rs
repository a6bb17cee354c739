//! Display theme values.

use std::fmt;
use std::str::FromStr;

/// Named visual variant persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follow the operating system preference.
    System,
}

impl Theme {
    /// Every selectable theme, in menu order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Storage/serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Resolve to a concrete light/dark variant.
    ///
    /// `prefers_dark` is the current `(prefers-color-scheme: dark)` match and
    /// only matters for [`Theme::System`].
    pub fn resolved(self, prefers_dark: bool) -> Theme {
        match self {
            Self::System if prefers_dark => Self::Dark,
            Self::System => Self::Light,
            concrete => concrete,
        }
    }

    /// Next theme for the navbar toggle (light ↔ dark, system → light).
    pub fn toggled(self, prefers_dark: bool) -> Theme {
        match self.resolved(prefers_dark) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strings that are not one of the enumerated themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "solarized".parse::<Theme>(),
            Err(UnknownTheme("solarized".to_string()))
        );
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_resolved_system() {
        assert_eq!(Theme::System.resolved(true), Theme::Dark);
        assert_eq!(Theme::System.resolved(false), Theme::Light);
        assert_eq!(Theme::Light.resolved(true), Theme::Light);
        assert_eq!(Theme::Dark.resolved(false), Theme::Dark);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Dark.toggled(false), Theme::Light);
        assert_eq!(Theme::Light.toggled(true), Theme::Dark);
        assert_eq!(Theme::System.toggled(true), Theme::Light);
        assert_eq!(Theme::System.toggled(false), Theme::Dark);
    }
}
