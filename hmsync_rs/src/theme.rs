//! Theme preference persisted in browser storage.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// `localStorage` key holding the preference.
pub const STORAGE_KEY: &str = "landing-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected light, dark or system)")]
pub struct ThemeParseError(pub String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Class applied to the document root. `System` follows the OS setting.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Theme::System if prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            other => other,
        }
    }

    /// Toggle target from the currently displayed theme.
    pub fn toggled(self, prefers_dark: bool) -> Theme {
        match self.resolve(prefers_dark) {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Stored value, falling back to the default for missing or garbage input.
    pub fn from_storage(value: Option<&str>) -> Theme {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" system ".parse::<Theme>(), Ok(Theme::System));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeParseError("sepia".to_string()))
        );
    }

    #[test]
    fn storage_falls_back_to_light() {
        assert_eq!(Theme::from_storage(None), Theme::Light);
        assert_eq!(Theme::from_storage(Some("bogus")), Theme::Light);
        assert_eq!(Theme::from_storage(Some("dark")), Theme::Dark);
    }

    #[test]
    fn system_follows_os() {
        assert_eq!(Theme::System.resolve(true), Theme::Dark);
        assert_eq!(Theme::System.resolve(false), Theme::Light);
        assert_eq!(Theme::Dark.resolve(false), Theme::Dark);
    }

    #[test]
    fn toggle_flips_displayed_theme() {
        assert_eq!(Theme::Light.toggled(false), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(false), Theme::Light);
        assert_eq!(Theme::System.toggled(true), Theme::Light);
        assert_eq!(Theme::System.toggled(false), Theme::Dark);
    }
}
