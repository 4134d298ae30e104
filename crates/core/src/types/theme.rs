//! Colour theme preference.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error parsing a [`Theme`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?} (expected \"light\" or \"dark\")")]
pub struct ThemeError(pub String);

/// Light or dark page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse `"light"` or `"dark"`.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` for any other value.
    pub fn parse(s: &str) -> Result<Self, ThemeError> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError(other.to_owned())),
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Pick the initial theme: a stored choice wins, then the client's
    /// colour-scheme preference, then dark.
    #[must_use]
    pub fn resolve(stored: Option<Self>, prefers_light: Option<bool>) -> Self {
        stored.unwrap_or(match prefers_light {
            Some(true) => Self::Light,
            _ => Self::Dark,
        })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light").unwrap(), Theme::Light);
        assert_eq!(Theme::parse("dark").unwrap(), Theme::Dark);
        assert!(Theme::parse("sepia").is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some(Theme::Dark), Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Dark);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }
}
