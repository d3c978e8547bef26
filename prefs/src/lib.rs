//! Shared theme preference model and HTTP wire bodies.
//!
//! This crate owns the JSON representation exchanged between the `themesync`
//! server and the `client` page for the theme and tips endpoints. Request bodies keep the theme as a raw
//! string so the server can answer malformed values with a 400 instead of a
//! generic extractor rejection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme value: {0:?}")]
pub struct InvalidTheme(pub String);

/// The user's chosen display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Wire and storage name of the preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Map a checkbox-style control state to a preference (`checked` = dark).
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl FromStr for ThemePreference {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(InvalidTheme(other.to_owned())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// WIRE BODIES
// =============================================================================

/// Body of `GET /theme/settings`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl ThemeSettings {
    #[must_use]
    pub fn new(theme: ThemePreference) -> Self {
        Self { theme: Some(theme.as_str().to_owned()) }
    }

    /// Resolve the advertised preference. A missing field means light.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTheme`] if the field is present but not a known name.
    pub fn preference(&self) -> Result<ThemePreference, InvalidTheme> {
        match self.theme.as_deref() {
            None => Ok(ThemePreference::Light),
            Some(raw) => raw.parse(),
        }
    }
}

/// Body of `POST /theme/toggle`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToggleRequest {
    #[serde(default)]
    pub theme: Option<String>,
}

impl ThemeToggleRequest {
    #[must_use]
    pub fn new(theme: ThemePreference) -> Self {
        Self { theme: Some(theme.as_str().to_owned()) }
    }
}

/// Success body of `POST /theme/toggle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToggleResponse {
    pub success: bool,
    pub theme: ThemePreference,
}

/// Success body of `POST /tips/disable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsDisableResponse {
    pub success: bool,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
