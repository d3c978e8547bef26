//! Server configuration parsed from environment variables.
//!
//! `.env` files are loaded by `main` via `dotenvy` before this runs, so the
//! same keys work from either source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://themesync.db";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Emitted to the page as `window.show_tips`.
    pub show_tips: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            show_tips: true,
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `DATABASE_URL`: default `sqlite://themesync.db`
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `SHOW_TIPS`: default true
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unparseable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL")
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.database_url),
            port: parse_or(lookup("PORT"), defaults.port),
            db_max_connections: parse_or(lookup("DB_MAX_CONNECTIONS"), defaults.db_max_connections),
            show_tips: lookup("SHOW_TIPS")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(defaults.show_tips),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
