//! # Configuration
//!
//! gistup has no config file. Everything is resolved from flags and the
//! environment, in priority order:
//!
//! 1. **Explicit arguments**: `--token`, `--gist-id`.
//! 2. **Environment variables**: see the table below.
//! 3. **Compiled defaults**: [`Settings::default`].
//!
//! | Variable | Purpose |
//! |----------|---------|
//! | `GITHUB_TOKEN` | Token, checked first |
//! | `GH_TOKEN` | Token, checked second |
//! | `GIST_ID` | Gist to update instead of creating a new one |
//! | `GISTUP_API_URL` | Endpoint base, defaults to `https://api.github.com/gists` |

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com/gists";
pub const API_URL_ENV: &str = "GISTUP_API_URL";
pub const GIST_ID_ENV: &str = "GIST_ID";
pub const TOKEN_ENVS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

const TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL for gist calls; updates go to `<api_url>/<id>`.
    pub api_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: format!("gistup/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = non_empty(lookup(API_URL_ENV)) {
            settings.api_url = url.trim_end_matches('/').to_string();
        }
        settings
    }
}

/// Picks the explicit token if given, otherwise the first non-empty fallback variable.
pub fn resolve_token(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    non_empty(explicit.map(str::to_string))
        .or_else(|| TOKEN_ENVS.iter().find_map(|name| non_empty(lookup(name))))
}

pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
