// src/config.rs
// =============================================================================
// Runtime settings.
//
// Precedence, lowest to highest:
// 1. Built-in defaults (public GitHub API, the "apple" organization)
// 2. Environment variables (GITHUB_API_URL, GITHUB_ORG, GITHUB_CLIENT_USER_AGENT)
// 3. Command-line flags (applied by main.rs through Settings::with_overrides)
// =============================================================================

use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_ORG: &str = "apple";
pub const DEFAULT_USER_AGENT: &str = concat!("github-client/", env!("CARGO_PKG_VERSION"));

// How long --mock mode pretends the network takes
const DEFAULT_MOCK_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{0}' cannot carry a path")]
    CannotBeABase(String),

    #[error("organization name must not be empty")]
    EmptyOrg,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: Url,
    pub org: String,
    pub user_agent: String,
    pub mock_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // A constant that is known to parse
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
            org: DEFAULT_ORG.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            mock_delay: DEFAULT_MOCK_DELAY,
        }
    }
}

impl Settings {
    /// Defaults overlaid with whatever the process environment provides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Split out so tests don't have to touch the real environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(v) = lookup("GITHUB_API_URL") {
            settings.api_base_url = parse_base_url(&v)?;
        }
        if let Some(v) = lookup("GITHUB_ORG") {
            settings.org = validate_org(v)?;
        }
        if let Some(v) = lookup("GITHUB_CLIENT_USER_AGENT") {
            settings.user_agent = v;
        }

        Ok(settings)
    }

    /// Applies command-line overrides on top of the current values.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        org: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = api_base_url {
            self.api_base_url = parse_base_url(url)?;
        }
        if let Some(org) = org {
            self.org = validate_org(org.to_string())?;
        }
        Ok(self)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(raw.to_string()));
    }

    Ok(url)
}

fn validate_org(org: String) -> Result<String, ConfigError> {
    let org = org.trim().to_string();
    if org.is_empty() {
        return Err(ConfigError::EmptyOrg);
    }
    Ok(org)
}
