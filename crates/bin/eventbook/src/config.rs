//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `eventbook.toml` in the working directory unless another path is
//! given on the command line. Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::path::Path;

use serde::Deserialize;

use eventbook_adapter_graphql_reqwest::GraphqlConfig;
use eventbook_app::page::{CreatorPolicy, LoadingPolicy, PageConfig};
use eventbook_domain::id::UserId;
use eventbook_domain::session::Session;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint settings.
    pub graphql: GraphqlConfig,
    /// Credentials handed over by the authentication provider.
    pub session: SessionConfig,
    /// Events page behaviour.
    pub page: PageSettings,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Session snapshot, usually injected through the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Bearer token of the acting user.
    pub token: Option<String>,
    /// Identifier of the acting user.
    pub user_id: Option<String>,
}

/// Events page policies.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// When the loading indicator is cleared.
    pub loading: LoadingSetting,
    /// Who is recorded as creator of a new event.
    pub creator: CreatorSetting,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingSetting {
    #[default]
    ClearOnSettle,
    ClearOnSuccessOnly,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatorSetting {
    #[default]
    Session,
    Server,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("EVENTBOOK_ENDPOINT") {
            self.graphql.endpoint = val;
        }
        if let Ok(val) = std::env::var("EVENTBOOK_TIMEOUT_SECS")
            && let Ok(secs) = val.parse()
        {
            self.graphql.timeout_secs = secs;
        }
        if let Ok(val) = std::env::var("EVENTBOOK_TOKEN") {
            self.session.token = Some(val);
        }
        if let Ok(val) = std::env::var("EVENTBOOK_USER_ID") {
            self.session.user_id = Some(val);
        }
        if let Ok(val) = std::env::var("EVENTBOOK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.graphql.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        if self.graphql.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Session snapshot to pass into page operations.
    #[must_use]
    pub fn session(&self) -> Session {
        Session {
            token: self.session.token.clone().filter(|t| !t.is_empty()),
            user_id: self
                .session
                .user_id
                .as_deref()
                .and_then(|id| id.parse::<UserId>().ok()),
        }
    }

    /// Page policies in the application layer's terms.
    #[must_use]
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            loading: match self.page.loading {
                LoadingSetting::ClearOnSettle => LoadingPolicy::ClearOnSettle,
                LoadingSetting::ClearOnSuccessOnly => LoadingPolicy::ClearOnSuccessOnly,
            },
            creator: match self.page.creator {
                CreatorSetting::Session => CreatorPolicy::Session,
                CreatorSetting::Server => CreatorPolicy::Server,
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eventbook=info,eventbook_app=info,eventbook_adapter_graphql_reqwest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
