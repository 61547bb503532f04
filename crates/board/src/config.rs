//! Board configuration loaded from environment variables.

use std::sync::Arc;

use jobdeck_client::{Anonymous, CredentialProvider, StaticToken};

/// Endpoint used when `JOBDECK_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/graphql";

/// Runtime configuration for the board binary.
///
/// All fields have defaults suitable for a local backend. Command-line
/// flags override environment variables (see `main.rs`).
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// GraphQL endpoint URL (default: `http://localhost:9000/graphql`).
    pub endpoint: String,
    /// Bearer token for authenticated operations, if any.
    pub token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Endpoint must start with http:// or https://, got: '{0}'")]
    InvalidEndpoint(String),
}

impl BoardConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Default                          |
    /// |--------------------|----------------------------------|
    /// | `JOBDECK_ENDPOINT` | `http://localhost:9000/graphql`  |
    /// | `JOBDECK_TOKEN`    | unset (anonymous)                |
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("JOBDECK_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());

        let token = std::env::var("JOBDECK_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self { endpoint, token }
    }

    /// Reject endpoints that cannot be a GraphQL URL before any request
    /// is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidEndpoint(self.endpoint.clone()))
        }
    }

    /// Credential provider matching this configuration: a static bearer
    /// token when one is configured, anonymous otherwise.
    pub fn credentials(&self) -> Arc<dyn CredentialProvider> {
        match &self.token {
            Some(token) => Arc::new(StaticToken::new(token)),
            None => Arc::new(Anonymous),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
