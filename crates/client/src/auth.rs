//! Credential seam for the gateway.
//!
//! Auth state is never read ambiently: the gateway holds a
//! [`CredentialProvider`] and asks it for a token on every request, so
//! an expiring token source (OAuth refresh, keychain, interactive
//! login) can slot in without the gateway knowing. The two bundled
//! providers cover the common cases: [`Anonymous`] for logged-out use
//! and [`StaticToken`] for a token fixed at startup.

use async_trait::async_trait;

/// Supplies the bearer token for outgoing requests.
///
/// Called once per request. `Some(token)` becomes an
/// `Authorization: Bearer <token>` header; `None` means the request
/// goes out with no `Authorization` header at all.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn access_token(&self) -> Option<String>;
}

/// Provider for anonymous access; never yields a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait]
impl CredentialProvider for Anonymous {
    async fn access_token(&self) -> Option<String> {
        None
    }
}

/// Provider wrapping one fixed token, e.g. from configuration.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl CredentialProvider for StaticToken {
    async fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

// Keep the token itself out of debug output and logs.
impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StaticToken(<redacted>)")
    }
}
