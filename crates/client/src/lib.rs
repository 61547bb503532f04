//! GraphQL client for the jobdeck job board.
//!
//! The pieces, bottom-up:
//!
//! - [`envelope`]: the `{ query, variables }` wire envelope and the
//!   response/error shapes.
//! - [`documents`]: the fixed operation documents the board uses.
//! - [`auth`]: the [`CredentialProvider`] seam; a token becomes an
//!   `Authorization: Bearer` header, absence of one sends no header.
//! - [`cache`]: optional in-memory [`OperationCache`] keyed by
//!   operation + variables, read/write-through only.
//! - [`gateway`]: the [`Gateway`] itself, one `execute` primitive plus
//!   the typed accessors (`list_jobs`, `get_job`, `get_company`,
//!   `create_job`).
//!
//! There is deliberately no retry, no backoff, and no request
//! deduplication; failures surface as a [`GatewayError`] and the caller
//! decides presentation.

pub mod auth;
pub mod cache;
pub mod documents;
pub mod envelope;
pub mod error;
pub mod gateway;

pub use auth::{Anonymous, CredentialProvider, StaticToken};
pub use cache::{CacheKey, OperationCache};
pub use envelope::{GraphqlError, GraphqlRequest, GraphqlResponse};
pub use error::GatewayError;
pub use gateway::Gateway;
