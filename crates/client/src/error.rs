//! Failure taxonomy for the gateway.
//!
//! Callers get one of four distinguishable situations: the transport
//! broke, the server answered outside the GraphQL contract, the server
//! reported GraphQL errors, or a singular lookup came back empty. There
//! is no silent-empty success path anywhere.

/// Errors surfaced by [`Gateway`](crate::gateway::Gateway) operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (connect, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response whose body carried no GraphQL errors.
    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The server reported GraphQL errors.
    ///
    /// `message` is every `errors[].message` joined by newlines, in
    /// array order; the display form is that text verbatim so it can be
    /// shown to the user unchanged.
    #[error("{message}")]
    Graphql { message: String },

    /// A singular lookup (`job(id:)`, `company(id:)`) returned null.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The response body or payload did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A 2xx response carried neither `data` nor `errors`.
    #[error("Response contained neither data nor errors")]
    MissingData,
}
