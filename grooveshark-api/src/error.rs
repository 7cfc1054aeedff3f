//! Error types for the Grooveshark API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Grooveshark API.
///
/// "No data" is never an error: methods return `None` or an empty
/// collection for the not-found case so callers can tell "nothing found"
/// apart from "request failed".
#[derive(Debug, Error)]
pub enum Error {
    /// Bad client construction or missing required client state
    /// (empty key/secret, no country set for a country-scoped method).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed method-specific input, e.g. a bad IP address.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A method requiring session access was called with no session id set.
    /// Raised before any network activity; call
    /// [`start_session`](crate::GroovesharkClient::start_session) or
    /// [`set_session`](crate::GroovesharkClient::set_session) first.
    #[error("{method} requires a valid session id")]
    SessionRequired {
        /// The remote method that was about to be called.
        method: String,
    },

    /// The API endpoint answered with a non-200 HTTP status.
    #[error("unexpected HTTP status {status} from API")]
    Transport {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The service returned an explicit `errors` array in its envelope.
    ///
    /// Carries the code and message of the first error entry; fields the
    /// service omitted default to `0` / `""`.
    #[error("API error (code {code}): {message}")]
    Remote {
        /// Service-defined error code (not an HTTP status).
        code: i64,
        /// Human-readable error message from the service.
        message: String,
    },

    /// HTTP transport failure (connection refused, timeout, TLS failure).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize the request envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
