//! Error types for historicdata.

use serde_json::Value;
use thiserror::Error;

/// Failure raised by the shared JSON request path.
///
/// Carries enough context to diagnose the failing call: the method name, the
/// parameters that were sent, the parsed response body when one was received,
/// and the underlying cause.
#[derive(Error, Debug)]
#[error("{method} request failed: {cause}")]
pub struct ApiError {
    /// Parsed response body, `None` for transport-level failures.
    pub response: Option<Value>,
    /// API method name that was attempted.
    pub method: String,
    /// Parameters sent with the request.
    pub params: Value,
    /// What went wrong.
    pub cause: ApiErrorCause,
}

/// The underlying cause of an [`ApiError`].
#[derive(Error, Debug)]
pub enum ApiErrorCause {
    /// The TCP connection to the service could not be established.
    #[error("ConnectionError")]
    Connection,

    /// Any other transport failure during the call.
    #[error("{0}")]
    Transport(String),

    /// The service replied with a non-success HTTP status.
    #[error("status code error: {status}")]
    Status {
        /// The HTTP status code received.
        status: u16,
    },
}
