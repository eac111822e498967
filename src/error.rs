//! Library error types.

use thiserror::Error;

/// Errors from the grade engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    /// A reduction was asked for the best or worst of zero subjects.
    #[error("cannot pick an extremal subject from an empty list")]
    EmptyInput,
}

/// Errors returned by the results server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The login endpoint rejected the credentials.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The server answered with a non-success status.
    #[error("API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Errors while restoring or decoding a login session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token is not a JWT (expected three dot-separated segments)")]
    MalformedToken,

    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),

    #[error("session expired; log in again")]
    Expired,

    #[error("token store I/O failed: {0}")]
    Store(#[from] std::io::Error),
}
