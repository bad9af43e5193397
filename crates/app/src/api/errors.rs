//! Shop API errors.

use thiserror::Error;

/// Errors that can occur when talking to the shop backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered and declined. The message is the backend's own,
    /// suitable for showing to the customer.
    #[error("{0}")]
    Rejected(String),

    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// The response body could not be decoded into the expected shape.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend returned something the client has no mapping for.
    #[error("unexpected response from the shop API: {0}")]
    UnexpectedResponse(String),
}
