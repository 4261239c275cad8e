//! Posts client error types

use thiserror::Error;

/// Posts client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request URL could not be built
    #[error("Invalid URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    /// A request header name or value is not valid HTTP
    #[error("Invalid header `{0}`")]
    InvalidHeader(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request to {0} timed out")]
    Timeout(String),
}

/// Result type for posts client operations
pub type ClientResult<T> = Result<T, ClientError>;
