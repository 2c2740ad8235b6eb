//! Custom error types for the Cookbook client
//!
//! This module defines the error type shared by the API client, the session
//! layer and the views.

use thiserror::Error;

/// Message shown to the user when a failure carries nothing more specific
pub const GENERIC_FAILURE: &str = "Something went wrong!";

/// Custom error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Form input rejected before any request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No session, or the server rejected an attached bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Network failure or undecodable response body
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the recipe service
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Error reading or writing client storage
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Error encoding or decoding a stored record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session token could not be decoded
    #[error("Invalid token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// API base URL that cannot carry request paths
    #[error("Invalid API base URL: {0}")]
    BaseUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ::config::ConfigError),
}

impl ClientError {
    /// Text for the error notification raised by a failed operation
    ///
    /// Request failures stay generic; the server's message only goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Unauthorized => "Please sign in to continue.".to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
