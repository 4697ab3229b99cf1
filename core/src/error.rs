//! Error types for the hero API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-expected responses land in `HttpError` with the raw
//! status code and body for debugging. `Transport` covers connection-level
//! failures raised before any HTTP status exists.
//!
//! `HeroClient` never returns these to its callers — every operation swallows
//! them into a fallback value and a message-log line. The type is public so
//! transport implementations can produce it and tests can inspect it.

use std::fmt;

/// Errors produced while executing or interpreting a hero API call.
#[derive(Debug)]
pub enum ApiError {
    /// The transport could not complete the round-trip (DNS, connect,
    /// socket, or body-read failure).
    Transport(String),

    /// The server returned 404 — the requested hero does not exist.
    NotFound,

    /// The server returned a non-expected status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
