//! Shared Error Types
//!
//! This module defines the failure value surfaced by the API access
//! layer. The error keeps its distinguishing detail (transport failure
//! vs. remote rejection vs. malformed body) so callers *could* branch on
//! kind, but the UI boundary collapses every kind into one generic
//! phrase via [`ApiError::user_message`].
//!
//! # Error Categories
//!
//! - `Network` - the request never reached the server or no response arrived
//! - `Remote` - the server responded with a non-2xx status
//! - `Decode` - the response body did not match the expected shape
//! - `Session` - a cached profile/token needed to build the request is absent
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across
//! thread boundaries.
use thiserror::Error;

/// Generic failure phrase shown to the user for any API failure.
pub const GENERIC_FAILURE: &str = "Something went wrong; please try again later.";

/// Fixed phrase shown when a login attempt fails, regardless of cause.
pub const LOGIN_FAILURE: &str = "Log in failed";

/// Normalized failure value returned by the API access layer
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Transport-level failure: the request never completed
    #[error("network failure: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server responded with a non-2xx status
    #[error("remote rejection: status {status}, body: {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// The response body could not be decoded into the expected type
    #[error("decode error: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// No cached session where one is required to build the request
    #[error("session error: {message}")]
    Session {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new remote-rejection error
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// The single generic phrase surfaced to the user.
    ///
    /// Every kind collapses to the same message; callers that want finer
    /// handling can match on the variant instead.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}
