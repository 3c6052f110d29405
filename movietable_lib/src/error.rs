//! Error types for the library layer.

use std::fmt;

/// Errors surfaced to the table: failed page loads, unreadable cache
/// entries, and rejected user input.
#[derive(Debug)]
pub enum MovieTableError {
    /// Loading from the content API failed.
    Api(movies_api::Error),
    /// A cached page or cache key could not be encoded or decoded.
    Serialization(serde_json::Error),
    /// User-provided table input failed validation.
    InvalidInput(String),
}

impl fmt::Display for MovieTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "Could not load movies: {}", e),
            Self::Serialization(e) => write!(f, "Could not read cached movies: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid table input: {}", msg),
        }
    }
}

impl std::error::Error for MovieTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<movies_api::Error> for MovieTableError {
    fn from(e: movies_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for MovieTableError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
