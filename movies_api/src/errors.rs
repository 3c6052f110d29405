//! Error types for the API client.

/// Errors that can occur when building requests or fetching movie pages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// A movie record has no linked director and the normalizer was told to fail.
    #[error("Movie {movie_id} has no director")]
    MissingDirector { movie_id: i64 },
    /// Page size must be greater than zero.
    #[error("Invalid page size {0}, must be greater than zero")]
    InvalidPageSize(u32),
}
