//! Library layer for the movie table: cached API client, input validation,
//! and the table view-model that drives pagination and sorting.
//!
//! Wraps the `movies_api` crate with an in-memory TTL cache keyed by the
//! full page request.

pub mod cache;
pub mod client;
pub mod error;
pub mod table;
pub mod validation;

pub use movies_api;
pub use movies_api::types;
pub use movies_api::{
    MissingDirector, Movie, PageRequest, PageResult, SortDirection, SortDirective,
};

pub use client::CachedClient;
pub use error::MovieTableError;
pub use table::{Column, MovieTable, TableOptions};
