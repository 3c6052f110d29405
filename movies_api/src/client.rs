//! HTTP client for the movie content API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    normalize::{MissingDirector, Normalizer},
    query::{MovieQuery, Query},
    types::{Movie, MovieAttributes, PageRequest, PageResult, PaginatedResponse, Response},
    Error,
};

/// HTTP client for the movie content API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// No authentication headers are sent.
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:1337`.
    base_api_url: String,
    normalizer: Normalizer,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the local content server.
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:1337")
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            normalizer: Normalizer::default(),
        }
    }

    /// Sets what normalization does with movies that have no director.
    pub fn with_missing_director(mut self, missing_director: MissingDirector) -> Self {
        self.normalizer = Normalizer::new(missing_director);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedResponse(e.to_string())
        })?;

        Ok(parsed)
    }

    /// Fetches the raw movie list for the given query.
    pub async fn get_movies(
        &self,
        query: &MovieQuery,
    ) -> Result<PaginatedResponse<MovieAttributes>, Error> {
        self.get::<PaginatedResponse<MovieAttributes>, MovieQuery>("/api/movies", Some(query))
            .await
    }

    /// Fetches a single raw movie entity by its numeric ID.
    pub async fn get_movie_entity(&self, movie_id: i64) -> Result<Response<MovieAttributes>, Error> {
        self.get::<Response<MovieAttributes>, MovieQuery>(
            format!("/api/movies/{}", movie_id).as_str(),
            Some(&MovieQuery::default()),
        )
        .await
    }

    /// Fetches and normalizes the page described by `request`.
    pub async fn fetch_movies(&self, request: &PageRequest) -> Result<PageResult, Error> {
        let resp = self.get_movies(&MovieQuery::from(request)).await?;
        let mut page = self.normalizer.page(&resp)?;

        let page_size = request.page_size() as usize;
        if page.rows.len() > page_size {
            tracing::warn!(
                "Server returned {} movies for page size {}, truncating",
                page.rows.len(),
                page_size
            );
            page.rows.truncate(page_size);
        }
        Ok(page)
    }

    /// Fetches and normalizes one movie.
    pub async fn get_movie(&self, movie_id: i64) -> Result<Movie, Error> {
        let resp = self.get_movie_entity(movie_id).await?;
        self.normalizer.movie(&resp.data)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
