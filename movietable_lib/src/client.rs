//! Caching wrapper around the API client.

use movies_api::{Client, MissingDirector, Movie, PageRequest, PageResult};

use crate::cache::MemoryCache;
use crate::error::MovieTableError;

/// API client wrapper that caches normalized pages in memory.
///
/// Pages are keyed by the full request (index, size and every sort
/// directive), so changing any of them is a cache miss. Cache hits bypass
/// the network entirely. Failures are never cached.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
}

impl CachedClient {
    /// Creates a new cached client against the default local server.
    pub fn new(cache: MemoryCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
        }
    }

    /// Creates a new cached client with a custom base URL.
    pub fn with_base_url(base_url: &str, cache: MemoryCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            cache,
        }
    }

    /// Sets what normalization does with movies that have no director.
    pub fn with_missing_director(mut self, missing_director: MissingDirector) -> Self {
        self.inner = self.inner.with_missing_director(missing_director);
        self
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Fetches one normalized page, returning cached results when available.
    pub async fn fetch_movies(&self, request: &PageRequest) -> Result<PageResult, MovieTableError> {
        let cache_key = request_to_cache_key(request)?;

        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!("Cache hit for {}", cache_key);
            let page: PageResult = serde_json::from_str(&cached)?;
            return Ok(page);
        }

        let page = self.inner.fetch_movies(request).await?;
        self.store(cache_key, serde_json::to_string(&page));
        Ok(page)
    }

    /// Fetches a single movie by ID, returning cached results when available.
    pub async fn get_movie(&self, movie_id: i64) -> Result<Movie, MovieTableError> {
        let cache_key = format!("movie:{}", movie_id);

        if let Some(cached) = self.cache.get(&cache_key) {
            let movie: Movie = serde_json::from_str(&cached)?;
            return Ok(movie);
        }

        let movie = self.inner.get_movie(movie_id).await?;
        self.store(cache_key, serde_json::to_string(&movie));
        Ok(movie)
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Caches a serialized value. A failed serialization is logged and skipped;
    /// the fetched value is still returned to the caller.
    fn store(&self, cache_key: String, json: serde_json::Result<String>) {
        match json {
            Ok(json) => self.cache.set(cache_key, json),
            Err(e) => tracing::warn!("Failed to cache {}: {}", cache_key, e),
        }
    }
}

/// Sort directives are JSON-encoded so that field ids containing `:` or `,`
/// cannot collide with a different directive list.
fn request_to_cache_key(request: &PageRequest) -> Result<String, MovieTableError> {
    Ok(format!(
        "movies:p{}:s{}:o{}",
        request.page_index(),
        request.page_size(),
        serde_json::to_string(request.sorting())?,
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use movies_api::SortDirective;

    use super::*;

    #[test]
    fn cache_key_without_sorting() {
        let request = PageRequest::new(0, 10, vec![]).unwrap();
        assert_eq!(request_to_cache_key(&request).unwrap(), "movies:p0:s10:o[]");
    }

    #[test]
    fn cache_key_distinguishes_sort_order() {
        let a = PageRequest::new(
            1,
            20,
            vec![SortDirective::asc("name"), SortDirective::desc("releaseYear")],
        )
        .unwrap();
        let b = PageRequest::new(
            1,
            20,
            vec![SortDirective::desc("releaseYear"), SortDirective::asc("name")],
        )
        .unwrap();
        assert_eq!(
            request_to_cache_key(&a).unwrap(),
            r#"movies:p1:s20:o[{"fieldId":"name","descending":false},{"fieldId":"releaseYear","descending":true}]"#
        );
        assert_ne!(
            request_to_cache_key(&a).unwrap(),
            request_to_cache_key(&b).unwrap()
        );
    }

    #[test]
    fn cache_key_separators_inside_field_id_do_not_collide() {
        let joined = PageRequest::new(0, 10, vec![SortDirective::asc("a:asc,b")]).unwrap();
        let split = PageRequest::new(
            0,
            10,
            vec![SortDirective::asc("a"), SortDirective::asc("b")],
        )
        .unwrap();
        assert_ne!(
            request_to_cache_key(&joined).unwrap(),
            request_to_cache_key(&split).unwrap()
        );
    }

    #[test]
    fn store_caches_serialized_value() {
        let client = CachedClient::new(MemoryCache::new(Duration::from_secs(60)));
        client.store("movie:1".to_string(), Ok("{}".to_string()));
        assert_eq!(client.cache.get("movie:1"), Some("{}".to_string()));
    }

    #[test]
    fn store_skips_failed_serialization() {
        let client = CachedClient::new(MemoryCache::new(Duration::from_secs(60)));
        let failed = serde_json::from_str::<i64>("not json").map(|v| v.to_string());
        client.store("movie:1".to_string(), failed);
        assert_eq!(client.cache.get("movie:1"), None);
        assert!(client.cache.is_empty());
    }
}
