//! Flattens the nested list response into [`PageResult`] rows.

use crate::{
    types::{Entity, Movie, MovieAttributes, PaginatedResponse, PageResult},
    Error,
};

/// What to do with a movie whose director relation is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MissingDirector {
    /// Fail the whole page with [`Error::MissingDirector`].
    #[default]
    Fail,
    /// Use the given name instead.
    Placeholder(String),
}

/// Turns API entities into flat [`Movie`] records.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    missing_director: MissingDirector,
}

impl Normalizer {
    pub fn new(missing_director: MissingDirector) -> Self {
        Self { missing_director }
    }

    pub fn missing_director(&self) -> &MissingDirector {
        &self.missing_director
    }

    /// Normalizes one entity.
    pub fn movie(&self, entity: &Entity<MovieAttributes>) -> Result<Movie, Error> {
        let director = match (entity.attributes.director_name(), &self.missing_director) {
            (Some(name), _) => name.to_string(),
            (None, MissingDirector::Placeholder(placeholder)) => {
                tracing::debug!("Movie {} has no director, using placeholder", entity.id);
                placeholder.clone()
            }
            (None, MissingDirector::Fail) => {
                tracing::error!("Movie {} has no director", entity.id);
                return Err(Error::MissingDirector {
                    movie_id: entity.id,
                });
            }
        };
        Ok(Movie {
            id: entity.id,
            name: entity.attributes.name.clone(),
            release_year: entity.attributes.release_year,
            director,
        })
    }

    /// Normalizes every record of a list response. `page_count` is taken from
    /// the source as-is.
    pub fn page(&self, response: &PaginatedResponse<MovieAttributes>) -> Result<PageResult, Error> {
        let rows = response
            .data
            .iter()
            .map(|entity| self.movie(entity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PageResult {
            rows,
            page_count: response.meta.pagination.page_count,
        })
    }

    /// Normalizes an already parsed JSON body.
    pub fn page_from_value(&self, body: serde_json::Value) -> Result<PageResult, Error> {
        let response: PaginatedResponse<MovieAttributes> =
            serde_json::from_value(body).map_err(|e| {
                tracing::error!("Response does not match the movie list shape: {}", e);
                Error::MalformedResponse(e.to_string())
            })?;
        self.page(&response)
    }
}

/// Normalizes a parsed list body, failing on movies without a director.
pub fn normalize(body: serde_json::Value) -> Result<PageResult, Error> {
    Normalizer::default().page_from_value(body)
}
