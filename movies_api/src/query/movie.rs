use url::{form_urlencoded, Url};

use crate::types::{PageRequest, SortDirective};

use super::{common::QueryCommon, Query};

/// Query for the `/api/movies` endpoints.
///
/// The default query populates the `director` relation and carries no page
/// directive, which is what the single-movie endpoint expects.
pub struct MovieQuery {
    pub common: QueryCommon,
    pub populate: Vec<String>,
    pub sort: Vec<SortDirective>,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::default(),
            populate: vec!["director".to_string()],
            sort: Vec::new(),
        }
    }
}

impl Query for MovieQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (i, relation) in self.populate.iter().enumerate() {
            pairs.push((format!("populate[{}]", i), encode(relation)));
        }
        pairs.extend(self.common.query_pairs());
        for (i, directive) in self.sort.iter().enumerate() {
            pairs.push((
                format!("sort[{}]", i),
                format!(
                    "{}{}",
                    encode(&directive.field_id),
                    directive.direction().suffix()
                ),
            ));
        }
        pairs
    }
}

impl MovieQuery {
    pub fn with_populate(mut self, relation: &str) -> Self {
        self.populate.push(relation.to_string());
        self
    }

    pub fn with_sort(mut self, directive: SortDirective) -> Self {
        self.sort.push(directive);
        self
    }

    pub fn with_sorts(mut self, directives: &[SortDirective]) -> Self {
        self.sort.extend_from_slice(directives);
        self
    }
}

impl From<&PageRequest> for MovieQuery {
    fn from(request: &PageRequest) -> Self {
        // The table state is 0-indexed, the API pages from 1.
        MovieQuery::default()
            .with_page(request.page_number())
            .with_page_size(request.page_size())
            .with_sorts(request.sorting())
    }
}

/// Builds the query string for listing the page described by `request`.
pub fn build_query(request: &PageRequest) -> String {
    MovieQuery::from(request).to_query_string()
}

/// Builds the full list URL for `request` against `base`.
pub fn build_url(base: &Url, request: &PageRequest) -> Url {
    MovieQuery::from(request).add_to_url(base)
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
