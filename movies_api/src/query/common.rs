//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Returns the `key=value` pairs of this query, in the order they are sent.
    ///
    /// Keys use the bracket notation of the content API (`pagination[page]`)
    /// and are emitted without percent-encoding.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return url;
        }
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => {
                format!("{}&{}", existing, join_pairs(&pairs))
            }
            _ => join_pairs(&pairs),
        };
        url.set_query(Some(&query));
        url
    }

    /// Renders the bare query string, without a leading `?`.
    fn to_query_string(&self) -> String {
        join_pairs(&self.query_pairs())
    }

    /// Sets the page number (1-indexed, as the API expects).
    fn with_page(mut self, page: u64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, page_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = Some(page_size);
        self
    }
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sort order for a single sort directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order. This is the default and carries no suffix on the wire.
    #[default]
    Asc,
    /// Descending order, sent as `field:desc`.
    Desc,
}

impl SortDirection {
    /// Wire suffix appended to the field name.
    pub fn suffix(&self) -> &'static str {
        match self {
            SortDirection::Asc => "",
            SortDirection::Desc => ":desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Pagination fields shared by all query types.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryCommon {
    /// Page number (1-indexed). `None` leaves the page directive out.
    pub page: Option<u64>,
    /// Results per page. `None` uses the API default.
    pub page_size: Option<u32>,
}

impl QueryCommon {
    /// Returns the page directive pairs that are set.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("pagination[page]".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pagination[pageSize]".to_string(), page_size.to_string()));
        }
        pairs
    }
}
