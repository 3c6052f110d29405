//! Request and result values exchanged with the presentation layer.

use serde::{Deserialize, Serialize};

use crate::{query::SortDirection, Error};

use super::movie::Movie;

/// A single (field, direction) pair controlling result ordering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SortDirective {
    pub field_id: String,
    pub descending: bool,
}

impl SortDirective {
    pub fn new(field_id: &str, direction: SortDirection) -> Self {
        Self {
            field_id: field_id.to_string(),
            descending: direction == SortDirection::Desc,
        }
    }

    pub fn asc(field_id: &str) -> Self {
        Self::new(field_id, SortDirection::Asc)
    }

    pub fn desc(field_id: &str) -> Self {
        Self::new(field_id, SortDirection::Desc)
    }

    pub fn direction(&self) -> SortDirection {
        if self.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Which page to fetch and how to order it.
///
/// `page_index` is 0-based like the table state; the query builder shifts it
/// to the API's 1-based page number. The page size is checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page_index: u32,
    page_size: u32,
    sorting: Vec<SortDirective>,
}

impl PageRequest {
    pub fn new(page_index: u32, page_size: u32, sorting: Vec<SortDirective>) -> Result<Self, Error> {
        if page_size == 0 {
            tracing::error!("Rejected page request with zero page size");
            return Err(Error::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_index,
            page_size,
            sorting,
        })
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// 1-based page number sent to the API.
    pub fn page_number(&self) -> u64 {
        u64::from(self.page_index) + 1
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sorting(&self) -> &[SortDirective] {
        &self.sorting
    }

    /// Same size and ordering, different page.
    pub fn at_page(&self, page_index: u32) -> Self {
        Self {
            page_index,
            ..self.clone()
        }
    }
}

/// One page of normalized movies and the number of pages the source reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub rows: Vec<Movie>,
    pub page_count: u32,
}
