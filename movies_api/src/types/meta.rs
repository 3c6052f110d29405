//! Envelope types shared by every content API response.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Meta {
    pub pagination: Pagination,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Total number of pages for the current page size. Authoritative.
    pub page_count: u32,
    pub total: Option<u64>,
}

/// A stored record: the numeric id next to its attribute object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Entity<T> {
    pub id: i64,
    pub attributes: T,
}

/// A populated relation. `data` is `null` when nothing is linked.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Relation<T> {
    pub data: Option<Related<T>>,
}

/// The linked side of a [`Relation`]. Some responses omit its id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Related<T> {
    pub id: Option<i64>,
    pub attributes: T,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaginatedResponse<T> {
    pub data: Vec<Entity<T>>,
    pub meta: Meta,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Response<T> {
    pub data: Entity<T>,
}
