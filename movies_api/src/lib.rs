mod client;
mod errors;
pub mod normalize;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::normalize::{MissingDirector, Normalizer};
pub use self::query::{build_query, build_url, MovieQuery, Query, QueryCommon, SortDirection};
pub use self::types::{Movie, PageRequest, PageResult, SortDirective};
