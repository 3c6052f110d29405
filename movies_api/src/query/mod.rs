mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod movie;
pub use self::movie::{build_query, build_url, MovieQuery};
