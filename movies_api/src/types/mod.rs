mod meta;
pub use self::meta::{Entity, Meta, PaginatedResponse, Pagination, Related, Relation, Response};

mod movie;
pub use self::movie::{DirectorAttributes, Movie, MovieAttributes};

mod page;
pub use self::page::{PageRequest, PageResult, SortDirective};
