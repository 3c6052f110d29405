//! Validation for user-supplied table input.

use movies_api::{SortDirection, SortDirective};

use crate::error::MovieTableError;
use crate::table::{Column, PAGE_SIZE_OPTIONS};

pub const MAX_SORT_LENGTH: usize = 64;

/// Validate page number (must be >= 1). Returns the 0-based page index.
pub fn validate_page(page: u32) -> Result<u32, MovieTableError> {
    if page < 1 {
        return Err(MovieTableError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page - 1)
}

/// Validate page size against the offered options.
pub fn validate_page_size(page_size: u32) -> Result<u32, MovieTableError> {
    if !PAGE_SIZE_OPTIONS.contains(&page_size) {
        let options = PAGE_SIZE_OPTIONS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(MovieTableError::InvalidInput(format!(
            "page size must be one of {}",
            options
        )));
    }
    Ok(page_size)
}

/// Validate a sort field: case-insensitive, accepts the column key or a short alias.
pub fn validate_sort_field(input: &str) -> Result<Column, MovieTableError> {
    match input.trim().to_lowercase().as_str() {
        "name" | "title" => Ok(Column::Name),
        "releaseyear" | "release-year" | "year" => Ok(Column::ReleaseYear),
        "director" => Ok(Column::Director),
        _ => Err(MovieTableError::InvalidInput(format!(
            "unknown sort field '{}'. Valid values: name, releaseYear (year), director",
            input
        ))),
    }
}

/// Parse `field`, `field:asc` or `field:desc` into a sort directive.
pub fn parse_sort(input: &str) -> Result<SortDirective, MovieTableError> {
    if input.len() > MAX_SORT_LENGTH {
        return Err(MovieTableError::InvalidInput(format!(
            "sort exceeds maximum length of {} bytes",
            MAX_SORT_LENGTH
        )));
    }
    let (field, direction) = match input.rsplit_once(':') {
        Some((field, direction)) => {
            let direction = direction
                .trim()
                .to_lowercase()
                .parse::<SortDirection>()
                .map_err(|_| {
                    MovieTableError::InvalidInput(format!(
                        "unknown sort direction '{}'. Valid values: asc, desc",
                        direction
                    ))
                })?;
            (field, direction)
        }
        None => (input, SortDirection::Asc),
    };
    let column = validate_sort_field(field)?;
    Ok(SortDirective::new(column.accessor_key(), direction))
}
