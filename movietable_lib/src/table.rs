//! Table view-model: columns, pagination and sort state for one movie table.
//!
//! Pagination is manual: the server decides how many pages exist, the table
//! only tracks where it is and what it last loaded. The same component
//! serves sortable and plain tables through [`TableOptions::sorting`].

use movies_api::{Movie, PageRequest, PageResult, SortDirective};

use crate::client::CachedClient;
use crate::error::MovieTableError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered to the user.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 20, 30, 40, 50];

/// Columns of the movie table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Name,
    ReleaseYear,
    Director,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Name, Column::ReleaseYear, Column::Director];

    /// Field id of the column, also used as the sort field sent to the API.
    pub fn accessor_key(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::ReleaseYear => "releaseYear",
            Column::Director => "director",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::ReleaseYear => "Release Year",
            Column::Director => "Director",
        }
    }

    pub fn cell(&self, movie: &Movie) -> String {
        match self {
            Column::Name => movie.name.clone(),
            Column::ReleaseYear => movie.release_year.to_string(),
            Column::Director => movie.director.clone(),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.accessor_key())
    }
}

/// Capabilities of a table instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// When false, sort state is ignored and never sent to the API.
    pub sorting: bool,
}

pub struct MovieTable {
    options: TableOptions,
    page_index: u32,
    page_size: u32,
    sorting: Vec<SortDirective>,
    /// Last loaded page. Kept while the next one loads and when a load fails.
    data: Option<PageResult>,
}

impl MovieTable {
    pub fn new(options: TableOptions) -> Self {
        Self {
            options,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sorting: Vec::new(),
            data: None,
        }
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sorting(&self) -> &[SortDirective] {
        &self.sorting
    }

    pub fn rows(&self) -> &[Movie] {
        self.data.as_ref().map(|d| d.rows.as_slice()).unwrap_or(&[])
    }

    /// Number of pages reported by the last load, or `-1` before anything loaded.
    pub fn page_count(&self) -> i64 {
        self.data.as_ref().map(|d| i64::from(d.page_count)).unwrap_or(-1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        let page_count = self.page_count();
        page_count == -1 || i64::from(self.page_index) + 1 < page_count
    }

    /// Moves to `page_index`, clamped to the last known page.
    pub fn set_page_index(&mut self, page_index: u32) {
        let page_count = self.page_count();
        self.page_index = if page_count > 0 {
            page_index.min((page_count - 1) as u32)
        } else if page_count == 0 {
            0
        } else {
            page_index
        };
    }

    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.set_page_index(self.page_index - 1);
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.set_page_index(self.page_index.saturating_add(1));
        }
    }

    pub fn last_page(&mut self) {
        let page_count = self.page_count();
        if page_count > 0 {
            self.set_page_index((page_count - 1) as u32);
        }
    }

    /// Changes the page size, keeping the first visible row on the new page.
    pub fn set_page_size(&mut self, page_size: u32) -> Result<(), MovieTableError> {
        if page_size == 0 {
            return Err(MovieTableError::InvalidInput(
                "page size must be greater than zero".to_string(),
            ));
        }
        let top_row = u64::from(self.page_index) * u64::from(self.page_size);
        self.page_size = page_size;
        self.page_index = (top_row / u64::from(page_size)) as u32;
        Ok(())
    }

    /// Replaces the sort state and goes back to the first page.
    ///
    /// Ignored on tables created without sorting.
    pub fn set_sorting(&mut self, sorting: Vec<SortDirective>) {
        if !self.options.sorting {
            tracing::debug!("Sorting is disabled for this table, ignoring sort state");
            return;
        }
        if sorting != self.sorting {
            self.sorting = sorting;
            self.page_index = 0;
        }
    }

    /// Builds the request for the current pagination and sort state.
    pub fn request(&self) -> Result<PageRequest, MovieTableError> {
        let sorting = if self.options.sorting {
            self.sorting.clone()
        } else {
            Vec::new()
        };
        Ok(PageRequest::new(self.page_index, self.page_size, sorting)?)
    }

    /// Stores a loaded page, replacing whatever was there.
    pub fn set_result(&mut self, page: PageResult) -> &PageResult {
        self.data.insert(page)
    }

    /// Loads the current page. On failure the previous page stays visible.
    pub async fn load(&mut self, client: &CachedClient) -> Result<&PageResult, MovieTableError> {
        let request = self.request()?;
        let page = client.fetch_movies(&request).await.map_err(|e| {
            tracing::error!("Failed to load page {}: {}", request.page_number(), e);
            e
        })?;
        Ok(self.set_result(page))
    }

    /// `Page 2 of 7`, with `?` while the page count is unknown.
    pub fn status(&self) -> String {
        let page_count = self.page_count();
        if page_count < 0 {
            format!("Page {} of ?", u64::from(self.page_index) + 1)
        } else {
            format!("Page {} of {}", u64::from(self.page_index) + 1, page_count)
        }
    }
}
