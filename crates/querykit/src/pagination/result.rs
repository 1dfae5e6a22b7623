use serde::{Deserialize, Serialize};

/// One page of a list result plus the totals needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, total_count: usize, page_number: usize, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };
        Self {
            data,
            current_page: page_number,
            total_pages,
            total_count,
            page_size,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }

    /// Cut page `page_number` (1-based) out of the full, ordered item list.
    /// A page past the end is empty but keeps the totals.
    pub fn from_items(items: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let total_count = items.len();
        let skip = page_number.saturating_sub(1).saturating_mul(page_size);
        let data: Vec<T> = items.into_iter().skip(skip).take(page_size).collect();
        Self::new(data, total_count, page_number, page_size)
    }

    pub fn map<U, F>(self, f: F) -> PaginatedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResult {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            page_size: self.page_size,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
