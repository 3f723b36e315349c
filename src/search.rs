//! Search results and pagination.

use crate::model::RecipeSummary;

/// Default number of results shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One search worth of results. Replaced wholesale on every new search.
#[derive(Debug, Clone)]
pub struct SearchStore {
    pub query: String,
    results: Vec<RecipeSummary>,
    pub page: usize,
}

impl SearchStore {
    pub fn new(query: impl Into<String>, results: Vec<RecipeSummary>) -> Self {
        SearchStore {
            query: query.into(),
            results,
            page: 1,
        }
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn num_results(&self) -> usize {
        self.results.len()
    }

    /// Number of pages at the given page size; zero for an empty result
    /// set.
    pub fn num_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.results.len().div_ceil(page_size)
    }

    /// The slice `[(page-1)*size, page*size)` of the results, clipped to
    /// bounds. Out-of-range pages (including page zero) yield an empty
    /// slice rather than an error.
    pub fn get_page(&self, page: usize, page_size: usize) -> &[RecipeSummary] {
        if page == 0 || page_size == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(page_size);
        if start >= self.results.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(self.results.len());
        &self.results[start..end]
    }
}
