//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trio_core::pagination::DEFAULT_PAGE;

/// `?page=N` for the trivia listings. Pages start at 1.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}
