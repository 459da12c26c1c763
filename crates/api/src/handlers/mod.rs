//! Request handlers, one module per resource.

pub mod artists;
pub mod categories;
pub mod drinks;
pub mod questions;
pub mod quizzes;
pub mod shows;
pub mod venues;

use serde::{Deserialize, Serialize};
use trio_core::types::DbId;

/// Body of the Fyyur search endpoints. A missing term matches everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTerm {
    #[serde(default)]
    pub search_term: String,
}

/// `{count, data}` search result.
#[derive(Debug, Serialize)]
pub struct SearchResults<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// `{deleted: id, message}` after removing a listing.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
