//! Trivia category model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trio_core::types::DbId;

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, the shape the trivia frontend expects
/// (`{"1": "Science", ...}`).
pub fn category_map(categories: &[Category]) -> BTreeMap<DbId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
