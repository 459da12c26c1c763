//! Quiz question selection.
//!
//! The database hands back the candidate questions in random order; the
//! selector walks that list and returns the first question the player has
//! not seen yet.

use std::collections::HashSet;

use serde::Deserialize;

use crate::types::DbId;

/// Category id clients send to mean "any category".
pub const ALL_CATEGORIES: DbId = 0;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(DbId),
}

impl QuizCategory {
    pub fn from_id(id: DbId) -> Self {
        if id == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            QuizCategory::Category(id)
        }
    }

    /// The category filter to apply, or `None` for every category.
    pub fn category_id(self) -> Option<DbId> {
        match self {
            QuizCategory::All => None,
            QuizCategory::Category(id) => Some(id),
        }
    }
}

/// `quiz_category` as clients send it: a bare id, or the category object
/// the frontend keeps around (`{"id": 1, "type": "Science"}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizCategoryInput {
    Id(DbId),
    /// Only `id` is read; `type` and any other keys are ignored.
    Object { id: DbId },
}

impl From<QuizCategoryInput> for QuizCategory {
    fn from(input: QuizCategoryInput) -> Self {
        match input {
            QuizCategoryInput::Id(id) | QuizCategoryInput::Object { id } => {
                QuizCategory::from_id(id)
            }
        }
    }
}

/// Return the first candidate whose id is not in `previous`.
///
/// `shuffled` is expected to already be in random order; the selector does
/// not reorder it.
pub fn next_unseen<T>(
    shuffled: Vec<T>,
    previous: &[DbId],
    id_of: impl Fn(&T) -> DbId,
) -> Option<T> {
    let seen: HashSet<DbId> = previous.iter().copied().collect();
    shuffled.into_iter().find(|candidate| !seen.contains(&id_of(candidate)))
}
