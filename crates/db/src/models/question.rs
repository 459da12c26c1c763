//! Trivia question model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::error::CoreError;
use trio_core::quiz::{QuizCategory, QuizCategoryInput};
use trio_core::types::DbId;

/// A row from the `question` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// Body of `POST /questions`. Every field is optional at the wire level so a
/// missing field becomes a 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// A question ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl CreateQuestion {
    /// Check that every field is present and non-empty. Empty strings and
    /// zero count as missing.
    pub fn into_new(self) -> Result<NewQuestion, CoreError> {
        let missing = |field: &str| CoreError::Validation(format!("'{field}' is required"));
        let question = self
            .question
            .filter(|q| !q.is_empty())
            .ok_or_else(|| missing("question"))?;
        let answer = self
            .answer
            .filter(|a| !a.is_empty())
            .ok_or_else(|| missing("answer"))?;
        let category = self
            .category
            .filter(|c| *c != 0)
            .ok_or_else(|| missing("category"))?;
        let difficulty = self
            .difficulty
            .filter(|d| *d != 0)
            .ok_or_else(|| missing("difficulty"))?;
        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuestions {
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: Option<QuizCategoryInput>,
}

impl QuizRequest {
    pub fn category(&self) -> Result<QuizCategory, CoreError> {
        self.quiz_category
            .clone()
            .map(QuizCategory::from)
            .ok_or_else(|| CoreError::Validation("'quiz_category' is required".into()))
    }
}
