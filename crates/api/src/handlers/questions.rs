//! Handlers for the trivia `/questions` resource.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::pagination::page_slice;
use trio_core::types::DbId;
use trio_db::models::category::category_map;
use trio_db::models::question::{CreateQuestion, Question, SearchQuestions};
use trio_db::repositories::{CategoryRepo, QuestionRepo};

use super::Deleted;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<DbId, String>,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub created: DbId,
}

/// GET /questions?page=N
///
/// A page past the end is a 404.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<Envelope<QuestionPage>>> {
    let questions = QuestionRepo::list_all(&state.pool).await?;
    let page = page_slice(&questions, params.page());
    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions on page {}",
            params.page()
        )));
    }

    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(ok(QuestionPage {
        questions: page.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// POST /questions
///
/// Every field must be present and non-empty. A rejected insert is a 422.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateQuestion>,
) -> AppResult<Json<Envelope<Created>>> {
    let new = input.into_new()?;
    let question = QuestionRepo::create(&state.pool, &new)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert question");
            AppError::Core(CoreError::Unprocessable(
                "The question could not be stored".into(),
            ))
        })?;
    tracing::info!(question_id = question.id, category = question.category, "Question created");
    Ok(ok(Created {
        created: question.id,
    }))
}

/// POST /questions/search?page=N
///
/// A page past the end is an empty list, not an error.
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(input): ApiJson<SearchQuestions>,
) -> AppResult<Json<Envelope<SearchPage>>> {
    let term = input
        .search_term
        .ok_or_else(|| CoreError::Validation("'search_term' is required".into()))?;

    let hits = QuestionRepo::search(&state.pool, term.trim()).await?;
    Ok(ok(SearchPage {
        questions: page_slice(&hits, params.page()).to_vec(),
        total_questions: hits.len(),
        current_category: None,
    }))
}

/// DELETE /questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Envelope<Deleted>>> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }
    tracing::info!(question_id = id, "Question deleted");
    Ok(ok(Deleted {
        deleted: id,
        message: None,
    }))
}
