//! Handlers for the trivia `/categories` resource.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::pagination::page_slice;
use trio_core::types::DbId;
use trio_db::models::category::category_map;
use trio_db::models::question::Question;
use trio_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<DbId, String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: DbId,
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<CategoriesResponse>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    if categories.is_empty() {
        return Err(AppError::NotFound("No categories found".into()));
    }
    Ok(ok(CategoriesResponse {
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions?page=N
pub async fn questions(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<Envelope<CategoryQuestions>>> {
    if CategoryRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    let questions = QuestionRepo::list_by_category(&state.pool, id).await?;
    let page = page_slice(&questions, params.page());
    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions on page {} of category {id}",
            params.page()
        )));
    }

    Ok(ok(CategoryQuestions {
        questions: page.to_vec(),
        total_questions: questions.len(),
        current_category: id,
    }))
}
