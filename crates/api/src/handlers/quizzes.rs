//! Handler for `POST /quizzes`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::quiz::next_unseen;
use trio_db::models::question::{Question, QuizRequest};
use trio_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    /// `null` once every candidate has been played.
    pub question: Option<Question>,
}

/// POST /quizzes
pub async fn next_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<QuizRequest>,
) -> AppResult<Json<Envelope<QuizQuestion>>> {
    let category = input.category()?;
    let candidates = QuestionRepo::random_for_quiz(&state.pool, category.category_id()).await?;
    let question = next_unseen(candidates, &input.previous_questions, |q| q.id);

    tracing::debug!(
        ?category,
        seen = input.previous_questions.len(),
        found = question.is_some(),
        "Quiz question selected"
    );
    Ok(ok(QuizQuestion { question }))
}
