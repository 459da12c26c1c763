use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{categories, questions, quizzes};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list))
        .route("/categories/{id}/questions", get(categories::questions))
        .route("/questions", get(questions::list).post(questions::create))
        .route("/questions/search", post(questions::search))
        .route("/questions/{id}", delete(questions::delete))
        .route("/quizzes", post(quizzes::next_question))
}
