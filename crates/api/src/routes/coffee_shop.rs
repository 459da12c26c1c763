use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drinks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drinks::list).post(drinks::create))
        .route("/drinks-detail", get(drinks::list_detail))
        .route("/drinks/{id}", patch(drinks::update).delete(drinks::delete))
}
