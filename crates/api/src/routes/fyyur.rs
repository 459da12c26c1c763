use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{artists, shows, venues};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues::list).post(venues::create))
        .route("/venues/search", post(venues::search))
        .route(
            "/venues/{id}",
            get(venues::get_by_id)
                .patch(venues::update)
                .delete(venues::delete),
        )
        .route("/artists", get(artists::list).post(artists::create))
        .route("/artists/search", post(artists::search))
        .route(
            "/artists/{id}",
            get(artists::get_by_id)
                .patch(artists::update)
                .delete(artists::delete),
        )
        .route("/shows", get(shows::list).post(shows::create))
}
