//! Handlers for the Fyyur `/shows` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_db::models::show::{CreateShow, Show, ShowListing};
use trio_db::repositories::ShowRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShowsResponse {
    pub shows: Vec<ShowListing>,
}

#[derive(Debug, Serialize)]
pub struct ShowCreated {
    pub show: Show,
    pub message: String,
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<ShowsResponse>>> {
    let shows = ShowRepo::list_detailed(&state.pool).await?;
    Ok(ok(ShowsResponse { shows }))
}

/// POST /shows
///
/// An unknown artist or venue is a foreign-key violation and surfaces as 422.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateShow>,
) -> AppResult<Json<Envelope<ShowCreated>>> {
    let show = ShowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "Show created"
    );
    Ok(ok(ShowCreated {
        show,
        message: "Show was successfully listed!".to_string(),
    }))
}
