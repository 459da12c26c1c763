//! Handlers for the Fyyur `/venues` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::types::DbId;
use trio_db::models::venue::{
    group_by_area, Area, CreateVenue, UpdateVenue, VenueDetail, VenueSummary, VenueView,
};
use trio_db::repositories::VenueRepo;
use validator::Validate;

use super::{Deleted, SearchResults, SearchTerm};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AreasResponse {
    pub areas: Vec<Area>,
}

#[derive(Debug, Serialize)]
pub struct VenueResponse<T: Serialize> {
    pub venue: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /venues
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<AreasResponse>>> {
    let summaries = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(ok(AreasResponse {
        areas: group_by_area(summaries),
    }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SearchTerm>,
) -> AppResult<Json<Envelope<SearchResults<VenueSummary>>>> {
    let hits = VenueRepo::search(&state.pool, input.search_term.trim(), Utc::now()).await?;
    Ok(ok(SearchResults::new(hits)))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Envelope<VenueResponse<VenueDetail>>>> {
    let (venue, shows) = VenueRepo::find_with_shows(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(VenueResponse {
        venue: VenueDetail::new(venue, shows, Utc::now()),
        message: None,
    }))
}

/// POST /venues
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateVenue>,
) -> AppResult<Json<Envelope<VenueResponse<VenueView>>>> {
    input.validate()?;
    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");

    let message = format!("Venue {} was successfully listed!", venue.name);
    Ok(ok(VenueResponse {
        venue: venue.into(),
        message: Some(message),
    }))
}

/// PATCH /venues/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateVenue>,
) -> AppResult<Json<Envelope<VenueResponse<VenueView>>>> {
    input.validate()?;
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(venue_id = id, "Venue updated");

    let message = format!("Venue {} was successfully updated!", venue.name);
    Ok(ok(VenueResponse {
        venue: venue.into(),
        message: Some(message),
    }))
}

/// DELETE /venues/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Envelope<Deleted>>> {
    if !VenueRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(venue_id = id, "Venue deleted");
    Ok(ok(Deleted {
        deleted: id,
        message: Some(format!("Venue {id} was successfully deleted.")),
    }))
}
