//! Handlers for the Fyyur `/artists` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::types::DbId;
use trio_db::models::artist::{
    ArtistDetail, ArtistSearchHit, ArtistSummary, ArtistView, CreateArtist, UpdateArtist,
};
use trio_db::repositories::ArtistRepo;
use validator::Validate;

use super::{Deleted, SearchResults, SearchTerm};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ArtistsResponse {
    pub artists: Vec<ArtistSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse<T: Serialize> {
    pub artist: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Artist", id })
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<ArtistsResponse>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(ok(ArtistsResponse { artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SearchTerm>,
) -> AppResult<Json<Envelope<SearchResults<ArtistSearchHit>>>> {
    let hits = ArtistRepo::search(&state.pool, input.search_term.trim(), Utc::now()).await?;
    Ok(ok(SearchResults::new(hits)))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Envelope<ArtistResponse<ArtistDetail>>>> {
    let (artist, shows) = ArtistRepo::find_with_shows(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(ArtistResponse {
        artist: ArtistDetail::new(artist, shows, Utc::now()),
        message: None,
    }))
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateArtist>,
) -> AppResult<Json<Envelope<ArtistResponse<ArtistView>>>> {
    input.validate()?;
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");

    let message = format!("Artist {} was successfully listed!", artist.name);
    Ok(ok(ArtistResponse {
        artist: artist.into(),
        message: Some(message),
    }))
}

/// PATCH /artists/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateArtist>,
) -> AppResult<Json<Envelope<ArtistResponse<ArtistView>>>> {
    input.validate()?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(artist_id = id, "Artist updated");

    let message = format!("Artist {} was successfully updated!", artist.name);
    Ok(ok(ArtistResponse {
        artist: artist.into(),
        message: Some(message),
    }))
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Envelope<Deleted>>> {
    if !ArtistRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(artist_id = id, "Artist deleted");
    Ok(ok(Deleted {
        deleted: id,
        message: Some(format!("Artist {id} was successfully deleted.")),
    }))
}
