//! Handlers for the coffee shop `/drinks` resource.
//!
//! Reads of the short form are public; everything else requires a
//! permission from the caller's bearer token.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trio_core::error::CoreError;
use trio_core::types::DbId;
use trio_db::models::drink::{Drink, DrinkInput, DrinkLong, DrinkShort};
use trio_db::repositories::DrinkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::permission::{
    DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks, RequirePermission,
};
use crate::response::{ok, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T: Serialize> {
    pub drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DrinkDeleted {
    pub delete: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Drink", id })
}

fn unprocessable(msg: &str) -> AppError {
    AppError::Core(CoreError::Unprocessable(msg.to_string()))
}

/// GET /drinks
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<DrinksResponse<DrinkShort>>>> {
    let drinks = DrinkRepo::list(&state.pool)
        .await?
        .iter()
        .map(Drink::short)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ok(DrinksResponse { drinks }))
}

/// GET /drinks-detail
pub async fn list_detail(
    _auth: RequirePermission<GetDrinksDetail>,
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<DrinksResponse<DrinkLong>>>> {
    let drinks = DrinkRepo::list(&state.pool)
        .await?
        .iter()
        .map(Drink::long)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ok(DrinksResponse { drinks }))
}

/// POST /drinks
///
/// Title and recipe are both required; a duplicate title is a 422.
pub async fn create(
    _auth: RequirePermission<PostDrinks>,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DrinkInput>,
) -> AppResult<Json<Envelope<DrinksResponse<DrinkLong>>>> {
    let title = input
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| unprocessable("A drink needs a title"))?;
    let recipe = input
        .encoded_recipe()?
        .ok_or_else(|| unprocessable("A drink needs a recipe"))?;

    let drink = DrinkRepo::create(&state.pool, title, &recipe).await?;
    tracing::info!(drink_id = drink.id, title = %drink.title, "Drink created");
    Ok(ok(DrinksResponse {
        drinks: vec![drink.long()?],
    }))
}

/// PATCH /drinks/{id}
pub async fn update(
    _auth: RequirePermission<PatchDrinks>,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<DrinkInput>,
) -> AppResult<Json<Envelope<DrinksResponse<DrinkLong>>>> {
    if input.is_empty() {
        return Err(unprocessable("Provide a title or a recipe to update"));
    }
    let title = input.title.as_deref().map(str::trim);
    if title == Some("") {
        return Err(unprocessable("A drink needs a title"));
    }
    let recipe = input.encoded_recipe()?;

    let drink = DrinkRepo::update(&state.pool, id, title, recipe.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(drink_id = id, "Drink updated");
    Ok(ok(DrinksResponse {
        drinks: vec![drink.long()?],
    }))
}

/// DELETE /drinks/{id}
pub async fn delete(
    _auth: RequirePermission<DeleteDrinks>,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Envelope<DrinkDeleted>>> {
    if !DrinkRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(drink_id = id, "Drink deleted");
    Ok(ok(DrinkDeleted { delete: id }))
}
