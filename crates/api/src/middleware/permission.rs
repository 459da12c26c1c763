//! Permission-checking extractor.
//!
//! [`RequirePermission<P>`] verifies the bearer token and then requires the
//! permission named by `P`. Use it as the first extractor of a protected
//! handler so auth failures win over body errors:
//!
//! ```ignore
//! async fn create(
//!     _auth: RequirePermission<PostDrinks>,
//!     State(state): State<AppState>,
//!     ApiJson(input): ApiJson<DrinkInput>,
//! ) -> AppResult<...> { ... }
//! ```

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use trio_core::permissions;

use crate::auth::bearer::bearer_token;
use crate::auth::{check_permission, TokenClaims};
use crate::error::AppError;
use crate::state::AppState;

/// A permission string checked at the type level.
pub trait Permission: Send + Sync + 'static {
    const NAME: &'static str;
}

pub struct GetDrinksDetail;
pub struct PostDrinks;
pub struct PatchDrinks;
pub struct DeleteDrinks;

impl Permission for GetDrinksDetail {
    const NAME: &'static str = permissions::GET_DRINKS_DETAIL;
}

impl Permission for PostDrinks {
    const NAME: &'static str = permissions::POST_DRINKS;
}

impl Permission for PatchDrinks {
    const NAME: &'static str = permissions::PATCH_DRINKS;
}

impl Permission for DeleteDrinks {
    const NAME: &'static str = permissions::DELETE_DRINKS;
}

/// Verified claims of a caller holding permission `P`.
pub struct RequirePermission<P: Permission> {
    pub claims: TokenClaims,
    _permission: PhantomData<P>,
}

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let verifier = state.verifier.as_ref().ok_or_else(|| {
            AppError::InternalError("token verification is not configured".into())
        })?;
        let claims = verifier.verify(token).await?;
        check_permission(&claims, P::NAME)?;

        tracing::debug!(sub = ?claims.sub, permission = P::NAME, "Permission granted");
        Ok(Self {
            claims,
            _permission: PhantomData,
        })
    }
}
