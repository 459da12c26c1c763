//! Coffee-shop permission names.
//!
//! These must match the permissions configured on the identity provider's
//! API and emitted in the token's `permissions` claim.

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";

/// Permissions held by the barista role.
pub const BARISTA_PERMISSIONS: &[&str] = &[GET_DRINKS_DETAIL];

/// Permissions held by the manager role.
pub const MANAGER_PERMISSIONS: &[&str] =
    &[GET_DRINKS_DETAIL, POST_DRINKS, PATCH_DRINKS, DELETE_DRINKS];

/// Exact, case-sensitive membership check.
pub fn has_permission(granted: &[String], required: &str) -> bool {
    granted.iter().any(|p| p == required)
}
