//! Bearer-token verification against an identity provider's JWKS.
//!
//! The flow for every protected request:
//!
//! 1. [`bearer::bearer_token`] pulls the token out of `Authorization`.
//! 2. [`TokenVerifier::verify`] finds the signing key by `kid`, checks the
//!    signature, audience, issuer and expiry, and returns the claims.
//! 3. [`verifier::check_permission`] requires one permission string.
//!
//! Each failure is an [`AuthError`] carrying its own status and code.

pub mod bearer;
pub mod error;
pub mod jwks;
pub mod verifier;

pub use error::AuthError;
pub use jwks::{HttpJwksSource, JwksError, JwksSource, StaticJwksSource};
pub use verifier::{check_permission, TokenClaims, TokenVerifier};
