use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use trio_core::permissions::has_permission;

use super::jwks::{HttpJwksSource, JwksSource};
use super::AuthError;
use crate::config::AuthConfig;

/// Claims the services read from a verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, as issued by the identity provider.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// RBAC permissions granted to the subject. Absent when the API has no
    /// RBAC configured at the identity provider.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Verifies bearer tokens against a key set.
pub struct TokenVerifier {
    source: Arc<dyn JwksSource>,
    audience: String,
    issuer: String,
    algorithms: Vec<Algorithm>,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig, source: Arc<dyn JwksSource>) -> Self {
        Self {
            source,
            audience: config.audience.clone(),
            issuer: config.issuer.clone(),
            algorithms: config.algorithms.clone(),
        }
    }

    /// A verifier that fetches keys from `config.jwks_url`.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config, Arc::new(HttpJwksSource::new(&config.jwks_url)))
    }

    /// Verify the token's signature, audience, issuer and expiry.
    pub async fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::Malformed)?;
        let kid = header.kid.ok_or(AuthError::Malformed)?;

        let jwks = self.source.fetch().await?;
        let jwk = jwks.find(&kid).ok_or(AuthError::UnknownKey)?;
        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::UnknownKey)?;

        let mut validation = Validation::new(header.alg);
        validation.algorithms = self.algorithms.clone();
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let data = decode::<TokenClaims>(token, &key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_) => AuthError::IncorrectClaims,
            _ => AuthError::Unparsable,
        })?;

        Ok(data.claims)
    }
}

/// Require `permission` in the token's `permissions` claim.
pub fn check_permission(claims: &TokenClaims, permission: &str) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_deref()
        .ok_or(AuthError::PermissionsMissing)?;
    if has_permission(granted, permission) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied)
    }
}
