use axum::http::StatusCode;

use super::jwks::JwksError;

/// Why a bearer token was rejected.
///
/// The display text is the description sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    HeaderMissing,

    #[error("Authorization header must start with \"Bearer\".")]
    NotBearer,

    #[error("Token not found.")]
    TokenMissing,

    #[error("Authorization header must be bearer token.")]
    TooManyParts,

    /// The token header could not be decoded or carries no `kid`.
    #[error("Authorization malformed.")]
    Malformed,

    #[error("Unable to find the appropriate key.")]
    UnknownKey,

    #[error("Token expired.")]
    Expired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    IncorrectClaims,

    #[error("Unable to parse authentication token.")]
    Unparsable,

    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    PermissionDenied,

    /// The key set could not be fetched from the identity provider.
    #[error("Unable to fetch signing keys.")]
    KeySetUnavailable(String),
}

impl AuthError {
    /// Machine-readable code placed in the failure envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "authorization_header_missing",
            AuthError::NotBearer
            | AuthError::TokenMissing
            | AuthError::TooManyParts
            | AuthError::Malformed
            | AuthError::UnknownKey
            | AuthError::Unparsable => "invalid_header",
            AuthError::Expired => "token_expired",
            AuthError::IncorrectClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
            AuthError::KeySetUnavailable(_) => "jwks_unavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::HeaderMissing
            | AuthError::NotBearer
            | AuthError::TokenMissing
            | AuthError::TooManyParts
            | AuthError::Malformed
            | AuthError::Expired
            | AuthError::IncorrectClaims => StatusCode::UNAUTHORIZED,
            AuthError::UnknownKey | AuthError::Unparsable | AuthError::PermissionsMissing => {
                StatusCode::BAD_REQUEST
            }
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
            AuthError::KeySetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JwksError> for AuthError {
    fn from(err: JwksError) -> Self {
        AuthError::KeySetUnavailable(err.to_string())
    }
}
