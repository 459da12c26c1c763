//! `Authorization: Bearer <token>` parsing.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use super::AuthError;

/// Extract the bearer token from the request headers.
///
/// The scheme is matched case-insensitively. The header must hold exactly
/// two whitespace-separated parts.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::HeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::NotBearer)?;

    let mut parts = value.split_whitespace();
    match parts.next() {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => {}
        _ => return Err(AuthError::NotBearer),
    }
    let token = parts.next().ok_or(AuthError::TokenMissing)?;
    if parts.next().is_some() {
        return Err(AuthError::TooManyParts);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers("bearer tok")).unwrap(), "tok");
    }

    #[test]
    fn missing_header() {
        assert_matches!(bearer_token(&HeaderMap::new()), Err(AuthError::HeaderMissing));
    }

    #[test]
    fn wrong_scheme() {
        assert_matches!(bearer_token(&headers("Basic dXNlcjpwYXNz")), Err(AuthError::NotBearer));
        assert_matches!(bearer_token(&headers("")), Err(AuthError::NotBearer));
    }

    #[test]
    fn scheme_without_token() {
        assert_matches!(bearer_token(&headers("Bearer")), Err(AuthError::TokenMissing));
    }

    #[test]
    fn extra_parts() {
        assert_matches!(bearer_token(&headers("Bearer a b")), Err(AuthError::TooManyParts));
    }
}
