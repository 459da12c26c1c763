use std::str::FromStr;

use jsonwebtoken::Algorithm;
use trio_core::service::Service;

/// A missing or unparsable configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Default pool size when `DB_MAX_CONNECTIONS` is unset.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Server configuration loaded from environment variables.
///
/// All fields except the coffee shop's identity-provider settings have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Which of the three services this process serves.
    pub service: Service,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: the service's own port).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Connection pool size (default: `20`).
    pub db_max_connections: u32,
    /// Token verification settings; present only for services that need it.
    pub auth: Option<AuthConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | service default            |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    ///
    /// See [`AuthConfig::from_lookup`] for the coffee shop's extra variables.
    pub fn from_env(service: Service) -> Result<Self, ConfigError> {
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(
        service: Service,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or(&lookup, "PORT", service.default_port())?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let auth = if service.requires_auth() {
            Some(AuthConfig::from_lookup(&lookup)?)
        } else {
            None
        };

        Ok(Self {
            service,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            auth,
        })
    }
}

/// Identity-provider settings for bearer-token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Expected `aud` claim.
    pub audience: String,
    /// Expected `iss` claim (`https://{AUTH0_DOMAIN}/`).
    pub issuer: String,
    /// Accepted signing algorithms.
    pub algorithms: Vec<Algorithm>,
    /// Where the key set is published.
    pub jwks_url: String,
}

impl AuthConfig {
    /// Defaults derived from the identity provider's domain.
    pub fn for_domain(domain: &str, audience: impl Into<String>) -> Self {
        let domain = domain.trim_end_matches('/');
        Self {
            audience: audience.into(),
            issuer: format!("https://{domain}/"),
            algorithms: vec![Algorithm::RS256],
            jwks_url: format!("https://{domain}/.well-known/jwks.json"),
        }
    }

    /// | Env Var           | Default                                    |
    /// |-------------------|--------------------------------------------|
    /// | `AUTH0_DOMAIN`    | **required**                               |
    /// | `API_AUDIENCE`    | **required**                               |
    /// | `AUTH_ALGORITHMS` | `RS256` (comma-separated)                  |
    /// | `JWKS_URL`        | `https://{AUTH0_DOMAIN}/.well-known/jwks.json` |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let domain = required(&lookup, "AUTH0_DOMAIN")?;
        let audience = required(&lookup, "API_AUDIENCE")?;
        let mut config = Self::for_domain(&domain, audience);

        if let Some(raw) = lookup("AUTH_ALGORITHMS") {
            let algorithms = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    Algorithm::from_str(s).map_err(|_| ConfigError::Invalid {
                        var: "AUTH_ALGORITHMS",
                        reason: format!("unknown algorithm '{s}'"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if algorithms.is_empty() {
                return Err(ConfigError::Invalid {
                    var: "AUTH_ALGORITHMS",
                    reason: "no algorithms listed".into(),
                });
            }
            if algorithms.iter().any(|a| key_family(*a) != key_family(algorithms[0])) {
                return Err(ConfigError::Invalid {
                    var: "AUTH_ALGORITHMS",
                    reason: "algorithms must share one key family".into(),
                });
            }
            config.algorithms = algorithms;
        }

        if let Some(url) = lookup("JWKS_URL") {
            config.jwks_url = url;
        }

        Ok(config)
    }
}

/// Tokens are verified with a single key type, so every accepted
/// algorithm must belong to the same family.
fn key_family(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => "hmac",
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => "rsa",
        Algorithm::ES256 | Algorithm::ES384 => "ec",
        Algorithm::EdDSA => "ed",
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}
