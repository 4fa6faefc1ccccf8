use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// How bearer tokens on mutating routes are verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    /// HS256 tokens signed with a shared secret.
    SharedSecret(String),
    /// Asymmetric tokens whose keys are published at a JWKS endpoint.
    Jwks { url: String, api_key: Option<String> },
}

/// Process configuration, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any key lookup; `from_env` passes `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", lookup("PORT"), 8080)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 10)?;
        let run_migrations = parse_or("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), true)?;

        let auth = match (lookup("JWKS_URL"), lookup("JWT_SECRET")) {
            (Some(url), _) => AuthConfig::Jwks {
                url,
                api_key: lookup("JWKS_API_KEY"),
            },
            (None, Some(secret)) if !secret.is_empty() => AuthConfig::SharedSecret(secret),
            _ => return Err(ConfigError::Missing("JWT_SECRET (or JWKS_URL)")),
        };

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            run_migrations,
            auth,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.db_max_connections, 10);
        assert!(config.run_migrations);
        assert_eq!(config.auth, AuthConfig::SharedSecret("s3cret".to_string()));
    }

    #[test]
    fn jwks_takes_precedence_over_secret() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("JWT_SECRET", "s3cret"),
            ("JWKS_URL", "https://auth.example.com/jwks.json"),
        ]))
        .unwrap();

        assert!(matches!(config.auth, AuthConfig::Jwks { api_key: None, .. }));
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/folio"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn auth_is_required() {
        let err =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/folio")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }
}
