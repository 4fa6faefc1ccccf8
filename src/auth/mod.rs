pub mod jwks;
pub mod jwt;
pub mod middleware;

use crate::config::AuthConfig;
use jwks::JwksCache;
use jwt::Claims;

/// Verifies bearer tokens; stored in actix app data.
#[derive(Clone)]
pub enum TokenVerifier {
    SharedSecret(String),
    Jwks(JwksCache),
}

impl TokenVerifier {
    pub fn from_config(config: &AuthConfig) -> Self {
        match config {
            AuthConfig::SharedSecret(secret) => TokenVerifier::SharedSecret(secret.clone()),
            AuthConfig::Jwks { url, api_key } => {
                TokenVerifier::Jwks(JwksCache::new(url, api_key.as_deref()))
            }
        }
    }

    pub async fn verify(&self, token: &str) -> Result<Claims, String> {
        match self {
            TokenVerifier::SharedSecret(secret) => jwt::validate_token(token, secret),
            TokenVerifier::Jwks(cache) => cache.validate_token(token).await.map(|td| td.claims),
        }
    }
}
