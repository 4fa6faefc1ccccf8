use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims accepted on mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the caller's UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    pub iss: Option<String>,
    pub email: Option<String>,
    /// e.g. "authenticated" or "admin".
    pub role: Option<String>,
}

impl Claims {
    /// Extract the caller UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }
}

/// Validate an HS256 token signed with `secret` and return its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|td| td.claims)
    .map_err(|e| format!("{:?}", e.kind()))
}
