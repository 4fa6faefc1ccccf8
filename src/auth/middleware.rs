use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

use crate::auth::TokenVerifier;
use crate::auth::jwt::Claims;

/// Extractor for routes that mutate data: succeeds only with a valid bearer
/// token whose subject is a UUID. Read routes simply don't ask for it.
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub claims: Claims,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Missing Authorization header")
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
            })?;

            // 2. Get the verifier from app data.
            let verifier = req.app_data::<web::Data<TokenVerifier>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Token verifier not configured")
            })?;

            // 3. Validate the JWT.
            let claims = verifier
                .verify(token)
                .await
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            // 4. The subject names the caller.
            let user_id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            tracing::debug!(%user_id, "authenticated request");
            Ok(AuthenticatedUser { user_id, claims })
        })
    }
}
