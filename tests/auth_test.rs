//! JWT validation against a locally minted HS256 token.
//!
//! No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use folio_backend::auth::TokenVerifier;
use folio_backend::auth::jwt::{Claims, validate_token};
use folio_backend::config::AuthConfig;

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn claims_for(sub: &str, exp: usize) -> Claims {
    Claims {
        sub: sub.to_string(),
        exp,
        iat: Some(Utc::now().timestamp() as usize),
        iss: Some("folio-tests".to_string()),
        email: Some("alice@example.com".to_string()),
        role: Some("editor".to_string()),
    }
}

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

fn mint_test_token(sub: &str) -> String {
    let now = Utc::now().timestamp() as usize;
    sign(&claims_for(sub, now + 3600), TEST_SECRET)
}

#[test]
fn test_valid_token_decodes_correctly() {
    let user_id = Uuid::new_v4();
    let token = mint_test_token(&user_id.to_string());

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
    assert_eq!(claims.role.as_deref(), Some("editor"));
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;
    // Well past the 60s default leeway.
    let token = sign(&claims_for(&Uuid::new_v4().to_string(), now - 300), TEST_SECRET);

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_test_token(&Uuid::new_v4().to_string());

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_uuid_subject_is_reported() {
    let claims = claims_for("service-account", 0);
    assert!(claims.user_id().is_err());
}

#[tokio::test]
async fn test_shared_secret_verifier_accepts_and_rejects() {
    let verifier =
        TokenVerifier::from_config(&AuthConfig::SharedSecret(TEST_SECRET.to_string()));

    let user_id = Uuid::new_v4();
    let claims = verifier
        .verify(&mint_test_token(&user_id.to_string()))
        .await
        .expect("Token should be valid");
    assert_eq!(claims.user_id().unwrap(), user_id);

    let other = sign(
        &claims_for(&user_id.to_string(), Utc::now().timestamp() as usize + 3600),
        "another-secret-entirely-xxxxxxxxxxxxxxxxxxxxxxxxx",
    );
    assert!(verifier.verify(&other).await.is_err());
}
