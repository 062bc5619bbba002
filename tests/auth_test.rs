//! Integration test for JWT auth validation.
//!
//! Mints HS256 tokens locally with the same shared secret the server would
//! use, then validates them through `validate_token`. No running server or
//! database is needed.
//!
//! Run with: `cargo test --test auth_test`

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use taqyeem_backend::auth::jwt::{Claims, validate_token};
use taqyeem_backend::models::users::Role;

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

/// Helper: mint a JWT signed with HS256 using the test secret.
fn mint_test_token(sub: &str, email: &str, name: &str, role: &str) -> String {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600, // 1 hour from now
        iat: Some(now),
        email: Some(email.to_string()),
        name: Some(name.to_string()),
        role: Some(role.to_string()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

#[test]
fn test_valid_token_decodes_correctly() {
    let user_id = Uuid::new_v4();
    let token = mint_test_token(
        &user_id.to_string(),
        "alice@example.com",
        "Alice Smith",
        "client",
    );

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
    assert_eq!(claims.display_name().unwrap(), "Alice Smith");
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.user_role().unwrap(), Role::Client);
}

#[test]
fn test_every_marketplace_role_parses() {
    for (raw, expected) in [
        ("admin", Role::Admin),
        ("client", Role::Client),
        ("company", Role::Company),
        ("bank", Role::Bank),
    ] {
        let token = mint_test_token(&Uuid::new_v4().to_string(), "x@example.com", "X", raw);
        let claims = validate_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.user_role().unwrap(), expected);
    }
}

#[test]
fn test_unknown_role_is_rejected() {
    let token = mint_test_token(
        &Uuid::new_v4().to_string(),
        "weird@example.com",
        "Weird",
        "superuser",
    );
    let claims = validate_token(&token, TEST_SECRET).unwrap();

    // The signature is fine but the role claim must not silently default.
    let err = claims.user_role().unwrap_err();
    assert!(err.contains("superuser"));
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: Some(now - 3600),
        email: Some("expired@example.com".to_string()),
        name: None,
        role: Some("client".to_string()),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_test_token(
        &Uuid::new_v4().to_string(),
        "bob@example.com",
        "Bob Jones",
        "bank",
    );

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
fn test_display_name_falls_back_to_email_local_part() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now + 3600,
        iat: Some(now),
        email: Some("bare@example.com".to_string()),
        name: None,
        role: Some("company".to_string()),
    };

    assert_eq!(claims.display_name().as_deref(), Some("bare"));
}
