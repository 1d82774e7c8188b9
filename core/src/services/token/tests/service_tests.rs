//! Unit tests for the token service

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_user() -> User {
    let mut user = User::new(
        "a@x.com".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        "12 Analytical St".to_string(),
        "female".to_string(),
        "$2b$12$hash".to_string(),
    );
    user.set_avatar("Images/ada.jpeg".to_string());
    user
}

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::default())
}

fn expired_claims(user: &User) -> Claims {
    let config = TokenServiceConfig::default();
    let mut claims = Claims::for_user(user, &config.issuer, &config.audience, 5);
    claims.iat = Utc::now().timestamp() - 3600;
    claims.exp = Utc::now().timestamp() - 3595;
    claims
}

#[test]
fn generated_token_verifies_with_full_validation() {
    let service = create_test_service();
    let user = test_user();

    let token = service.generate_access_token(&user).unwrap();
    let claims = service.verify_access_token(&token).unwrap();

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.name, "Ada Lovelace");
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.avatar.as_deref(), Some("Images/ada.jpeg"));
}

#[test]
fn expired_token_fails_full_validation_but_decodes_on_refresh_path() {
    let service = create_test_service();
    let user = test_user();

    let claims = expired_claims(&user);
    let token = service.encode_jwt(&claims).unwrap();

    match service.verify_access_token(&token) {
        Err(DomainError::Token(TokenError::TokenExpired)) => {}
        other => panic!("expected TokenExpired, got {:?}", other.err()),
    }

    let recovered = service.decode_expired_token(&token).unwrap();
    assert_eq!(recovered.email, "a@x.com");
    assert_eq!(recovered.sub, user.id.to_string());
}

#[test]
fn refresh_path_skips_issuer_and_audience_checks() {
    let service = create_test_service();
    let user = test_user();

    let mut claims = expired_claims(&user);
    claims.iss = "someone-else".to_string();
    claims.aud = "other-clients".to_string();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(service.verify_access_token(&token).is_err());
    assert!(service.decode_expired_token(&token).is_ok());
}

#[test]
fn token_signed_with_other_key_is_rejected() {
    let service = create_test_service();
    let user = test_user();

    let other = TokenService::new(TokenServiceConfig {
        secret: "a-completely-different-secret".to_string(),
        ..TokenServiceConfig::default()
    });
    let token = other.generate_access_token(&user).unwrap();

    match service.decode_expired_token(&token) {
        Err(DomainError::Token(TokenError::InvalidSignature)) => {}
        other => panic!("expected InvalidSignature, got {:?}", other.err()),
    }
}

#[test]
fn token_with_wrong_algorithm_family_is_rejected() {
    let service = create_test_service();
    let user = test_user();
    let config = TokenServiceConfig::default();

    // Forge a token under HS384 with the same key material; the signature
    // verifies under a naive check but the header algorithm is wrong.
    let claims = Claims::for_user(&user, &config.issuer, &config.audience, 5);
    let key = EncodingKey::from_secret(config.secret.as_bytes());
    let forged = encode(&Header::new(Algorithm::HS384), &claims, &key).unwrap();

    match service.decode_expired_token(&forged) {
        Err(DomainError::Token(TokenError::AlgorithmMismatch)) => {}
        other => panic!("expected AlgorithmMismatch, got {:?}", other.err()),
    }
}

#[test]
fn garbage_token_is_invalid_format() {
    let service = create_test_service();

    match service.decode_expired_token("not-a-jwt") {
        Err(DomainError::Token(TokenError::InvalidTokenFormat)) => {}
        other => panic!("expected InvalidTokenFormat, got {:?}", other.err()),
    }
}

#[test]
fn refresh_token_is_32_random_bytes_base64() {
    let service = create_test_service();

    let token = service.generate_refresh_token();
    let decoded = BASE64.decode(&token).unwrap();
    assert_eq!(decoded.len(), 32);
}

#[test]
fn refresh_tokens_are_unique_across_draws() {
    let service = create_test_service();

    let first = service.generate_refresh_token();
    let second = service.generate_refresh_token();
    assert_ne!(first, second);
}
