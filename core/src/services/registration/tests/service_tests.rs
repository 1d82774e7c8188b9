//! Unit tests for the registration service

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::{MockRoleRepository, MockUserRepository, UserRepository};
use crate::services::registration::{
    AvatarStorage, NewUser, PasswordPolicy, RegistrationService,
};

/// Mock avatar store recording every write
struct MockAvatarStorage {
    stored: Mutex<Vec<(usize, String)>>,
}

impl MockAvatarStorage {
    fn new() -> Self {
        Self {
            stored: Mutex::new(Vec::new()),
        }
    }

    fn stored_files(&self) -> Vec<(usize, String)> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvatarStorage for MockAvatarStorage {
    async fn store(&self, bytes: &[u8], file_name: &str) -> DomainResult<String> {
        self.stored
            .lock()
            .unwrap()
            .push((bytes.len(), file_name.to_string()));
        Ok(format!("wwwroot/Images/{}", file_name))
    }
}

type TestService = RegistrationService<MockUserRepository, MockRoleRepository, MockAvatarStorage>;

fn create_service() -> (TestService, Arc<MockUserRepository>, Arc<MockRoleRepository>, Arc<MockAvatarStorage>) {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::new());
    let avatars = Arc::new(MockAvatarStorage::new());
    let service = RegistrationService::new(
        Arc::clone(&users),
        Arc::clone(&roles),
        Arc::clone(&avatars),
        PasswordPolicy::default(),
    );
    (service, users, roles, avatars)
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "P@ss1234".to_string(),
        address: "12 Analytical St".to_string(),
        gender: "female".to_string(),
        avatar: None,
    }
}

#[tokio::test]
async fn register_user_hashes_password_and_persists() {
    let (service, users, _, _) = create_service();

    let created = service.register_user(new_user("a@x.com")).await.unwrap();
    assert_ne!(created.password_hash, "P@ss1234");
    assert!(bcrypt::verify("P@ss1234", &created.password_hash).unwrap());

    let stored = users.find_by_email("a@x.com").await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn register_user_aggregates_policy_violations() {
    let (service, _, _, _) = create_service();

    let mut weak = new_user("weak@x.com");
    weak.password = "abc".to_string();

    match service.register_user(weak).await {
        Err(DomainError::Conflict { errors }) => {
            let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
            assert!(codes.contains(&"PasswordTooShort"));
            assert!(codes.contains(&"PasswordRequiresDigit"));
            assert!(codes.contains(&"PasswordRequiresUpper"));
            assert!(codes.contains(&"PasswordRequiresNonAlphanumeric"));
        }
        other => panic!("expected Conflict, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn register_user_rejects_malformed_email() {
    let (service, _, _, _) = create_service();

    match service.register_user(new_user("not-an-email")).await {
        Err(DomainError::Conflict { errors }) => {
            assert_eq!(errors[0].code, "InvalidEmail");
        }
        other => panic!("expected Conflict, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn register_user_rejects_duplicate_email() {
    let (service, _, _, _) = create_service();

    service.register_user(new_user("a@x.com")).await.unwrap();

    match service.register_user(new_user("a@x.com")).await {
        Err(DomainError::Conflict { errors }) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, "DuplicateEmail");
        }
        other => panic!("expected Conflict, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn register_user_stores_avatar_and_records_path() {
    let (service, _, _, avatars) = create_service();

    let image_bytes = vec![0xFFu8, 0xD8, 0xFF, 0xE0];
    let mut with_avatar = new_user("ava@x.com");
    with_avatar.avatar = Some(BASE64.encode(&image_bytes));

    let created = service.register_user(with_avatar).await.unwrap();

    let stored = avatars.stored_files();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0, image_bytes.len());
    assert!(stored[0].1.ends_with("_Ada_Lovelace.jpeg"));
    assert_eq!(
        created.avatar_url.as_deref(),
        Some(format!("wwwroot/Images/{}", stored[0].1).as_str())
    );
}

#[tokio::test]
async fn register_user_rejects_invalid_avatar_payload() {
    let (service, _, _, avatars) = create_service();

    let mut bad = new_user("bad@x.com");
    bad.avatar = Some("%%% not base64 %%%".to_string());

    match service.register_user(bad).await {
        Err(DomainError::Validation { message }) => {
            assert!(message.contains("userAvatar"));
        }
        other => panic!("expected Validation, got {:?}", other.err()),
    }
    assert!(avatars.stored_files().is_empty());
}

#[tokio::test]
async fn register_user_ignores_blank_avatar_payload() {
    let (service, _, _, avatars) = create_service();

    let mut blank = new_user("blank@x.com");
    blank.avatar = Some("   ".to_string());

    let created = service.register_user(blank).await.unwrap();
    assert!(created.avatar_url.is_none());
    assert!(avatars.stored_files().is_empty());
}

#[tokio::test]
async fn create_role_rejects_duplicate_name() {
    let (service, _, _, _) = create_service();

    service.create_role("Admin").await.unwrap();

    match service.create_role("Admin").await {
        Err(DomainError::Conflict { errors }) => {
            assert_eq!(errors[0].code, "DuplicateRoleName");
        }
        other => panic!("expected Conflict, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn assign_role_to_unknown_email_is_not_found() {
    let (service, _, _, _) = create_service();

    service.create_role("Admin").await.unwrap();

    match service.assign_role("nobody@x.com", "Admin").await {
        Err(DomainError::NotFound { resource }) => assert_eq!(resource, "User"),
        other => panic!("expected NotFound, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn assign_role_surfaces_store_errors_verbatim() {
    let (service, _, _, _) = create_service();

    service.register_user(new_user("a@x.com")).await.unwrap();
    service.create_role("Admin").await.unwrap();

    service.assign_role("a@x.com", "Admin").await.unwrap();
    match service.assign_role("a@x.com", "Admin").await {
        Err(DomainError::Conflict { errors }) => {
            assert_eq!(errors[0].code, "UserAlreadyInRole");
        }
        other => panic!("expected Conflict, got {:?}", other.err()),
    }

    match service.assign_role("a@x.com", "Missing").await {
        Err(DomainError::Conflict { errors }) => {
            assert_eq!(errors[0].code, "RoleNotFound");
        }
        other => panic!("expected Conflict, got {:?}", other.err()),
    }
}
