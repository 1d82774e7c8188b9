//! Collaborator traits for the registration service

use async_trait::async_trait;

use crate::errors::DomainError;

/// Content store for uploaded avatar images
///
/// The registration service decodes the client payload and hands the raw
/// bytes here; the implementation persists them and returns a reference
/// path that is stored on the user record.
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    /// Store avatar bytes under the given file name, returning the
    /// reference path of the stored image
    async fn store(&self, bytes: &[u8], file_name: &str) -> Result<String, DomainError>;
}
