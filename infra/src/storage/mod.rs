//! File storage implementations

pub mod avatar;

pub use avatar::FilesystemAvatarStorage;
