//! Storage abstraction trait
//!
//! This module defines the BlobStore trait that all storage backends must
//! implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mediacat_core::{MediaKind, StorageBackend};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Description of one stored object, as known to the blob store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    /// Storage key, relative to the store root (`{category-slug}/{filename}`).
    pub locator: String,
    /// Publicly retrievable URL for the object.
    pub url: String,
    /// Last modification time. Only populated by backends that report one
    /// when listing; `store` returns `None`.
    pub last_modified: Option<DateTime<Utc>>,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait,
/// so handlers can work against any backend without coupling to
/// implementation details. Backends differ in one capability: S3 can
/// enumerate its own contents, local disk cannot (the manifest catalog is
/// the source of truth there), so `list` is allowed to fail with a
/// `ConfigError` on backends without an index.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store a file under `{category-slug}/{filename}` and return its
    /// locator and public URL.
    async fn store(
        &self,
        kind: MediaKind,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredBlob>;

    /// Retrieve a previously stored object's bytes by its locator.
    async fn retrieve(&self, locator: &str) -> StorageResult<Vec<u8>>;

    /// Public URL for an existing locator.
    fn url_for(&self, locator: &str) -> String;

    /// Enumerate stored objects for a category, newest first.
    ///
    /// Backends without their own index return a `ConfigError`.
    async fn list(&self, kind: MediaKind) -> StorageResult<Vec<StoredBlob>>;

    /// Check if an object exists.
    async fn exists(&self, locator: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
