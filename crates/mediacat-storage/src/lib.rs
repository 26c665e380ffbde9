//! Mediacat Storage Library
//!
//! This crate provides the blob-store abstraction and its implementations.
//! It includes the BlobStore trait and backends for S3-compatible object
//! storage and the local filesystem.
//!
//! # Storage key format
//!
//! All backends key objects by category: `{category-slug}/{filename}`, e.g.
//! `images/1700000000000-9f3a1c2e.png`. Keys must not contain `..` or a
//! leading `/`. Key generation is centralized in the `keys` module so all
//! backends stay consistent.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use mediacat_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{BlobStore, StorageError, StorageResult, StoredBlob};
