//! Mediacat Core Library
//!
//! This crate provides the core domain models, error types, and configuration
//! that are shared across all mediacat components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{MediaEntry, MediaKind};
pub use storage_types::{ListingSource, StorageBackend};
