//! Data models for the application
//!
//! The domain here is small: a closed set of media categories and the
//! catalog entry recorded for each uploaded file.

mod entry;
mod kind;

// Re-export all models for convenient imports
pub use entry::MediaEntry;
pub use kind::MediaKind;
