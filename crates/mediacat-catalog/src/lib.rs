//! Mediacat Catalog Library
//!
//! This crate provides the manifest catalog: a single JSON document that
//! records every uploaded item per category, newest first. It is the source
//! of truth for list queries on backends that cannot enumerate their own
//! contents, and a complete upload history everywhere else.
//!
//! Reads are fail-open (a missing or corrupt manifest behaves as empty);
//! mutations are serialized through an internal async mutex so concurrent
//! uploads cannot lose each other's entries.

mod manifest;

pub use manifest::{CatalogError, CatalogResult, Manifest, ManifestCatalog};
