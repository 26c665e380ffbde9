//! Shared key generation for storage backends.
//!
//! Key format: `{category-slug}/{filename}`, e.g. `images/1700000000000-9f3a1c2e.png`.

use mediacat_core::MediaKind;

/// Generate a storage key for the given category and filename.
///
/// All backends must use this format so locators recorded in the manifest
/// stay valid across backends.
pub fn storage_key(kind: MediaKind, filename: &str) -> String {
    format!("{}/{}", kind.slug(), filename)
}
