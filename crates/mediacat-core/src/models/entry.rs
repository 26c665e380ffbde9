use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MediaKind;

/// One uploaded item, as recorded in the catalog and echoed to clients.
///
/// Entries are immutable once created; the catalog only ever inserts new
/// ones at the front of a category's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MediaEntry {
    /// Storage-local identifier, unique within its category.
    pub filename: String,
    /// Category the item was uploaded under.
    pub category: MediaKind,
    /// Relative key usable to retrieve the bytes from the blob store.
    #[serde(rename = "src")]
    pub locator: String,
    /// Fully qualified retrieval URL.
    pub url: String,
    /// Creation time, set once at upload.
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let entry = MediaEntry {
            filename: "1700000000000-deadbeef.png".to_string(),
            category: MediaKind::Image,
            locator: "images/1700000000000-deadbeef.png".to_string(),
            url: "http://localhost:5000/media/images/1700000000000-deadbeef.png".to_string(),
            uploaded_at: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("filename").is_some());
        assert_eq!(json.get("category").and_then(|v| v.as_str()), Some("image"));
        assert!(json.get("src").is_some());
        assert!(json.get("url").is_some());
        assert!(json.get("uploadedAt").is_some());
        assert!(json.get("locator").is_none());
        assert!(json.get("uploaded_at").is_none());
    }
}
