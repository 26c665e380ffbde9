//! Common utilities for file upload handlers

use axum::extract::Multipart;
use chrono::Utc;
use mediacat_core::constants::UPLOAD_FIELD_NAME;
use mediacat_core::{AppError, MediaKind};

/// One file lifted out of a multipart request.
#[derive(Debug)]
pub struct UploadPart {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Extract every file from the repeated "files" multipart field.
/// Fields with any other name are ignored. The whole batch is read before
/// anything is stored, so a malformed part rejects the request with no
/// partial state left behind.
pub async fn extract_multipart_files(
    mut multipart: Multipart,
) -> Result<Vec<UploadPart>, AppError> {
    let mut parts = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if field_name != UPLOAD_FIELD_NAME {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let content_type = field
            .content_type()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        parts.push(UploadPart {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }

    Ok(parts)
}

/// Validate the number of files in an upload batch against the per-category limit.
pub fn validate_batch_count(count: usize, kind: MediaKind) -> Result<(), AppError> {
    if count == 0 {
        return Err(AppError::InvalidInput(format!(
            "No files provided; send at least one part named '{}'",
            UPLOAD_FIELD_NAME
        )));
    }

    let limit = kind.upload_batch_limit();
    if count > limit {
        return Err(AppError::InvalidInput(format!(
            "Too many files: at most {} {}s per upload, got {}",
            limit,
            kind.as_str(),
            count
        )));
    }

    Ok(())
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Derive a storage-safe lowercase extension from an uploaded filename.
/// Returns None when there is no usable extension: no dot, a dotfile like
/// ".env", or nothing alphanumeric after the final dot.
pub fn sanitized_extension(filename: &str) -> Option<String> {
    const MAX_EXTENSION_LENGTH: usize = 16;

    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }

    let cleaned: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_EXTENSION_LENGTH)
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Generate a collision-resistant stored filename from an upload timestamp
/// and a random nonce, keeping the original extension when it is usable.
pub fn unique_filename(original: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let nonce: u32 = rand::random();
    match sanitized_extension(original) {
        Some(ext) => format!("{}-{:08x}.{}", timestamp, nonce, ext),
        None => format!("{}-{:08x}", timestamp, nonce),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_extension_lowercases_and_strips() {
        assert_eq!(sanitized_extension("photo.PNG"), Some("png".to_string()));
        assert_eq!(sanitized_extension("report.p d f"), Some("pdf".to_string()));
        assert_eq!(sanitized_extension("archive.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn sanitized_extension_handles_missing_extension() {
        assert_eq!(sanitized_extension("noext"), None);
        assert_eq!(sanitized_extension(".env"), None);
        assert_eq!(sanitized_extension("weird."), None);
        assert_eq!(sanitized_extension("emoji.🦀"), None);
    }

    #[test]
    fn unique_filename_keeps_extension() {
        let name = unique_filename("cat.png");
        assert!(name.ends_with(".png"));
        let (stem, _) = name.rsplit_once('.').unwrap();
        let (timestamp, nonce) = stem.split_once('-').unwrap();
        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(nonce.len(), 8);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn unique_filename_without_extension() {
        let name = unique_filename("README");
        assert!(!name.contains('.'));
        assert!(name.contains('-'));
    }

    #[test]
    fn unique_filenames_differ_for_same_input() {
        let a = unique_filename("cat.png");
        let b = unique_filename("cat.png");
        assert_ne!(a, b);
    }

    #[test]
    fn batch_count_enforces_per_category_limits() {
        assert!(validate_batch_count(1, MediaKind::Image).is_ok());
        assert!(validate_batch_count(20, MediaKind::Image).is_ok());
        assert!(validate_batch_count(21, MediaKind::Image).is_err());
        assert!(validate_batch_count(10, MediaKind::Video).is_ok());
        assert!(validate_batch_count(11, MediaKind::Video).is_err());
        assert!(validate_batch_count(30, MediaKind::Pdf).is_ok());
        assert!(validate_batch_count(31, MediaKind::Pdf).is_err());
    }

    #[test]
    fn batch_count_rejects_empty_batch() {
        assert!(validate_batch_count(0, MediaKind::Image).is_err());
    }

    #[test]
    fn file_size_respects_limit() {
        assert!(validate_file_size(10, 10).is_ok());
        assert!(validate_file_size(11, 10).is_err());
    }
}
