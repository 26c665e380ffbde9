//! Application-wide constants.

/// Route prefix for the JSON API.
pub const API_PREFIX: &str = "/api";

/// Public path prefix under which locally stored media is served.
pub const MEDIA_PUBLIC_PREFIX: &str = "/media";

/// Multipart field name carrying uploaded files.
pub const UPLOAD_FIELD_NAME: &str = "files";
