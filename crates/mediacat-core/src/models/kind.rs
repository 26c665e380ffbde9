use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Media category enum
///
/// The three categories the service accepts. The set is closed: every
/// route, storage prefix, and catalog section is keyed by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Pdf,
}

impl MediaKind {
    /// All categories, in route declaration order.
    pub const ALL: [MediaKind; 3] = [MediaKind::Image, MediaKind::Video, MediaKind::Pdf];

    /// Singular form used in entry payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Pdf => "pdf",
        }
    }

    /// Plural slug used in route paths, storage prefixes, and manifest keys.
    pub fn slug(&self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
            MediaKind::Pdf => "pdfs",
        }
    }

    /// Maximum number of files accepted in a single upload request.
    pub fn upload_batch_limit(&self) -> usize {
        match self {
            MediaKind::Image => 20,
            MediaKind::Video => 10,
            MediaKind::Pdf => 30,
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
