use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Storage backend types
///
/// This enum defines the available storage backend types.
/// It's defined in core because it's used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl StorageBackend {
    /// Whether this backend can enumerate its own contents.
    ///
    /// Local disk storage cannot: the manifest catalog is the source of
    /// truth for listings there.
    pub fn supports_listing(&self) -> bool {
        matches!(self, StorageBackend::S3)
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Local => write!(f, "local"),
        }
    }
}

/// Where list requests get their entries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// Backend listing when the backend supports it, manifest otherwise.
    Auto,
    /// Always the manifest catalog.
    Manifest,
    /// Always the storage backend's own index.
    Backend,
}

impl FromStr for ListingSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ListingSource::Auto),
            "manifest" => Ok(ListingSource::Manifest),
            "backend" => Ok(ListingSource::Backend),
            _ => Err(anyhow::anyhow!("Invalid listing source: {}", s)),
        }
    }
}

impl Display for ListingSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ListingSource::Auto => write!(f, "auto"),
            ListingSource::Manifest => write!(f, "manifest"),
            ListingSource::Backend => write!(f, "backend"),
        }
    }
}
