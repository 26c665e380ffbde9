//! Manifest catalog
//!
//! One JSON document, keyed by plural category name, each value an ordered
//! list of entries, newest first. Every mutation is a full read-modify-write
//! of the document, serialized through an async mutex so concurrent uploads
//! cannot overwrite each other's entries. Reads are fail-open: a missing,
//! unreadable, or corrupt manifest loads as empty, with the three causes
//! logged distinctly.

use std::io;
use std::path::{Path, PathBuf};

use mediacat_core::{MediaEntry, MediaKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

/// Catalog operation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read manifest: {0}")]
    ReadFailed(String),

    #[error("Manifest is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to persist manifest: {0}")]
    PersistFailed(String),

    #[error("Invalid upload batch: {0}")]
    InvalidBatch(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Persisted manifest document.
///
/// Keys absent from the document deserialize as empty lists, so a manifest
/// written before a category existed (or trimmed by hand) still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub images: Vec<MediaEntry>,
    #[serde(default)]
    pub videos: Vec<MediaEntry>,
    #[serde(default)]
    pub pdfs: Vec<MediaEntry>,
}

impl Manifest {
    /// Entries for one category, newest first.
    pub fn entries(&self, kind: MediaKind) -> &[MediaEntry] {
        match kind {
            MediaKind::Image => &self.images,
            MediaKind::Video => &self.videos,
            MediaKind::Pdf => &self.pdfs,
        }
    }

    fn entries_mut(&mut self, kind: MediaKind) -> &mut Vec<MediaEntry> {
        match kind {
            MediaKind::Image => &mut self.images,
            MediaKind::Video => &mut self.videos,
            MediaKind::Pdf => &mut self.pdfs,
        }
    }

    fn into_entries(self, kind: MediaKind) -> Vec<MediaEntry> {
        match kind {
            MediaKind::Image => self.images,
            MediaKind::Video => self.videos,
            MediaKind::Pdf => self.pdfs,
        }
    }
}

/// Durable record of upload history per category.
///
/// Owned by application state and shared via `Arc`; handlers never touch
/// the manifest file directly. The write lock guards the whole
/// load-mutate-persist cycle, not just the file write.
#[derive(Debug)]
pub struct ManifestCatalog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ManifestCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ManifestCatalog {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the manifest document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current manifest, treating any read failure as an empty
    /// catalog. "No manifest yet" is a normal first-run condition and logs
    /// at debug; unreadable and corrupt documents log at warn so operators
    /// can tell missing data from damaged data.
    pub async fn load(&self) -> Manifest {
        match self.read_manifest().await {
            Ok(Some(manifest)) => manifest,
            Ok(None) => {
                tracing::debug!(
                    path = %self.path.display(),
                    "No manifest file yet, starting with an empty catalog"
                );
                Manifest::default()
            }
            Err(CatalogError::Corrupt(err)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Manifest is not valid JSON, treating catalog as empty"
                );
                Manifest::default()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Manifest could not be read, treating catalog as empty"
                );
                Manifest::default()
            }
        }
    }

    /// Record a batch of newly stored items at the front of a category's
    /// list. The batch keeps its submitted order; previously recorded
    /// entries follow it unchanged. Callers must only pass items already
    /// written to the blob store.
    ///
    /// An empty batch is rejected without touching the manifest.
    pub async fn record_uploads(
        &self,
        kind: MediaKind,
        mut new_entries: Vec<MediaEntry>,
    ) -> CatalogResult<()> {
        if new_entries.is_empty() {
            return Err(CatalogError::InvalidBatch(
                "upload batch contains no entries".to_string(),
            ));
        }

        let added = new_entries.len();
        let _guard = self.write_lock.lock().await;

        let mut manifest = self.load().await;
        let slot = manifest.entries_mut(kind);
        new_entries.extend(slot.drain(..));
        *slot = new_entries;
        let total = manifest.entries(kind).len();

        self.persist(&manifest).await?;
        tracing::info!(
            category = %kind,
            added,
            total,
            "Recorded uploads in manifest"
        );
        Ok(())
    }

    /// Entries for one category, newest first. Read failures yield an
    /// empty list per the fail-open policy of [`load`](Self::load).
    pub async fn list(&self, kind: MediaKind) -> Vec<MediaEntry> {
        self.load().await.into_entries(kind)
    }

    /// Health probe: succeeds when the manifest is absent (legitimately
    /// empty) or readable and well-formed. Unlike `load`, read failures
    /// are surfaced so a corrupt manifest shows up in health output even
    /// though serving stays fail-open.
    pub async fn probe(&self) -> CatalogResult<()> {
        self.read_manifest().await.map(|_| ())
    }

    async fn read_manifest(&self) -> CatalogResult<Option<Manifest>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(CatalogError::ReadFailed(format!(
                    "{}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|err| {
            CatalogError::Corrupt(format!("{}: {}", self.path.display(), err))
        })
    }

    async fn persist(&self, manifest: &Manifest) -> CatalogResult<()> {
        let json = serde_json::to_vec_pretty(manifest)
            .map_err(|err| CatalogError::PersistFailed(format!("serializing manifest: {}", err)))?;

        fs::write(&self.path, json).await.map_err(|err| {
            CatalogError::PersistFailed(format!("{}: {}", self.path.display(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn entry(kind: MediaKind, filename: &str) -> MediaEntry {
        MediaEntry {
            filename: filename.to_string(),
            category: kind,
            locator: format!("{}/{}", kind.slug(), filename),
            url: format!("http://localhost:5000/media/{}/{}", kind.slug(), filename),
            uploaded_at: Utc::now(),
        }
    }

    fn filenames(entries: &[MediaEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.filename.as_str()).collect()
    }

    fn catalog_in(dir: &TempDir) -> ManifestCatalog {
        ManifestCatalog::new(dir.path().join("media-manifest.json"))
    }

    #[tokio::test]
    async fn test_load_without_manifest_is_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        let manifest = catalog.load().await;
        assert!(manifest.images.is_empty());
        assert!(manifest.videos.is_empty());
        assert!(manifest.pdfs.is_empty());
        assert!(catalog.probe().await.is_ok());
    }

    #[tokio::test]
    async fn test_record_prepends_newest_batch() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        catalog
            .record_uploads(
                MediaKind::Image,
                vec![
                    entry(MediaKind::Image, "a.png"),
                    entry(MediaKind::Image, "b.png"),
                ],
            )
            .await
            .unwrap();
        catalog
            .record_uploads(
                MediaKind::Image,
                vec![
                    entry(MediaKind::Image, "c.png"),
                    entry(MediaKind::Image, "d.png"),
                ],
            )
            .await
            .unwrap();

        let listed = catalog.list(MediaKind::Image).await;
        assert_eq!(filenames(&listed), vec!["c.png", "d.png", "a.png", "b.png"]);
    }

    #[tokio::test]
    async fn test_record_leaves_other_categories_untouched() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        catalog
            .record_uploads(MediaKind::Image, vec![entry(MediaKind::Image, "a.png")])
            .await
            .unwrap();
        catalog
            .record_uploads(MediaKind::Video, vec![entry(MediaKind::Video, "b.mp4")])
            .await
            .unwrap();

        assert_eq!(catalog.list(MediaKind::Image).await.len(), 1);
        assert_eq!(catalog.list(MediaKind::Video).await.len(), 1);
        assert!(catalog.list(MediaKind::Pdf).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        catalog
            .record_uploads(MediaKind::Pdf, vec![entry(MediaKind::Pdf, "report.pdf")])
            .await
            .unwrap();

        let first = catalog.load().await;
        let second = catalog.load().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media-manifest.json");

        let catalog = ManifestCatalog::new(&path);
        catalog
            .record_uploads(MediaKind::Image, vec![entry(MediaKind::Image, "a.png")])
            .await
            .unwrap();
        drop(catalog);

        let reopened = ManifestCatalog::new(&path);
        assert_eq!(filenames(&reopened.list(MediaKind::Image).await), vec!["a.png"]);
    }

    #[tokio::test]
    async fn test_empty_batch_rejected_without_write() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        let err = catalog
            .record_uploads(MediaKind::Image, vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBatch(_)));
        assert!(!dir.path().join("media-manifest.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_manifest_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media-manifest.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let catalog = ManifestCatalog::new(&path);
        assert!(catalog.list(MediaKind::Image).await.is_empty());
        assert!(matches!(
            catalog.probe().await.unwrap_err(),
            CatalogError::Corrupt(_)
        ));

        // The next successful write replaces the damaged document.
        catalog
            .record_uploads(MediaKind::Image, vec![entry(MediaKind::Image, "a.png")])
            .await
            .unwrap();
        assert_eq!(catalog.list(MediaKind::Image).await.len(), 1);
        assert!(catalog.probe().await.is_ok());
    }

    #[tokio::test]
    async fn test_manifest_with_missing_keys_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media-manifest.json");
        let doc = r#"{
            "images": [
                {
                    "filename": "a.png",
                    "category": "image",
                    "src": "images/a.png",
                    "url": "http://localhost:5000/media/images/a.png",
                    "uploadedAt": "2024-01-01T00:00:00Z"
                }
            ]
        }"#;
        std::fs::write(&path, doc).unwrap();

        let catalog = ManifestCatalog::new(&path);
        assert_eq!(catalog.list(MediaKind::Image).await.len(), 1);
        assert!(catalog.list(MediaKind::Video).await.is_empty());
        assert!(catalog.list(MediaKind::Pdf).await.is_empty());
    }

    #[tokio::test]
    async fn test_persist_failure_is_surfaced() {
        let dir = TempDir::new().unwrap();
        let catalog = ManifestCatalog::new(dir.path().join("missing-dir").join("manifest.json"));

        let err = catalog
            .record_uploads(MediaKind::Image, vec![entry(MediaKind::Image, "a.png")])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::PersistFailed(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_records_lose_nothing() {
        let dir = TempDir::new().unwrap();
        let catalog = Arc::new(catalog_in(&dir));

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let catalog = catalog.clone();
                tokio::spawn(async move {
                    catalog
                        .record_uploads(
                            MediaKind::Image,
                            vec![entry(MediaKind::Image, &format!("file-{}.png", i))],
                        )
                        .await
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            result.unwrap().unwrap();
        }

        assert_eq!(catalog.list(MediaKind::Image).await.len(), 16);
    }
}
