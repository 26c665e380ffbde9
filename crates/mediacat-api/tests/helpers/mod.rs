//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p mediacat-api --test images_test` or
//! `cargo test -p mediacat-api`. Apps are rooted in a per-test temp dir, so
//! tests never share storage or manifests.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use mediacat_api::setup::routes;
use mediacat_api::state::AppState;
use mediacat_catalog::ManifestCatalog;
use mediacat_core::{Config, ListingSource, StorageBackend};
use mediacat_storage::{BlobStore, LocalStorage};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tempfile::TempDir;

/// Test application: server plus the temp dir owning its storage root.
pub struct TestApp {
    pub server: TestServer,
    pub storage_root: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Config for an isolated local-disk app rooted in `temp_dir`.
fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        storage_backend: StorageBackend::Local,
        listing_source: ListingSource::Auto,
        local_storage_path: temp_dir
            .path()
            .join("media")
            .to_string_lossy()
            .into_owned(),
        public_base_url: "http://localhost:5000/media".to_string(),
        manifest_path: temp_dir
            .path()
            .join("media-manifest.json")
            .to_string_lossy()
            .into_owned(),
        s3_bucket: None,
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        max_image_size_bytes: 10 * 1024 * 1024,
        max_video_size_bytes: 50 * 1024 * 1024,
        max_pdf_size_bytes: 10 * 1024 * 1024,
    }
}

/// Setup test app with isolated local storage and manifest.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the config first.
pub async fn setup_test_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut config = test_config(&temp_dir);
    adjust(&mut config);

    let storage: Arc<dyn BlobStore> = Arc::new(
        LocalStorage::new(
            config.local_storage_path.clone(),
            config.public_base_url.clone(),
        )
        .await
        .expect("Failed to create local storage"),
    );
    let catalog = Arc::new(ManifestCatalog::new(config.manifest_path.clone()));

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        catalog,
        started_at: Instant::now(),
    });

    let app = routes::setup_routes(&config, state)
        .await
        .expect("Failed to build router");

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage_root: PathBuf::from(&config.local_storage_path),
        _temp_dir: temp_dir,
    }
}

/// Multipart form with one "files" part per (filename, mime, bytes) triple.
pub fn files_form(files: Vec<(&str, &str, Vec<u8>)>) -> MultipartForm {
    let mut form = MultipartForm::new();
    for (name, mime, data) in files {
        form = form.add_part(
            "files",
            Part::bytes(bytes::Bytes::from(data))
                .file_name(name)
                .mime_type(mime),
        );
    }
    form
}

/// Multipart form with `count` identical payloads named `file-{i}.{ext}`.
pub fn batch_form(count: usize, ext: &str, mime: &str, payload: &[u8]) -> MultipartForm {
    let mut form = MultipartForm::new();
    for i in 0..count {
        form = form.add_part(
            "files",
            Part::bytes(bytes::Bytes::copy_from_slice(payload))
                .file_name(format!("file-{}.{}", i, ext))
                .mime_type(mime),
        );
    }
    form
}
