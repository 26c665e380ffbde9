//! Configuration module
//!
//! Environment-driven configuration for the API service: listen address,
//! CORS, storage backend selection, manifest location, listing source,
//! and per-category upload size limits.

use std::env;

use crate::constants::MEDIA_PUBLIC_PREFIX;
use crate::models::MediaKind;
use crate::storage_types::{ListingSource, StorageBackend};

// Defaults, overridable via environment
const DEFAULT_PORT: u16 = 5000;
const MAX_IMAGE_SIZE_MB: usize = 10;
const MAX_VIDEO_SIZE_MB: usize = 500;
const MAX_PDF_SIZE_MB: usize = 50;

/// Application configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub listing_source: ListingSource,
    pub local_storage_path: String,
    pub public_base_url: String,
    pub manifest_path: String,
    pub s3_bucket: Option<String>,
    pub s3_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    // Upload size limits
    pub max_image_size_bytes: usize,
    pub max_video_size_bytes: usize,
    pub max_pdf_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let server_port: u16 = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let storage_backend: StorageBackend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let listing_source: ListingSource = env::var("LISTING_SOURCE")
            .unwrap_or_else(|_| "auto".to_string())
            .parse()?;

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port,
            environment,
            cors_origins,
            storage_backend,
            listing_source,
            local_storage_path: env::var("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|_| "media".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| {
                format!("http://localhost:{}{}", server_port, MEDIA_PUBLIC_PREFIX)
            }),
            manifest_path: env::var("MANIFEST_PATH")
                .unwrap_or_else(|_| "media-manifest.json".to_string()),
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            max_image_size_bytes: env::var("MAX_IMAGE_SIZE_MB")
                .unwrap_or_else(|_| MAX_IMAGE_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_IMAGE_SIZE_MB)
                * 1024
                * 1024,
            max_video_size_bytes: env::var("MAX_VIDEO_SIZE_MB")
                .unwrap_or_else(|_| MAX_VIDEO_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_VIDEO_SIZE_MB)
                * 1024
                * 1024,
            max_pdf_size_bytes: env::var("MAX_PDF_SIZE_MB")
                .unwrap_or_else(|_| MAX_PDF_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_PDF_SIZE_MB)
                * 1024
                * 1024,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.trim().is_empty() {
                    return Err(anyhow::anyhow!("LOCAL_STORAGE_PATH cannot be empty"));
                }
            }
        }

        if self.listing_source == ListingSource::Backend
            && !self.storage_backend.supports_listing()
        {
            return Err(anyhow::anyhow!(
                "LISTING_SOURCE=backend requires a storage backend that supports listing (got {})",
                self.storage_backend
            ));
        }

        if self.max_image_size_bytes == 0
            || self.max_video_size_bytes == 0
            || self.max_pdf_size_bytes == 0
        {
            return Err(anyhow::anyhow!("Upload size limits must be positive"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase().eq("production")
            || self.environment.to_lowercase().eq("prod")
    }

    /// Per-file size limit for one category.
    pub fn max_size_bytes_for(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Image => self.max_image_size_bytes,
            MediaKind::Video => self.max_video_size_bytes,
            MediaKind::Pdf => self.max_pdf_size_bytes,
        }
    }

    /// Upper bound for a whole upload request body: the largest batch any
    /// category accepts (per-file limit times per-request count limit), so
    /// a batch the handler would accept is never cut off at the transport.
    pub fn max_request_body_bytes(&self) -> usize {
        MediaKind::ALL
            .iter()
            .map(|kind| self.max_size_bytes_for(*kind) * kind.upload_batch_limit())
            .max()
            .unwrap_or(self.max_video_size_bytes)
    }

    /// Whether list requests are answered from the storage backend's own
    /// index rather than the manifest catalog.
    pub fn lists_from_backend(&self) -> bool {
        match self.listing_source {
            ListingSource::Manifest => false,
            ListingSource::Backend => true,
            ListingSource::Auto => self.storage_backend.supports_listing(),
        }
    }
}
