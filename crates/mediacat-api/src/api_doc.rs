//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mediacat_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediacat API",
        version = "0.1.0",
        description = "Media hosting API for images, videos, and PDF documents. Files are uploaded as multipart batches, stored on local disk or S3, and listed newest first per category."
    ),
    paths(
        // Images
        handlers::image_upload::upload_images,
        handlers::image_get::list_images,
        // Videos
        handlers::video_upload::upload_videos,
        handlers::video_get::list_videos,
        // PDFs
        handlers::pdf_upload::upload_pdfs,
        handlers::pdf_get::list_pdfs,
    ),
    components(
        schemas(
            // Core models
            models::MediaEntry,
            models::MediaKind,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "images", description = "Image upload and listing operations"),
        (name = "videos", description = "Video upload and listing operations"),
        (name = "pdfs", description = "PDF document upload and listing operations")
    )
)]
pub struct ApiDoc;
