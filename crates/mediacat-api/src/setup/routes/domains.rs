//! Domain route groups (images, videos, pdfs).

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use mediacat_core::constants::API_PREFIX;
use std::sync::Arc;

pub fn image_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/images", API_PREFIX),
            post(handlers::image_upload::upload_images),
        )
        .route(
            &format!("{}/images", API_PREFIX),
            get(handlers::image_get::list_images),
        )
        .with_state(state)
}

pub fn video_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            post(handlers::video_upload::upload_videos),
        )
        .route(
            &format!("{}/videos", API_PREFIX),
            get(handlers::video_get::list_videos),
        )
        .with_state(state)
}

pub fn pdf_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/pdfs", API_PREFIX),
            post(handlers::pdf_upload::upload_pdfs),
        )
        .route(
            &format!("{}/pdfs", API_PREFIX),
            get(handlers::pdf_get::list_pdfs),
        )
        .with_state(state)
}
