pub mod listing;
pub mod upload;

pub use upload::MediaUploadService;
