pub mod image_get;
pub mod image_upload;
pub mod pdf_get;
pub mod pdf_upload;
pub mod video_get;
pub mod video_upload;
