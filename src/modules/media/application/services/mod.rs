mod upload_image_service;

pub use upload_image_service::UploadImageService;
