mod upload_image;

pub use upload_image::{UploadImageError, UploadImageUseCase, UploadedImage};
