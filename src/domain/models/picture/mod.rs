pub mod picture_upload;

pub use picture_upload::PictureUpload;
