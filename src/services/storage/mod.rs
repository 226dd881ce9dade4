//! 프로필 사진 파일 저장소

pub mod picture_storage;

pub use picture_storage::{LocalPictureStorage, PictureStorage};
