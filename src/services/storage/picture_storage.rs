//! 프로필 사진 저장소
//!
//! 사용자 문서에는 파일 참조(파일명)만 저장하고, 바이트는 이 저장소가 보관합니다.
//! 조회 API는 참조를 실제 파일 위치 문자열로 바꿔 돌려줍니다.
//!
//! ```text
//! {PICTURE_DIR}/{username}_{uuid}.{ext}
//! ```

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use actix_web::web;
use uuid::Uuid;
use crate::{
    config::StorageConfig,
    core::errors::{AppError, AppResult},
    domain::models::picture::PictureUpload,
};

#[async_trait]
pub trait PictureStorage: Send + Sync {
    /// 사진을 저장하고, 사용자 문서에 기록할 참조를 돌려줍니다.
    async fn save(&self, username: &str, upload: PictureUpload) -> AppResult<String>;

    /// 참조가 가리키는 파일 위치
    fn location(&self, reference: &str) -> AppResult<String>;

    /// 파일을 지웁니다. 이미 없으면 성공으로 봅니다.
    async fn remove(&self, reference: &str) -> AppResult<()>;
}

/// 로컬 디렉터리 저장소
#[derive(Debug, Clone)]
pub struct LocalPictureStorage {
    root: PathBuf,
}

fn file_stem_for(username: &str) -> String {
    username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

fn blocking_failed(e: actix_web::error::BlockingError) -> AppError {
    AppError::StorageError(format!("파일 작업 스레드 실행 실패: {}", e))
}

impl LocalPictureStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config() -> Self {
        Self::new(StorageConfig::picture_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 참조를 루트 아래 경로로 바꿉니다. 디렉터리를 벗어나는 참조는 거부합니다.
    fn resolve(&self, reference: &str) -> AppResult<PathBuf> {
        let valid = !reference.is_empty()
            && reference != "."
            && reference != ".."
            && !reference.contains(['/', '\\'])
            && !reference.contains('\0');

        if !valid {
            return Err(AppError::StorageError(format!("잘못된 사진 참조입니다: {}", reference)));
        }

        Ok(self.root.join(reference))
    }
}

#[async_trait]
impl PictureStorage for LocalPictureStorage {
    async fn save(&self, username: &str, upload: PictureUpload) -> AppResult<String> {
        let reference = match upload.extension() {
            Some(ext) => format!("{}_{}.{}", file_stem_for(username), Uuid::new_v4(), ext),
            None => format!("{}_{}", file_stem_for(username), Uuid::new_v4()),
        };
        let root = self.root.clone();
        let path = self.resolve(&reference)?;
        let size = upload.len();

        web::block(move || -> std::io::Result<()> {
            std::fs::create_dir_all(&root)?;
            std::fs::write(&path, &upload.bytes)
        })
        .await
        .map_err(blocking_failed)?
        .map_err(|e| AppError::StorageError(format!("프로필 사진 저장 실패: {}", e)))?;

        log::info!("프로필 사진 저장: {} ({} bytes)", reference, size);
        Ok(reference)
    }

    fn location(&self, reference: &str) -> AppResult<String> {
        Ok(self.resolve(reference)?.to_string_lossy().into_owned())
    }

    async fn remove(&self, reference: &str) -> AppResult<()> {
        let path = self.resolve(reference)?;

        web::block(move || match std::fs::remove_file(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        })
        .await
        .map_err(blocking_failed)?
        .map_err(|e| AppError::StorageError(format!("프로필 사진 삭제 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(bytes: &[u8]) -> PictureUpload {
        PictureUpload::new(Some("me.png".to_string()), Some("image/png".to_string()), bytes.to_vec())
    }

    #[actix_web::test]
    async fn test_save_writes_file_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalPictureStorage::new(dir.path().join("pictures"));

        let reference = storage.save("alice", png(b"\x89PNG")).await.unwrap();

        assert!(reference.starts_with("alice_"));
        assert!(reference.ends_with(".png"));
        let location = storage.location(&reference).unwrap();
        assert_eq!(std::fs::read(&location).unwrap(), b"\x89PNG");
        assert!(Path::new(&location).starts_with(dir.path()));
    }

    #[actix_web::test]
    async fn test_username_is_sanitized_in_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalPictureStorage::new(dir.path());

        let reference = storage.save("../evil", png(b"x")).await.unwrap();

        assert!(reference.starts_with("___evil_"));
        assert!(std::fs::read(storage.location(&reference).unwrap()).is_ok());
    }

    #[actix_web::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalPictureStorage::new(dir.path());
        let reference = storage.save("bob", png(b"x")).await.unwrap();

        storage.remove(&reference).await.unwrap();
        storage.remove(&reference).await.unwrap();

        assert!(!Path::new(&storage.location(&reference).unwrap()).exists());
    }

    #[test]
    fn test_traversal_reference_rejected() {
        let storage = LocalPictureStorage::new("/tmp/pictures");

        assert!(matches!(storage.location("../secret"), Err(AppError::StorageError(_))));
        assert!(matches!(storage.location(".."), Err(AppError::StorageError(_))));
        assert!(matches!(storage.location(""), Err(AppError::StorageError(_))));
    }
}
