//! # User Service
//!
//! 사용자 리소스의 비즈니스 로직을 담당합니다. 라우팅 계층은 [`UserStore`] trait만 알고,
//! 이 모듈의 [`UserService`]가 기본 구현입니다.
//!
//! ## 인증 순서
//!
//! `AuthContext`를 받는 모든 연산은 리포지토리에 접근하기 전에 토큰을 검증합니다.
//!
//! 1. Authorization 헤더 없음 → 401
//! 2. `Bearer <token>` 형식 아님 → 401
//! 3. 토큰 위조/만료 → 401
//! 4. 이후에만 리포지토리 조회
//!
//! ## 협력 객체
//!
//! ```text
//! UserService
//! ├── Arc<dyn UserRepository>   ← MongoDB 또는 메모리
//! ├── Arc<dyn PictureStorage>   ← 로컬 디렉터리
//! ├── Arc<dyn TokenValidator>   ← JWT
//! └── Arc<dyn PasswordHasher>   ← bcrypt (수정 시 새 비밀번호 해싱)
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::UpdateUserRequest,
        entities::users::user::User,
        models::{auth::AuthContext, picture::PictureUpload, token::TokenClaims, users::NewUser},
    },
    repositories::users::{parse_object_id, UserRepository},
    services::{
        auth::{PasswordHasher, TokenValidator},
        storage::PictureStorage,
    },
};

/// 사용자 저장소 연산
///
/// `register`와 `verify_credentials`를 제외한 모든 연산은 호출자의 `AuthContext`를 받습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 등록합니다. 비밀번호는 이미 해시된 상태여야 합니다.
    async fn register(&self, new_user: NewUser) -> AppResult<User>;

    /// 본문에 있는 필드만 바꾸는 부분 수정
    async fn update(&self, ctx: &AuthContext, id: &str, changes: UpdateUserRequest) -> AppResult<User>;

    /// 삭제 확인 메시지를 돌려줍니다.
    async fn delete(&self, ctx: &AuthContext, id: &str) -> AppResult<String>;

    async fn get_all_users(&self, ctx: &AuthContext) -> AppResult<Vec<User>>;

    async fn get_by_username(&self, ctx: &AuthContext, username: &str) -> AppResult<User>;

    async fn set_profile_picture(&self, ctx: &AuthContext, username: &str, upload: PictureUpload) -> AppResult<User>;

    /// 저장된 프로필 사진의 파일 위치
    async fn get_profile_picture(&self, ctx: &AuthContext, username: &str) -> AppResult<String>;

    async fn set_role_to_user(&self, ctx: &AuthContext, id: &str, role: &str) -> AppResult<User>;

    /// 로그인 자격 증명 확인. 사용자가 없거나 비밀번호가 틀리면 같은 401 메시지입니다.
    async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<User>;
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    picture_storage: Arc<dyn PictureStorage>,
    token_validator: Arc<dyn TokenValidator>,
    password_hasher: Arc<dyn PasswordHasher>,
    max_picture_bytes: usize,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn user_not_found(what: &str) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", what))
}

fn bad_credentials() -> AppError {
    AppError::AuthenticationError("잘못된 사용자명 또는 비밀번호입니다".to_string())
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        picture_storage: Arc<dyn PictureStorage>,
        token_validator: Arc<dyn TokenValidator>,
        password_hasher: Arc<dyn PasswordHasher>,
        max_picture_bytes: usize,
    ) -> Self {
        Self {
            user_repo,
            picture_storage,
            token_validator,
            password_hasher,
            max_picture_bytes,
        }
    }

    fn authorize(&self, ctx: &AuthContext) -> AppResult<TokenClaims> {
        let token = ctx.bearer_token()?;
        let claims = self.token_validator.validate(token)?;

        log::debug!("인증된 호출자: {} ({})", claims.username, claims.sub);
        Ok(claims)
    }

    async fn existing_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = parse_object_id(id)?;

        self.user_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    async fn existing_by_username(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| user_not_found(username))
    }

    async fn save(&self, user: &User, what: &str) -> AppResult<User> {
        self.user_repo
            .replace(user)
            .await?
            .ok_or_else(|| user_not_found(what))
    }

    fn check_upload(&self, upload: &PictureUpload) -> AppResult<()> {
        if upload.is_empty() {
            return Err(AppError::ValidationError("업로드된 파일이 비어 있습니다".to_string()));
        }

        if !upload.is_image() {
            return Err(AppError::ValidationError(format!(
                "이미지 파일만 업로드할 수 있습니다: {}",
                upload.content_type.as_deref().unwrap_or("unknown")
            )));
        }

        if upload.len() > self.max_picture_bytes {
            return Err(AppError::ValidationError(format!(
                "파일이 너무 큽니다 ({} bytes, 최대 {} bytes)",
                upload.len(),
                self.max_picture_bytes
            )));
        }

        Ok(())
    }

    async fn discard_picture(&self, reference: &str) {
        if let Err(e) = self.picture_storage.remove(reference).await {
            log::warn!("프로필 사진 삭제 실패 ({}): {}", reference, e);
        }
    }
}

#[async_trait]
impl UserStore for UserService {
    async fn register(&self, new_user: NewUser) -> AppResult<User> {
        let missing: Vec<&str> = [
            ("username", &new_user.username),
            ("password", &new_user.password_hash),
            ("firstName", &new_user.first_name),
            ("lastName", &new_user.last_name),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!("필수 필드가 없습니다: {}", missing.join(", "))));
        }

        let created = self.user_repo.create(new_user.into_user()).await?;
        log::info!("사용자 등록 완료: {}", created.username);

        Ok(created)
    }

    async fn update(&self, ctx: &AuthContext, id: &str, changes: UpdateUserRequest) -> AppResult<User> {
        self.authorize(ctx)?;
        changes.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut user = self.existing_by_id(id).await?;

        if changes.is_empty() {
            return Ok(user);
        }

        if let Some(username) = changes.username {
            let username = username.trim().to_string();
            if username != user.username {
                if self.user_repo.find_by_username(&username).await?.is_some() {
                    return Err(AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", username)));
                }
                user.username = username;
            }
        }

        if let Some(password) = changes.password {
            user.password_hash = self.password_hasher.hash(&password)?;
        }

        if let Some(first_name) = changes.first_name {
            user.first_name = first_name.trim().to_string();
        }

        if let Some(last_name) = changes.last_name {
            user.last_name = last_name.trim().to_string();
        }

        user.touch();
        let updated = self.save(&user, id).await?;
        log::info!("사용자 수정 완료: {} ({})", updated.username, id);

        Ok(updated)
    }

    async fn delete(&self, ctx: &AuthContext, id: &str) -> AppResult<String> {
        self.authorize(ctx)?;
        let object_id = parse_object_id(id)?;

        let deleted = self.user_repo
            .delete(&object_id)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        if let Some(reference) = &deleted.profile_picture {
            self.discard_picture(reference).await;
        }

        Ok(format!("User with id {} deleted", id))
    }

    async fn get_all_users(&self, ctx: &AuthContext) -> AppResult<Vec<User>> {
        self.authorize(ctx)?;
        self.user_repo.find_all().await
    }

    async fn get_by_username(&self, ctx: &AuthContext, username: &str) -> AppResult<User> {
        self.authorize(ctx)?;
        self.existing_by_username(username).await
    }

    async fn set_profile_picture(&self, ctx: &AuthContext, username: &str, upload: PictureUpload) -> AppResult<User> {
        self.authorize(ctx)?;
        self.check_upload(&upload)?;

        let mut user = self.existing_by_username(username).await?;
        let previous = user.profile_picture.take();

        let reference = self.picture_storage.save(&user.username, upload).await?;
        user.profile_picture = Some(reference.clone());
        user.touch();

        let updated = match self.save(&user, username).await {
            Ok(updated) => updated,
            Err(e) => {
                self.discard_picture(&reference).await;
                return Err(e);
            }
        };

        if let Some(previous) = previous {
            self.discard_picture(&previous).await;
        }

        log::info!("프로필 사진 변경: {}", updated.username);
        Ok(updated)
    }

    async fn get_profile_picture(&self, ctx: &AuthContext, username: &str) -> AppResult<String> {
        self.authorize(ctx)?;

        let user = self.existing_by_username(username).await?;
        let reference = user.profile_picture
            .ok_or_else(|| AppError::NotFound(format!("프로필 사진이 없습니다: {}", username)))?;

        self.picture_storage.location(&reference)
    }

    async fn set_role_to_user(&self, ctx: &AuthContext, id: &str, role: &str) -> AppResult<User> {
        self.authorize(ctx)?;

        let role = role.trim();
        if role.is_empty() {
            return Err(AppError::ValidationError("역할이 비어 있습니다".to_string()));
        }

        let mut user = self.existing_by_id(id).await?;
        user.role = role.to_uppercase();
        user.touch();

        let updated = self.save(&user, id).await?;
        log::info!("역할 변경: {} → {}", updated.username, updated.role);

        Ok(updated)
    }

    async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(bad_credentials)?;

        if !self.password_hasher.verify(password, &user.password_hash)? {
            return Err(bad_credentials());
        }

        Ok(user)
    }
}
