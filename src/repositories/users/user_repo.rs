//! # 사용자 리포지토리
//!
//! 사용자 엔티티의 영속성 계층입니다. 서비스 계층은 [`UserRepository`] trait만 알고,
//! 실제 구현은 시작 시점에 선택됩니다.
//!
//! - [`MongoUserRepository`] - MongoDB `users` 컬렉션, 선택적 Redis 조회 캐시
//! - [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository) - 개발/테스트용
//!
//! ## 캐시 키
//!
//! ```text
//! user:id:{hex ObjectId}
//! user:username:{username}
//! ```
//!
//! 쓰기 연산(replace/delete)은 변경 전 문서의 두 키를 모두 지웁니다.
//! 캐시 오류는 로그만 남기고 DB 결과를 그대로 돌려줍니다.
//!
//! ## 오래된 항목
//!
//! 조회가 DB에서 이전 문서를 읽은 직후 다른 요청이 교체와 무효화를 끝내면, 그 조회가
//! 이전 문서를 다시 캐시에 씁니다. 이런 항목은 TTL이 지날 때까지 남으므로 TTL은
//! `MAX_CACHE_TTL_SECONDS`를 넘지 않게 제한합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::User,
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 캐시 항목 TTL 상한 (초)
pub const MAX_CACHE_TTL_SECONDS: u64 = 60;

/// 설정된 TTL을 `1..=MAX_CACHE_TTL_SECONDS`로 제한합니다.
fn bounded_ttl(configured: u64) -> u64 {
    configured.clamp(1, MAX_CACHE_TTL_SECONDS)
}

/// 사용자 영속성 trait
///
/// ID는 저장소가 부여합니다. `create`에 넘기는 사용자의 `id`는 무시됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 ID가 채워진 사용자를 돌려줍니다.
    /// 사용자명이 이미 있으면 `ConflictError`입니다.
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 생성 시각 오름차순, 같은 시각이면 ID 오름차순
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 같은 ID의 문서를 통째로 교체합니다. 대상이 없으면 `None`입니다.
    async fn replace(&self, user: &User) -> AppResult<Option<User>>;

    /// 삭제된 사용자를 돌려줍니다. 대상이 없으면 `None`입니다.
    async fn delete(&self, id: &ObjectId) -> AppResult<Option<User>>;
}

/// 경로 파라미터의 hex 문자열을 `ObjectId`로 변환합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(e: mongodb::error::Error, username: &str) -> AppError {
    if is_duplicate_key(&e) {
        AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", username))
    } else {
        AppError::DatabaseError(e.to_string())
    }
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    collection: Collection<User>,
    redis: Option<Arc<RedisClient>>,
    cache_ttl_seconds: u64,
}

impl MongoUserRepository {
    pub fn new(db: &Database, redis: Option<Arc<RedisClient>>, cache_ttl_seconds: u64) -> Self {
        Self {
            collection: db.collection::<User>(COLLECTION_NAME),
            redis,
            cache_ttl_seconds: bounded_ttl(cache_ttl_seconds),
        }
    }

    fn id_key(id: &ObjectId) -> String {
        format!("user:id:{}", id.to_hex())
    }

    fn username_key(username: &str) -> String {
        format!("user:username:{}", username)
    }

    async fn cached(&self, key: &str) -> Option<User> {
        let redis = self.redis.as_ref()?;

        match redis.get::<User>(key).await {
            Ok(hit) => hit,
            Err(e) => {
                log::warn!("캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn store_in_cache(&self, key: &str, user: &User) {
        if let Some(redis) = &self.redis {
            if let Err(e) = redis.set_with_expiry(key, user, self.cache_ttl_seconds).await {
                log::warn!("캐시 저장 실패 ({}): {}", key, e);
            }
        }
    }

    async fn invalidate(&self, users: &[&User]) {
        let Some(redis) = &self.redis else {
            return;
        };

        let keys: Vec<String> = users
            .iter()
            .flat_map(|user| {
                let mut keys = vec![Self::username_key(&user.username)];
                if let Some(id) = &user.id {
                    keys.push(Self::id_key(id));
                }
                keys
            })
            .collect();

        if let Err(e) = redis.del_multiple(&keys).await {
            log::warn!("캐시 무효화 실패: {}", e);
        }
    }

    /// 사용자명 유니크 인덱스와 정렬용 생성일 인덱스를 만듭니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("created_at_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", user.username)));
        }

        user.id = None;

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, &user.username))?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        log::info!("사용자 생성: {} ({})", user.username, id.to_hex());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let cache_key = Self::id_key(id);

        if let Some(cached) = self.cached(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.store_in_cache(&cache_key, user).await;
        }

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let cache_key = Self::username_key(username);

        if let Some(cached) = self.cached(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.store_in_cache(&cache_key, user).await;
        }

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn replace(&self, user: &User) -> AppResult<Option<User>> {
        let id = user.id
            .ok_or_else(|| AppError::InternalError("ID가 없는 사용자는 교체할 수 없습니다".to_string()))?;

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::Before)
            .build();

        let previous = self.collection
            .find_one_and_replace(doc! { "_id": id }, user)
            .with_options(options)
            .await
            .map_err(|e| map_write_error(e, &user.username))?;

        match previous {
            Some(previous) => {
                self.invalidate(&[&previous, user]).await;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let deleted = self.collection
            .find_one_and_delete(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = deleted {
            self.invalidate(&[user]).await;
            log::info!("사용자 삭제: {} ({})", user.username, id.to_hex());
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let oid = ObjectId::new();

        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::ValidationError(_))));
        assert!(matches!(parse_object_id(""), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_cache_ttl_is_bounded() {
        assert_eq!(bounded_ttl(0), 1);
        assert_eq!(bounded_ttl(30), 30);
        assert_eq!(bounded_ttl(600), MAX_CACHE_TTL_SECONDS);
        assert_eq!(bounded_ttl(u64::MAX), MAX_CACHE_TTL_SECONDS);
    }

    #[test]
    fn test_cache_keys() {
        let oid = ObjectId::parse_str("65f0a1b2c3d4e5f6a7b8c9d0").unwrap();

        assert_eq!(MongoUserRepository::id_key(&oid), "user:id:65f0a1b2c3d4e5f6a7b8c9d0");
        assert_eq!(MongoUserRepository::username_key("alice"), "user:username:alice");
    }
}
