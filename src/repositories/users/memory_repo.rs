//! 메모리 기반 사용자 리포지토리
//!
//! `STORAGE_BACKEND=memory`일 때와 테스트에서 사용합니다. 프로세스가 끝나면 데이터도 사라집니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::User,
};
use super::user_repo::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string())
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", user.username)));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user.clone());

        log::info!("사용자 생성: {} ({})", user.username, id.to_hex());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn replace(&self, user: &User) -> AppResult<Option<User>> {
        let id = user.id
            .ok_or_else(|| AppError::InternalError("ID가 없는 사용자는 교체할 수 없습니다".to_string()))?;

        let mut users = self.users.write().map_err(poisoned)?;

        if !users.contains_key(&id) {
            return Ok(None);
        }

        if users.values().any(|u| u.id != Some(id) && u.username == user.username) {
            return Err(AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", user.username)));
        }

        users.insert(id, user.clone());
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let mut users = self.users.write().map_err(poisoned)?;
        Ok(users.remove(id))
    }
}
