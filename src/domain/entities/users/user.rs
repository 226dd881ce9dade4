//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티입니다.
//! 비밀번호는 항상 해시 형태로만 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 별도 역할 지정 없이 가입한 사용자의 기본 역할
pub const DEFAULT_ROLE: &str = "USER";

/// 사용자 엔티티
///
/// ID는 저장소가 부여합니다. 저장 전에는 `None`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique)
    pub username: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// 자유 형식 역할 문자열 (예: "ADMIN", "USER")
    pub role: String,
    /// 저장된 프로필 사진 파일 참조
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            password_hash,
            first_name,
            last_name,
            role,
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }

    pub fn has_profile_picture(&self) -> bool {
        self.profile_picture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            "alice".to_string(),
            "$2b$04$hash".to_string(),
            "Alice".to_string(),
            "Liddell".to_string(),
            DEFAULT_ROLE.to_string(),
        )
    }

    #[test]
    fn test_new_user_has_no_id_and_no_picture() {
        let user = sample();

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert!(!user.has_profile_picture());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string_is_hex() {
        let mut user = sample();
        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_unsaved_user_omits_id_in_bson() {
        let doc = mongodb::bson::to_document(&sample()).unwrap();

        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("profile_picture"));
        assert_eq!(doc.get_str("username").unwrap(), "alice");
    }
}
