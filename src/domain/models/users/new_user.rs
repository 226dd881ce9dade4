//! 저장 전 사용자

use crate::domain::entities::users::{User, DEFAULT_ROLE};

/// 가입 요청에서 만들어진, 아직 ID가 없는 사용자
///
/// 비밀번호는 이미 해시된 상태입니다. 평문은 이 타입까지 내려오지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    /// 엔티티로 변환합니다. 가입 시 역할은 항상 기본 역할입니다.
    pub fn into_user(self) -> User {
        User::new(
            self.username,
            self.password_hash,
            self.first_name,
            self.last_name,
            DEFAULT_ROLE.to_string(),
        )
    }
}
