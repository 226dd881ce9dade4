use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// `password`에는 저장된 해시가 그대로 실립니다. 평문은 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "65f0a1b2c3d4e5f6a7b8c9d0")]
    pub id: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub profile_picture: Option<String>,
    /// RFC 3339 문자열
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            password_hash,
            first_name,
            last_name,
            role,
            profile_picture,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            password: password_hash,
            first_name,
            last_name,
            role,
            profile_picture,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 로그인 응답 DTO (JWT 액세스 토큰)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::users::DEFAULT_ROLE;

    #[test]
    fn test_from_user_uses_camel_case_and_hex_id() {
        let mut user = User::new(
            "alice".to_string(),
            "$2b$04$hash".to_string(),
            "Alice".to_string(),
            "Liddell".to_string(),
            DEFAULT_ROLE.to_string(),
        );
        let oid = ObjectId::new();
        user.id = Some(oid);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], oid.to_hex());
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["lastName"], "Liddell");
        assert_eq!(json["password"], "$2b$04$hash");
        assert_eq!(json["role"], "USER");
        assert!(json["profilePicture"].is_null());
        assert!(json["createdAt"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse::bearer("t".to_string(), 3600)).unwrap();

        assert_eq!(json["accessToken"], "t");
        assert_eq!(json["tokenType"], "Bearer");
        assert_eq!(json["expiresIn"], 3600);
    }
}
