//! 회원가입 요청 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use crate::domain::models::users::NewUser;
use super::validate_not_blank;

/// `POST /user/sign-up` 요청 본문
///
/// username, password, firstName, lastName은 필수입니다. ID와 역할은 본문에 있어도
/// 무시됩니다. 새 사용자는 항상 기본 역할로 가입하고, 역할 변경은 `setRoleToUser`로만 합니다.
///
/// ```json
/// {
///   "username": "alice",
///   "password": "pw1",
///   "firstName": "Alice",
///   "lastName": "Liddell"
/// }
/// ```
#[derive(Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    #[schema(required = true, example = "alice")]
    #[validate(custom(function = "validate_not_blank", message = "username은 필수입니다"))]
    pub username: String,

    /// 평문 비밀번호. 라우팅 계층에서 해시된 뒤에만 저장소로 전달됩니다.
    #[serde(default)]
    #[schema(required = true, example = "pw1", format = Password)]
    #[validate(custom(function = "validate_not_blank", message = "password는 필수입니다"))]
    pub password: String,

    #[serde(default)]
    #[schema(required = true, example = "Alice")]
    #[validate(custom(function = "validate_not_blank", message = "firstName은 필수입니다"))]
    pub first_name: String,

    #[serde(default)]
    #[schema(required = true, example = "Liddell")]
    #[validate(custom(function = "validate_not_blank", message = "lastName은 필수입니다"))]
    pub last_name: String,
}

impl SignUpRequest {
    /// 평문 비밀번호를 버리고 해시된 비밀번호를 담은 `NewUser`로 변환합니다.
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser {
            username: self.username.trim().to_string(),
            password_hash,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        }
    }
}

// 평문 비밀번호가 로그에 찍히지 않도록 Debug를 직접 구현합니다.
impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
