use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// `POST /authenticate` 요청 본문
#[derive(Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(required = true, example = "alice")]
    #[validate(length(min = 1, message = "username은 필수입니다"))]
    pub username: String,

    #[serde(default)]
    #[schema(required = true, format = Password)]
    #[validate(length(min = 1, message = "password는 필수입니다"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
