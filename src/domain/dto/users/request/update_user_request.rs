//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use super::validate_not_blank;

/// `POST /user/update/{id}` 요청 본문
///
/// 부분 수정입니다. 생략한 필드는 그대로 유지되고, 값이 있는 필드만 교체됩니다.
/// 값이 있지만 공백뿐인 필드는 검증 오류입니다.
/// `password`는 평문으로 받으며 저장 전에 해시됩니다.
#[derive(Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "username은 비어 있을 수 없습니다"))]
    pub username: Option<String>,

    #[serde(default)]
    #[schema(format = Password)]
    #[validate(custom(function = "validate_not_blank", message = "password는 비어 있을 수 없습니다"))]
    pub password: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "firstName은 비어 있을 수 없습니다"))]
    pub first_name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "lastName은 비어 있을 수 없습니다"))]
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    /// 변경할 필드가 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_body_is_valid() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"firstName":"Alicia"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.first_name.as_deref(), Some("Alicia"));
        assert!(request.username.is_none());
        assert!(!request.is_empty());
    }

    #[test]
    fn test_blank_present_field_is_rejected() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"lastName":"  "}"#).unwrap();
        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_empty_body_is_empty() {
        let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();

        assert!(request.is_empty());
        assert!(request.validate().is_ok());
    }
}
