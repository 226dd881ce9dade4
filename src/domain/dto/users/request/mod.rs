//! 사용자 요청 DTO
//!
//! 모든 요청 DTO는 `validator::Validate`를 구현합니다.
//! 공백만 있는 문자열은 누락된 값과 동일하게 취급합니다.

use validator::ValidationError;

pub mod sign_up_request;
pub mod update_user_request;
pub mod auth_request;
pub mod picture_upload_form;

pub use sign_up_request::SignUpRequest;
pub use update_user_request::UpdateUserRequest;
pub use auth_request::LoginRequest;
pub use picture_upload_form::PictureUploadForm;

/// 비어 있거나 공백뿐인 문자열을 거부합니다.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("값이 비어 있습니다".into()));
    }
    Ok(())
}
