//! 프로필 사진 업로드 폼

use utoipa::ToSchema;

/// `POST /user/uploadPicture/{username}`의 multipart/form-data 본문
///
/// 핸들러는 이 타입으로 역직렬화하지 않고 multipart 스트림에서 `file` 필드를 직접 읽습니다.
/// API 문서의 요청 본문 스키마로만 쓰입니다.
#[derive(ToSchema)]
pub struct PictureUploadForm {
    /// `image/*` 콘텐츠 타입의 파일
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
