//! # Application Error Handling
//!
//! 사용자 리소스 서비스 전역에서 사용하는 에러 타입입니다.
//! 라우팅 계층은 에러를 직접 만들지 않고, 협력 객체(UserStore, TokenValidator,
//! PictureStorage 등)가 만든 `AppError`를 그대로 HTTP 응답으로 전달합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 잘못된 ID 형식, 빈 업로드 |
//! | `AuthenticationError` | 401 Unauthorized | Authorization 헤더 누락, 토큰 만료/위조 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 또는 프로필 사진 |
//! | `ConflictError` | 409 Conflict | 중복 사용자명 |
//! | `DatabaseError` | 500 | MongoDB 오류 |
//! | `StorageError` | 500 | 프로필 사진 파일 저장 실패 |
//! | `InternalError` | 500 | 해싱 실패 등 예상치 못한 오류 |
//!
//! 모든 에러 응답 본문은 `{"error": "<message>"}` 형식입니다.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 모든 에러 응답의 본문
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "사용자를 찾을 수 없습니다: alice")]
    pub error: String,
}

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error`를 구현하고 `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파하면 자동으로 HTTP 응답이 됩니다.
///
/// ```rust,ignore
/// let user = repo.find_by_username(username).await?
///     .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", username)))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 리소스가 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 등 비즈니스 규칙 위반
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (헤더 누락, 토큰 만료, 잘못된 자격 증명)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 프로필 사진 저장소 오류
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 상태 코드와 `{"error": ...}` JSON 본문을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기고 클라이언트에는 메시지만 전달합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", self);
        }

        HttpResponse::build(status).json(ErrorBody { error: self.to_string() })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hashed = bcrypt::hash(plain, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 지연 평가된 컨텍스트 메시지로 에러를 변환합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// JSON 본문 파싱 실패를 `AppError::ValidationError`로 바꿔 주는 핸들러
///
/// `web::JsonConfig::default().error_handler(json_error_handler)`로 등록하면
/// 잘못된 JSON도 다른 에러와 같은 `{"error": ...}` 형식으로 응답됩니다.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
}
