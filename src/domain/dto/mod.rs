//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 JSON 본문을 정의합니다.
//! 필드 이름은 기존 클라이언트와의 호환을 위해 camelCase를 사용합니다.
//!
//! - `users::request` - 회원가입, 수정, 로그인 요청 (`validator`로 검증), 사진 업로드 폼
//! - `users::response` - 사용자 및 로그인 응답

pub mod users;

pub use users::*;
