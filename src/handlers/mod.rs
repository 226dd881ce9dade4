//! # HTTP Handlers
//!
//! 라우트 테이블([`crate::routes`])이 가리키는 핸들러 함수들입니다.
//! 핸들러는 협력 객체를 `web::Data`로 주입받고, 에러는 `AppError`로 전파합니다.
//!
//! - [`users`] - `/user` 리소스
//! - [`auth`] - `/authenticate` 로그인

pub mod users;
pub mod auth;
