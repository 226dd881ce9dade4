//! # Services Module
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 생성자로 협력 객체(trait object)를 주입받고,
//! 조립은 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 담당합니다.
//!
//! - [`users`] - 사용자 저장소 연산 (`UserStore`)
//! - [`auth`] - 비밀번호 해싱, JWT 발급/검증
//! - [`storage`] - 프로필 사진 파일 저장

pub mod users;
pub mod auth;
pub mod storage;
