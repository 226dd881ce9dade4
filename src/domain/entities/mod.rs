//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User)
//! ├── models/       ← 요청 단위 값 객체 (AuthContext, NewUser, PictureUpload, TokenClaims)
//! └── dto/          ← HTTP 요청/응답 본문
//! ```
//!
//! 엔티티는 저장 형식(snake_case, `_id`)을 그대로 따르며,
//! 클라이언트에 노출되는 형식은 `dto::users::response`에서 따로 정의합니다.

pub mod users;

pub use users::*;
