//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 타입을 모아 둔 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (User)
//! ├── dto       - HTTP 요청/응답 본문 (SignUpRequest, UpdateUserRequest, UserResponse ...)
//! └── models    - 계층 사이를 오가는 값 객체 (AuthContext, NewUser, PictureUpload, TokenClaims)
//!      │
//!      ▼
//! Services (UserStore, TokenValidator, PasswordHasher, PictureStorage)
//!      │
//!      ▼
//! Repositories (MongoDB / In-memory)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{User, DEFAULT_ROLE};
pub use dto::users::{LoginRequest, LoginResponse, SignUpRequest, UpdateUserRequest, UserResponse};
pub use models::{AuthContext, NewUser, PictureUpload, TokenClaims};
