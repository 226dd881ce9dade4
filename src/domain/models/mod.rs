//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 값 객체를 정의합니다.
//! 엔티티(`../entities/`)와 달리 고유 식별자나 생명주기를 갖지 않습니다.
//!
//! ```text
//! models/
//! ├── auth/      ← 요청 단위 인증 컨텍스트
//! ├── token/     ← JWT 클레임
//! ├── users/     ← 저장 전 사용자 (해시된 비밀번호 포함)
//! └── picture/   ← 업로드된 프로필 사진
//! ```

pub mod auth;
pub mod token;
pub mod users;
pub mod picture;

pub use auth::AuthContext;
pub use token::TokenClaims;
pub use users::NewUser;
pub use picture::PictureUpload;
