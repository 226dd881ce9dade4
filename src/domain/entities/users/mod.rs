//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, DEFAULT_ROLE};
//!
//! let user = User::new(
//!     "alice".to_string(),
//!     hashed_password,
//!     "Alice".to_string(),
//!     "Liddell".to_string(),
//!     DEFAULT_ROLE.to_string(),
//! );
//! ```

pub mod user;

pub use user::{User, DEFAULT_ROLE};
