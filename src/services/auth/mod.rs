//! 인증 관련 서비스
//!
//! - [`password_service`] - bcrypt 비밀번호 해싱
//! - [`token_service`] - JWT 액세스 토큰 발급/검증

pub mod password_service;
pub mod token_service;

pub use password_service::{BcryptPasswordHasher, PasswordHasher};
pub use token_service::{TokenService, TokenValidator};
