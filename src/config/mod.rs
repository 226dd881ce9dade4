//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 설정 구조체는 상태를 갖지 않고, 호출 시점에 환경 변수를 읽어 기본값과 함께 돌려줍니다.
//!
//! - [`data_config`] - 서버, CORS, 저장소, MongoDB/Redis, bcrypt, Rate Limiting
//! - [`auth_config`] - JWT
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="http://localhost:4200,https://trainings.example.com"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"          # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="trainings"
//! export REDIS_URL="redis://localhost:6379"
//! export PICTURE_DIR="./uploads/pictures"
//!
//! # 보안
//! export JWT_SECRET="your-super-secret-key"
//! export BCRYPT_COST="12"
//! ```
//!
//! `.env` 파일 로드는 `main.rs`에서 `PROFILE` 값에 따라 처리합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
