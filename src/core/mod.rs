//! # Core Module
//!
//! - [`errors`] - `AppError`와 HTTP 응답 매핑
//! - [`registry`] - 협력 객체 조립 및 `app_data` 등록

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorBody};
pub use registry::ServiceRegistry;
