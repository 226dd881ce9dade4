//! JWT 액세스 토큰 클레임

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload)
///
/// - `sub`: 사용자 ID (hex ObjectId)
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}
