//! JWT 액세스 토큰 발급 및 검증
//!
//! HS256 대칭키 서명을 사용합니다. 키와 만료 시간은 [`JwtConfig`]에서 읽습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{entities::users::user::User, models::token::TokenClaims},
};

/// Bearer 토큰 검증 협력 객체
///
/// `UserService`는 이 trait만 알고 있으므로, 테스트에서는 가짜 구현으로 교체할 수 있습니다.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> AppResult<TokenClaims>;
}

pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 액세스 토큰 유효 시간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * 3600
    }

    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            username: user.username.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &TokenClaims) -> AppResult<String> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), claims, &encoding_key).context("JWT 토큰 생성 실패")
    }
}

impl TokenValidator for TokenService {
    fn validate(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }
}
