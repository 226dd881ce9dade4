//! 요청 단위 인증 컨텍스트
//!
//! `Authorization` 헤더 원문을 요청마다 따로 담아 저장소 호출에 함께 넘깁니다.
//! 요청 간에 공유되는 토큰 상태는 없습니다.
//!
//! ```rust,ignore
//! async fn get_all(store: web::Data<dyn UserStore>, ctx: AuthContext) -> AppResult<HttpResponse> {
//!     let users = store.get_all_users(&ctx).await?;
//!     Ok(HttpResponse::Ok().json(users))
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{http::header, Error, FromRequest, HttpRequest};
use crate::core::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// 한 요청의 `Authorization` 헤더 값
///
/// 헤더가 없으면 `authorization`은 `None`입니다. 추출 자체는 실패하지 않으며,
/// 거부 여부는 저장소가 결정합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    authorization: Option<String>,
}

impl AuthContext {
    pub fn new(authorization: impl Into<String>) -> Self {
        Self { authorization: Some(authorization.into()) }
    }

    /// 헤더가 없는 요청
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 헤더 원문
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// `Bearer <token>`에서 토큰 부분을 꺼냅니다.
    ///
    /// 헤더가 없거나 Bearer 형식이 아니면 `AuthenticationError`입니다.
    pub fn bearer_token(&self) -> AppResult<&str> {
        let value = self.authorization
            .as_deref()
            .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

        let token = value
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .ok_or_else(|| AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string()))?;

        if token.is_empty() {
            return Err(AppError::AuthenticationError("토큰이 비어 있습니다".to_string()));
        }

        Ok(token)
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        ready(Ok(AuthContext { authorization }))
    }
}
