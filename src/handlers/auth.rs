//! 로그인 핸들러
//!
//! `/user` 아래의 보호된 엔드포인트에 쓸 Bearer 토큰을 발급합니다.

use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult, ErrorBody},
    domain::dto::users::{request::LoginRequest, response::LoginResponse},
    services::{auth::TokenService, users::UserStore},
};

/// API 문서 태그
pub const AUTH_TAG: &str = "auth";

/// 사용자명/비밀번호 로그인 핸들러
///
/// # Endpoint
/// `POST /authenticate`
///
/// ```json
/// { "username": "alice", "password": "pw1" }
/// ```
///
/// 성공하면 `{"accessToken": "...", "tokenType": "Bearer", "expiresIn": 86400}`를 돌려줍니다.
/// 사용자가 없거나 비밀번호가 틀리면 같은 401 응답입니다.
#[utoipa::path(
    post,
    path = "/authenticate",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "발급된 액세스 토큰", body = LoginResponse),
        (status = 400, description = "필수 필드 누락", body = ErrorBody),
        (status = 401, description = "사용자명 또는 비밀번호 불일치", body = ErrorBody)
    )
)]
pub async fn authenticate(
    store: web::Data<dyn UserStore>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = store
        .verify_credentials(&payload.username, &payload.password)
        .await
        .inspect_err(|_| log::info!("로그인 실패 - 사용자: {}", payload.username))?;

    let access_token = token_service.generate_access_token(&user)?;

    log::info!("로그인 성공 - 사용자: {}", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse::bearer(access_token, token_service.expires_in())))
}
