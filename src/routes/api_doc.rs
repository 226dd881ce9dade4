//! OpenAPI 문서
//!
//! 핸들러의 `#[utoipa::path]` 선언을 모아 `GET /api-docs/openapi.json`으로 제공합니다.

use actix_web::HttpResponse;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use crate::{
    core::errors::ErrorBody,
    domain::dto::users::{
        request::{LoginRequest, PictureUploadForm, SignUpRequest, UpdateUserRequest},
        response::{LoginResponse, UserResponse},
    },
    handlers::{self, auth::AUTH_TAG, users::USERS_TAG},
};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Training User Service",
        description = "사용자 가입, 프로필 관리, 프로필 사진, 역할 지정 API"
    ),
    paths(
        handlers::users::sign_up,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::users::get_all,
        handlers::users::get_by_username,
        handlers::users::upload_picture,
        handlers::users::retrieve_picture,
        handlers::users::set_role_to_user,
        handlers::auth::authenticate,
    ),
    components(
        schemas(
            SignUpRequest,
            UpdateUserRequest,
            LoginRequest,
            PictureUploadForm,
            UserResponse,
            LoginResponse,
            ErrorBody,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = USERS_TAG, description = "사용자 리소스"),
        (name = AUTH_TAG, description = "토큰 발급")
    )
)]
pub struct ApiDoc;

/// `bearer_auth` 보안 스킴 (JWT)
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
