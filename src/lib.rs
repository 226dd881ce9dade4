//! 트레이닝 플랫폼 사용자 서비스
//!
//! `/user` 리소스(회원가입, 수정, 삭제, 조회, 프로필 사진, 역할 지정)와
//! JWT 로그인을 제공하는 actix-web 서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Route Table   │ ← (메서드, 경로) → 핸들러
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 값 추출, 비밀번호 해싱 / AuthContext 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserStore     │ ← 토큰 검증, 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │  Repositories   │     │ PictureStorage  │
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │
//! └─────────────────┘
//! ```
//!
//! 협력 객체는 [`core::registry::ServiceRegistry`]가 생성자 주입으로 조립합니다.

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
