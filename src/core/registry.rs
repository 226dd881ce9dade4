//! # Service Registry
//!
//! 애플리케이션 시작 시 협력 객체를 한 번 조립하고, actix-web `app_data`로 등록합니다.
//! 전역 싱글톤이나 런타임 타입 조회 없이 생성자 주입만 사용합니다.
//!
//! ## 조립 순서
//!
//! ```text
//! 1. PasswordHasher   (bcrypt, BCRYPT_COST)
//! 2. TokenService     (JWT_SECRET, JWT_EXPIRATION_HOURS)
//! 3. UserRepository   (STORAGE_BACKEND=mongo → MongoDB + 선택적 Redis / memory)
//! 4. PictureStorage   (PICTURE_DIR)
//! 5. UserService      ← 1~4 주입
//! ```
//!
//! ## 핸들러에서의 사용
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::from_config().await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| registry.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 핸들러는 `web::Data<dyn UserStore>`, `web::Data<dyn PasswordHasher>`,
//! `web::Data<TokenService>`로 협력 객체를 꺼냅니다.

use std::sync::Arc;
use actix_web::web;
use log::{info, warn};
use crate::{
    caching::redis::RedisClient,
    config::{CacheConfig, StorageBackend, StorageConfig},
    core::errors::json_error_handler,
    db::Database,
    repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository},
    services::{
        auth::{BcryptPasswordHasher, PasswordHasher, TokenService},
        storage::LocalPictureStorage,
        users::{UserService, UserStore},
    },
};

/// 라우팅 계층에 주입되는 협력 객체 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    user_store: Arc<dyn UserStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<TokenService>,
}

impl ServiceRegistry {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// 환경 변수 설정으로 모든 협력 객체를 조립합니다.
    ///
    /// MongoDB 연결이나 인덱스 생성에 실패하면 에러를 돌려줍니다.
    /// Redis 연결 실패는 경고만 남기고 캐시 없이 진행합니다.
    pub async fn from_config() -> Result<Self, Box<dyn std::error::Error>> {
        let password_hasher = Arc::new(BcryptPasswordHasher::from_config());
        info!("🔐 bcrypt cost: {}", password_hasher.cost());

        let token_service = Arc::new(TokenService::from_config());

        let user_repo = Self::build_repository().await?;

        let picture_storage = Arc::new(LocalPictureStorage::from_config());
        info!("🖼️ 프로필 사진 저장 위치: {}", picture_storage.root().display());

        let user_store = Arc::new(UserService::new(
            user_repo,
            picture_storage,
            token_service.clone(),
            password_hasher.clone(),
            StorageConfig::max_picture_bytes(),
        ));

        info!("✅ 서비스 조립 완료");
        Ok(Self::new(user_store, password_hasher, token_service))
    }

    async fn build_repository() -> Result<Arc<dyn UserRepository>, Box<dyn std::error::Error>> {
        match StorageConfig::backend() {
            StorageBackend::Memory => {
                warn!("⚠️ 메모리 저장소 사용 중: 재시작하면 데이터가 사라집니다");
                Ok(Arc::new(InMemoryUserRepository::new()))
            }
            StorageBackend::Mongo => {
                info!("📡 데이터베이스 연결 중...");
                let database = Database::from_config().await?;
                let redis = Self::build_cache().await;

                let repo = MongoUserRepository::new(&database, redis, CacheConfig::ttl_seconds());
                repo.create_indexes().await?;

                Ok(Arc::new(repo))
            }
        }
    }

    async fn build_cache() -> Option<Arc<RedisClient>> {
        if !CacheConfig::enabled() {
            info!("Redis 캐시 비활성화");
            return None;
        }

        match RedisClient::new(&CacheConfig::redis_url()).await {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                warn!("Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
                None
            }
        }
    }

    /// 협력 객체와 JSON 에러 핸들러를 `app_data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.user_store.clone()))
            .app_data(web::Data::from(self.password_hasher.clone()))
            .app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));
    }
}
