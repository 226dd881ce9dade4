//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 조회 캐시입니다. 값은 JSON으로 직렬화해 저장합니다.
//! 캐시는 선택 사항이며(`CACHE_ENABLED`), 캐시 오류는 요청을 실패시키지 않습니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new(&CacheConfig::redis_url()).await?;
//! cache.set_with_expiry("user:id:65f...", &user, 60).await?;
//! let cached: Option<User> = cache.get("user:id:65f...").await?;
//! cache.del_multiple(&keys).await?;
//! ```

pub mod redis;
