//! 비밀번호 해싱
//!
//! 평문 비밀번호는 이 모듈을 지나면서 bcrypt 해시로 바뀌고, 이후 계층에는 해시만 전달됩니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 해시/검증 협력 객체
///
/// 라우팅 계층과 `UserService`가 생성자 주입으로 공유합니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문을 해시합니다. 같은 평문이라도 솔트 때문에 매번 다른 결과가 나옵니다.
    fn hash(&self, plain: &str) -> AppResult<String>;

    /// 평문이 해시와 일치하는지 확인합니다.
    fn verify(&self, plain: &str, hash: &str) -> AppResult<bool>;
}

/// bcrypt 기반 구현
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost(`BCRYPT_COST`, `PROFILE`)를 사용합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let hashed = bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?} (cost {})", start.elapsed(), self.cost);
        Ok(hashed)
    }

    fn verify(&self, plain: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(plain, hash).context("비밀번호 검증 실패")
    }
}
