//! 리포지토리 계층
//!
//! 사용자 엔티티의 저장/조회를 담당합니다. 비즈니스 규칙(인증, 검증, 해싱)은
//! 서비스 계층에 있고, 이 계층은 저장소 고유의 제약(사용자명 유니크)만 지킵니다.

pub mod users;
