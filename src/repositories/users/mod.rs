pub mod user_repo;
pub mod memory_repo;

pub use user_repo::{parse_object_id, MongoUserRepository, UserRepository};
pub use memory_repo::InMemoryUserRepository;
