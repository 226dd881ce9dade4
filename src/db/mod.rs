//! MongoDB 연결 관리
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="trainings"
//! ```

use mongodb::{Client, Collection, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 클라이언트와 데이터베이스 이름
///
/// `Client`는 내부적으로 커넥션 풀을 가지므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 연결 후 `ping` 명령으로 서버 응답을 확인합니다.
    pub async fn new(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("training_user_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub async fn from_config() -> Result<Self, mongodb::error::Error> {
        Self::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection(name)
    }
}
