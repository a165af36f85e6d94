//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 접속 정보는 [`StoreCredentials`]로 전달받습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::StoreCredentials;
//! use crate::db::Database;
//!
//! let (credentials, _source) = StoreCredentials::load()?;
//! let database = Database::connect(&credentials).await?;
//! let users = database.collection_name();
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

use crate::config::StoreCredentials;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스/컬렉션 이름을 보관하며,
/// 리포지토리 계층에 데이터베이스 핸들을 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 커넥션 풀 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
    /// 사용자 레코드 컬렉션 이름
    collection_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화하고 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(credentials: &StoreCredentials) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&credentials.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("movie_ratings".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&credentials.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", credentials.database);

        Ok(Self {
            client,
            database_name: credentials.database.clone(),
            collection_name: credentials.collection.clone(),
        })
    }

    /// 컬렉션 접근에 사용할 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 사용자 레코드 컬렉션 이름
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }
}
