//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 문서 저장소 구현체를 `UserStore` trait 뒤에 두어 서비스가 저장소 종류에
//! 의존하지 않도록 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(database));
//! let exists = store.exists("u1").await?;
//! ```

pub mod users;
