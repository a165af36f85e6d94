//! # Movie Catalog Module
//!
//! 영화 ID로 제목/장르를 찾는 조회 인터페이스를 제공합니다.
//! 서비스는 [`MovieCatalog`] trait에만 의존하므로, 이후 저장소 기반 카탈로그로
//! 교체하더라도 핸들러와 서비스 코드는 바뀌지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::catalog::{MovieCatalog, StaticCatalog};
//! use crate::domain::models::ratings::MovieId;
//!
//! let catalog = StaticCatalog::new();
//! let entry = catalog.find(MovieId(1)).unwrap();
//! assert_eq!(entry.title, "Avengers: Endgame");
//! ```

pub mod static_catalog;

pub use static_catalog::StaticCatalog;

use crate::domain::entities::movies::CatalogEntry;
use crate::domain::models::ratings::MovieId;

/// 영화 카탈로그 조회 인터페이스
pub trait MovieCatalog: Send + Sync {
    /// 영화 ID에 해당하는 항목을 반환합니다. 없으면 `None`.
    fn find(&self, movie_id: MovieId) -> Option<&CatalogEntry>;

    /// 카탈로그에 등록된 영화 수
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
