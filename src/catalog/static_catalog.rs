//! 코드에 내장된 정적 영화 카탈로그
//!
//! 프로세스 시작 후 처음 접근할 때 한 번 만들어지고 이후 변경되지 않습니다.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::MovieCatalog;
use crate::domain::entities::movies::CatalogEntry;
use crate::domain::models::ratings::MovieId;

static MOVIES: Lazy<HashMap<MovieId, CatalogEntry>> = Lazy::new(|| {
    HashMap::from([
        (MovieId(1), CatalogEntry { title: "Avengers: Endgame", genre: "Acción" }),
        (MovieId(2), CatalogEntry { title: "Scary Movie", genre: "Comedia" }),
        (MovieId(3), CatalogEntry { title: "Inception", genre: "Ciencia Ficción" }),
        (MovieId(4), CatalogEntry { title: "The Dark Knight", genre: "Acción" }),
        (MovieId(5), CatalogEntry { title: "Forrest Gump", genre: "Drama" }),
        (MovieId(6), CatalogEntry { title: "The Matrix", genre: "Ciencia Ficción" }),
        (MovieId(7), CatalogEntry { title: "Titanic", genre: "Romance" }),
    ])
});

/// 내장 카탈로그 (7편)
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl MovieCatalog for StaticCatalog {
    fn find(&self, movie_id: MovieId) -> Option<&CatalogEntry> {
        MOVIES.get(&movie_id)
    }

    fn len(&self) -> usize {
        MOVIES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_movies() {
        let catalog = StaticCatalog::new();

        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());
        assert!((1..=7).all(|id| catalog.find(MovieId(id)).is_some()));
    }

    #[test]
    fn test_lookup_returns_title_and_genre() {
        let catalog = StaticCatalog::new();

        assert_eq!(
            catalog.find(MovieId(3)),
            Some(&CatalogEntry { title: "Inception", genre: "Ciencia Ficción" })
        );
        assert_eq!(catalog.find(MovieId(7)).map(|e| e.genre), Some("Romance"));
    }

    #[test]
    fn test_unknown_ids_are_absent() {
        let catalog = StaticCatalog::new();

        for id in [0, 8, 99, -1] {
            assert!(catalog.find(MovieId(id)).is_none());
        }
    }
}
