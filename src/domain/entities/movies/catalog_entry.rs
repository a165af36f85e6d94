//! 영화 카탈로그 항목

/// 카탈로그의 영화 한 편 (제목, 장르)
///
/// 프로세스 수명 동안 바뀌지 않는 정적 데이터이므로 `&'static str`을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub genre: &'static str,
}
