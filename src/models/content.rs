// Tile content model - 타일 콘텐츠 매핑
//
// 타일 ID("tile-0".."tile-7")를 고정된 콘텐츠 종류/제목에 매핑합니다.
// 테이블에 없는 ID는 에러가 아닌 Empty로 처리합니다.

/// 타일 콘텐츠 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Metrics,
    UserList,
    Chart,
    Form,
    Activity,
    Status,
    Calendar,
    Tasks,
}

/// 타일 콘텐츠 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileContentConfig {
    pub kind: TileKind,
    pub title: &'static str,
}

/// 타일 콘텐츠 조회 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileContent {
    /// 매핑된 콘텐츠
    Configured(TileContentConfig),
    /// 매핑 없음 (플레이스홀더 표시)
    Empty,
}

impl TileContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, TileContent::Empty)
    }

    pub fn config(&self) -> Option<&TileContentConfig> {
        match self {
            TileContent::Configured(config) => Some(config),
            TileContent::Empty => None,
        }
    }
}

const fn entry(
    id: &'static str,
    kind: TileKind,
    title: &'static str,
) -> (&'static str, TileContentConfig) {
    (id, TileContentConfig { kind, title })
}

/// 타일별 콘텐츠 테이블
static TILE_CONFIGS: [(&str, TileContentConfig); 8] = [
    entry("tile-0", TileKind::Metrics, "Key Metrics"),
    entry("tile-1", TileKind::Chart, "Monthly Performance"),
    entry("tile-2", TileKind::UserList, "Active Users"),
    entry("tile-3", TileKind::Form, "Quick Input"),
    entry("tile-4", TileKind::Activity, "Recent Activity"),
    entry("tile-5", TileKind::Status, "System Status"),
    entry("tile-6", TileKind::Calendar, "Upcoming Events"),
    entry("tile-7", TileKind::Tasks, "Todo List"),
];

/// 타일 ID로 콘텐츠 조회
pub fn resolve_tile(tile_id: &str) -> TileContent {
    TILE_CONFIGS
        .iter()
        .find(|(id, _)| *id == tile_id)
        .map(|(_, config)| TileContent::Configured(*config))
        .unwrap_or(TileContent::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tile::{generate_layout, Orientation};

    #[test]
    fn test_resolve_known_tile() {
        assert_eq!(
            resolve_tile("tile-3"),
            TileContent::Configured(TileContentConfig {
                kind: TileKind::Form,
                title: "Quick Input",
            })
        );
        assert_eq!(
            resolve_tile("tile-0").config().map(|c| c.kind),
            Some(TileKind::Metrics)
        );
        assert_eq!(
            resolve_tile("tile-7").config().map(|c| c.title),
            Some("Todo List")
        );
    }

    #[test]
    fn test_resolve_unknown_tile_is_empty() {
        assert!(resolve_tile("tile-9").is_empty());
        assert!(resolve_tile("").is_empty());
        assert!(resolve_tile("TILE-0").is_empty());
        assert!(resolve_tile("tile-0 ").is_empty());
    }

    #[test]
    fn test_every_generated_tile_resolves() {
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            for tile in generate_layout(orientation) {
                assert!(
                    !resolve_tile(&tile.id).is_empty(),
                    "{} should resolve",
                    tile.id
                );
            }
        }
    }

    #[test]
    fn test_table_kinds_are_distinct() {
        let kinds: std::collections::HashSet<TileKind> =
            TILE_CONFIGS.iter().map(|(_, c)| c.kind).collect();
        assert_eq!(kinds.len(), TILE_CONFIGS.len());
    }
}
