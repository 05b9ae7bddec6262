// Tile placement model - 타일 배치 모델
//
// 화면 방향(가로/세로)에 따라 초기 타일 배치를 생성합니다.
// - Landscape: 8 cols × 4 rows
// - Portrait: 4 cols × 8 rows
// 타일 크기는 2×2 고정, 최소 크기 1×1

/// 타일 한 칸의 기본 너비/높이 (그리드 셀 단위)
pub const TILE_SIZE: u16 = 2;
/// 타일 최소 크기
pub const TILE_MIN_SIZE: u16 = 1;
/// 타일 ID 접두사
pub const TILE_ID_PREFIX: &str = "tile-";

/// 화면 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 가로가 긴 화면
    #[default]
    Landscape,
    /// 세로가 긴 화면
    Portrait,
}

impl Orientation {
    /// 가로 여부 플래그에서 방향 생성
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// 그리드 열 개수
    pub fn cols(self) -> u16 {
        match self {
            Orientation::Landscape => 8,
            Orientation::Portrait => 4,
        }
    }

    /// 그리드 행 개수
    pub fn rows(self) -> u16 {
        match self {
            Orientation::Landscape => 4,
            Orientation::Portrait => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }
}

/// 타일 배치 정보 (그리드 셀 단위)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub id: String,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    pub min_w: u16,
    pub min_h: u16,
}

impl TilePlacement {
    /// 오른쪽 끝 (exclusive)
    pub fn right(&self) -> u16 {
        self.x + self.w
    }

    /// 아래쪽 끝 (exclusive)
    pub fn bottom(&self) -> u16 {
        self.y + self.h
    }

    /// 다른 타일과 겹치는지 확인
    pub fn overlaps(&self, other: &TilePlacement) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// cols × rows 그리드 안에 있는지 확인
    pub fn fits_within(&self, cols: u16, rows: u16) -> bool {
        self.right() <= cols && self.bottom() <= rows
    }
}

/// 인덱스에 해당하는 타일 ID 생성 ("tile-0", "tile-1", ...)
pub fn tile_id(index: usize) -> String {
    format!("{}{}", TILE_ID_PREFIX, index)
}

/// 방향에 따른 초기 타일 배치 생성
///
/// 왼쪽→오른쪽, 위→아래 순서로 2칸씩 이동하며 채웁니다.
/// 같은 입력에 항상 같은 결과를 반환합니다.
pub fn generate_layout(orientation: Orientation) -> Vec<TilePlacement> {
    let tiles_per_row = orientation.cols() / TILE_SIZE;
    let tiles_per_col = orientation.rows() / TILE_SIZE;

    let mut items = Vec::with_capacity(usize::from(tiles_per_row * tiles_per_col));
    for row in 0..tiles_per_col {
        for col in 0..tiles_per_row {
            items.push(TilePlacement {
                id: tile_id(items.len()),
                x: col * TILE_SIZE,
                y: row * TILE_SIZE,
                w: TILE_SIZE,
                h: TILE_SIZE,
                min_w: TILE_MIN_SIZE,
                min_h: TILE_MIN_SIZE,
            });
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn positions(layout: &[TilePlacement]) -> Vec<(u16, u16)> {
        layout.iter().map(|t| (t.x, t.y)).collect()
    }

    #[test]
    fn test_generate_always_eight_tiles() {
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let layout = generate_layout(orientation);
            assert_eq!(layout.len(), 8);

            let ids: HashSet<&str> = layout.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), 8);
            for i in 0..8 {
                assert_eq!(layout[i].id, format!("tile-{}", i));
            }
        }
    }

    #[test]
    fn test_landscape_positions() {
        let layout = generate_layout(Orientation::Landscape);
        assert_eq!(
            positions(&layout),
            vec![
                (0, 0),
                (2, 0),
                (4, 0),
                (6, 0),
                (0, 2),
                (2, 2),
                (4, 2),
                (6, 2)
            ]
        );
    }

    #[test]
    fn test_portrait_positions() {
        let layout = generate_layout(Orientation::Portrait);
        assert_eq!(
            positions(&layout),
            vec![
                (0, 0),
                (2, 0),
                (0, 2),
                (2, 2),
                (0, 4),
                (2, 4),
                (0, 6),
                (2, 6)
            ]
        );
    }

    #[test]
    fn test_tile_size_and_bounds() {
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            for tile in generate_layout(orientation) {
                assert_eq!((tile.w, tile.h), (2, 2));
                assert_eq!((tile.min_w, tile.min_h), (1, 1));
                assert!(tile.w >= tile.min_w && tile.h >= tile.min_h);
                assert!(tile.fits_within(orientation.cols(), orientation.rows()));
            }
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        assert_eq!(
            generate_layout(Orientation::Landscape),
            generate_layout(Orientation::Landscape)
        );
        assert_eq!(
            generate_layout(Orientation::Portrait),
            generate_layout(Orientation::Portrait)
        );
    }

    #[test]
    fn test_generated_tiles_do_not_overlap() {
        let layout = generate_layout(Orientation::Portrait);
        for (i, a) in layout.iter().enumerate() {
            for b in layout.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_orientation_from_flag() {
        assert_eq!(Orientation::from_landscape(true), Orientation::Landscape);
        assert_eq!(Orientation::from_landscape(false), Orientation::Portrait);
        assert_eq!(Orientation::Landscape.cols(), 8);
        assert_eq!(Orientation::Portrait.rows(), 8);
    }
}
