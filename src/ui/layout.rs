// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃:
// - 40x15 이상: 대시보드 (헤더 | 타일 그리드 | 상태바 | 커맨드바)
// - 그 미만: 경고 메시지 표시
//
// 화면 방향은 셀 종횡비를 감안해 `width > height * CELL_ASPECT`이면 가로입니다.

use crate::models::{Orientation, TilePlacement};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 15;
/// 터미널 셀의 세로/가로 비율 (대략 1:2)
pub const CELL_ASPECT: u16 = 2;

/// 그리드 안쪽 여백 (좌우, 상하)
pub const CONTAINER_PADDING: (u16, u16) = (1, 0);
/// 타일 사이 간격 (좌우, 상하)
pub const TILE_MARGIN: (u16, u16) = (1, 0);

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 대시보드 표시
    Dashboard,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 헤더 (테마 전환 버튼)
    pub header: Rect,
    /// 타일 그리드 영역
    pub grid: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 그리드 셀 크기 계산 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// 그리드 영역
    pub area: Rect,
    pub cols: u16,
    pub rows: u16,
    /// 한 칸 너비
    pub col_width: u16,
    /// 한 칸 높이
    pub row_height: u16,
}

impl GridGeometry {
    /// 가용 영역과 방향으로 셀 크기 계산
    ///
    /// 칸 크기 = (가용 길이 - 여백 합) / 칸 수, 최소 1
    pub fn new(area: Rect, orientation: Orientation) -> Self {
        let cols = orientation.cols();
        let rows = orientation.rows();

        let used_x = CONTAINER_PADDING.0 * 2 + TILE_MARGIN.0 * (cols - 1);
        let used_y = CONTAINER_PADDING.1 * 2 + TILE_MARGIN.1 * (rows - 1);

        Self {
            area,
            cols,
            rows,
            col_width: (area.width.saturating_sub(used_x) / cols).max(1),
            row_height: (area.height.saturating_sub(used_y) / rows).max(1),
        }
    }

    /// 타일 배치를 화면 영역으로 변환 (그리드 영역으로 잘라냄)
    pub fn tile_rect(&self, placement: &TilePlacement) -> Rect {
        let x = self.area.x + CONTAINER_PADDING.0 + placement.x * (self.col_width + TILE_MARGIN.0);
        let y = self.area.y + CONTAINER_PADDING.1 + placement.y * (self.row_height + TILE_MARGIN.1);
        let width = placement.w * self.col_width + placement.w.saturating_sub(1) * TILE_MARGIN.0;
        let height =
            placement.h * self.row_height + placement.h.saturating_sub(1) * TILE_MARGIN.1;

        Rect {
            x,
            y,
            width,
            height,
        }
        .intersection(self.area)
    }
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// 현재 레이아웃 모드
    pub mode: LayoutMode,
    /// 현재 화면 방향
    pub orientation: Orientation,
    /// 터미널 크기
    pub terminal_size: (u16, u16),
    /// 계산된 레이아웃 영역
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Dashboard,
            orientation: Orientation::default(),
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Dashboard
        }
    }

    /// 터미널 크기로 화면 방향 결정
    pub fn determine_orientation(width: u16, height: u16) -> Orientation {
        let scaled_height = u32::from(height) * u32::from(CELL_ASPECT);
        Orientation::from_landscape(u32::from(width) > scaled_height)
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    ///
    /// 화면 방향이 바뀌었으면 true를 반환합니다.
    pub fn update(&mut self, area: Rect) -> bool {
        let width = area.width;
        let height = area.height;

        let orientation = Self::determine_orientation(width, height);
        let changed = orientation != self.state.orientation;

        self.state.terminal_size = (width, height);
        self.state.mode = Self::determine_mode(width, height);
        self.state.orientation = orientation;
        self.state.areas = self.calculate_areas(area);
        changed
    }

    /// 레이아웃 영역 계산
    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        match self.state.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Dashboard => {
                // 메인 수직 레이아웃: 헤더 | 그리드 | 상태바 | 커맨드바
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1), // 헤더
                        Constraint::Min(3),    // 그리드
                        Constraint::Length(1), // 상태바
                        Constraint::Length(1), // 커맨드바
                    ])
                    .split(area);

                LayoutAreas {
                    header: chunks[0],
                    grid: chunks[1],
                    status_bar: chunks[2],
                    command_bar: chunks[3],
                    warning: Rect::default(),
                }
            }
        }
    }

    /// 현재 그리드 셀 크기
    pub fn grid_geometry(&self) -> GridGeometry {
        GridGeometry::new(self.state.areas.grid, self.state.orientation)
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    /// 현재 화면 방향 반환
    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tile::generate_layout;

    fn rect(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Dashboard);
        assert_eq!(LayoutManager::determine_mode(40, 15), LayoutMode::Dashboard);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 14), LayoutMode::TooSmall);
    }

    #[test]
    fn test_determine_orientation() {
        assert_eq!(
            LayoutManager::determine_orientation(120, 40),
            Orientation::Landscape
        );
        // 80x40 셀은 화면상 정사각형에 가까움 → 세로
        assert_eq!(
            LayoutManager::determine_orientation(80, 40),
            Orientation::Portrait
        );
        assert_eq!(
            LayoutManager::determine_orientation(60, 50),
            Orientation::Portrait
        );
    }

    #[test]
    fn test_update_reports_orientation_change() {
        let mut manager = LayoutManager::new();
        assert!(!manager.update(rect(120, 30)));
        assert!(manager.update(rect(60, 50)));
        assert_eq!(manager.orientation(), Orientation::Portrait);
        assert!(!manager.update(rect(62, 50)));
        assert!(manager.update(rect(200, 50)));
    }

    #[test]
    fn test_dashboard_areas() {
        let mut manager = LayoutManager::new();
        manager.update(rect(120, 30));
        let areas = manager.areas();
        assert_eq!(areas.header.height, 1);
        assert_eq!(areas.grid, Rect::new(0, 1, 120, 27));
        assert_eq!(areas.status_bar.y, 28);
        assert_eq!(areas.command_bar.y, 29);
    }

    #[test]
    fn test_too_small_areas() {
        let mut manager = LayoutManager::new();
        manager.update(rect(30, 10));
        assert_eq!(manager.mode(), LayoutMode::TooSmall);
        assert_eq!(manager.areas().warning, rect(30, 10));
        assert_eq!(manager.terminal_size(), (30, 10));
    }

    #[test]
    fn test_grid_geometry_landscape() {
        let geometry = GridGeometry::new(Rect::new(0, 1, 120, 37), Orientation::Landscape);
        // (120 - 2 - 7) / 8 = 13, 37 / 4 = 9
        assert_eq!(geometry.col_width, 13);
        assert_eq!(geometry.row_height, 9);

        let layout = generate_layout(Orientation::Landscape);
        assert_eq!(geometry.tile_rect(&layout[0]), Rect::new(1, 1, 27, 18));
        assert_eq!(geometry.tile_rect(&layout[5]), Rect::new(29, 19, 27, 18));
    }

    #[test]
    fn test_grid_geometry_portrait() {
        let geometry = GridGeometry::new(Rect::new(0, 1, 80, 37), Orientation::Portrait);
        // (80 - 2 - 3) / 4 = 18, 37 / 8 = 4
        assert_eq!(geometry.col_width, 18);
        assert_eq!(geometry.row_height, 4);

        let layout = generate_layout(Orientation::Portrait);
        assert_eq!(geometry.tile_rect(&layout[7]), Rect::new(39, 25, 37, 8));
    }

    #[test]
    fn test_tiles_stay_inside_grid() {
        let area = Rect::new(0, 1, 40, 12);
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let geometry = GridGeometry::new(area, orientation);
            for tile in generate_layout(orientation) {
                let r = geometry.tile_rect(&tile);
                assert_eq!(r.intersection(area), r);
            }
        }
    }
}
