// Grid state - 타일 그리드 상태
//
// 현재 방향의 타일 배치와 포커스를 관리하고,
// 키보드 이동/크기 조절을 충돌 방지 규칙으로 적용합니다.
// 압축(compaction) 없이 빈 칸은 그대로 유지합니다.

use crate::models::tile::{generate_layout, Orientation, TilePlacement};
use thiserror::Error;

/// 이동/크기 조절 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 그리드 변경이 거부된 이유
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridBlock {
    #[error("no tile is focused")]
    NoFocus,

    #[error("out of grid bounds")]
    OutOfBounds,

    #[error("collides with {0}")]
    Collision(String),

    #[error("minimum size reached")]
    MinSize,
}

/// 그리드 상태
#[derive(Debug, Clone)]
pub struct GridState {
    /// 현재 방향
    orientation: Orientation,
    /// 타일 배치 (생성 순서 유지)
    placements: Vec<TilePlacement>,
    /// 포커스된 타일 인덱스
    focused: usize,
}

impl GridState {
    /// 방향에 맞는 초기 배치로 생성
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            placements: generate_layout(orientation),
            focused: 0,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    pub fn cols(&self) -> u16 {
        self.orientation.cols()
    }

    pub fn rows(&self) -> u16 {
        self.orientation.rows()
    }

    /// 포커스된 타일 인덱스
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// 포커스된 타일 반환
    pub fn focused(&self) -> Option<&TilePlacement> {
        self.placements.get(self.focused)
    }

    /// 방향 변경 (다를 때만 재생성)
    ///
    /// 재생성되면 사용자가 옮긴 배치는 버려집니다.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if self.orientation == orientation {
            return false;
        }
        self.orientation = orientation;
        self.reset();
        true
    }

    /// 현재 방향의 초기 배치로 되돌림
    pub fn reset(&mut self) {
        self.placements = generate_layout(self.orientation);
        if self.focused >= self.placements.len() {
            self.focused = 0;
        }
    }

    /// 다음 타일로 포커스 이동 (순환)
    pub fn focus_next(&mut self) {
        if self.placements.is_empty() {
            return;
        }
        self.focused = (self.focused + 1) % self.placements.len();
    }

    /// 이전 타일로 포커스 이동 (순환)
    pub fn focus_prev(&mut self) {
        if self.placements.is_empty() {
            return;
        }
        self.focused = if self.focused == 0 {
            self.placements.len() - 1
        } else {
            self.focused - 1
        };
    }

    /// 포커스된 타일을 한 칸 이동
    pub fn move_focused(&mut self, direction: Direction) -> Result<(), GridBlock> {
        let current = self.focused().ok_or(GridBlock::NoFocus)?;
        let mut candidate = current.clone();

        match direction {
            Direction::Up => candidate.y = current.y.checked_sub(1).ok_or(GridBlock::OutOfBounds)?,
            Direction::Down => candidate.y = current.y + 1,
            Direction::Left => candidate.x = current.x.checked_sub(1).ok_or(GridBlock::OutOfBounds)?,
            Direction::Right => candidate.x = current.x + 1,
        }

        self.apply(candidate)
    }

    /// 포커스된 타일 크기 조절
    ///
    /// Right/Down은 너비/높이 증가, Left/Up은 감소입니다.
    pub fn resize_focused(&mut self, direction: Direction) -> Result<(), GridBlock> {
        let current = self.focused().ok_or(GridBlock::NoFocus)?;
        let mut candidate = current.clone();

        match direction {
            Direction::Right => candidate.w += 1,
            Direction::Down => candidate.h += 1,
            Direction::Left => {
                if current.w <= current.min_w {
                    return Err(GridBlock::MinSize);
                }
                candidate.w -= 1;
            }
            Direction::Up => {
                if current.h <= current.min_h {
                    return Err(GridBlock::MinSize);
                }
                candidate.h -= 1;
            }
        }

        self.apply(candidate)
    }

    /// 후보 배치를 검증한 뒤 포커스된 타일에 반영
    fn apply(&mut self, candidate: TilePlacement) -> Result<(), GridBlock> {
        if !candidate.fits_within(self.cols(), self.rows()) {
            return Err(GridBlock::OutOfBounds);
        }

        if let Some(other) = self
            .placements
            .iter()
            .enumerate()
            .find(|(i, other)| *i != self.focused && candidate.overlaps(other))
            .map(|(_, other)| other)
        {
            return Err(GridBlock::Collision(other.id.clone()));
        }

        self.placements[self.focused] = candidate;
        Ok(())
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}
