// Status bar component - 상태바 컴포넌트
//
// 화면 방향, 그리드 크기, 포커스된 타일, 현재 테마, 토스트 메시지 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 화면 방향 레이블
    orientation: &'a str,
    /// 그리드 크기 (cols, rows)
    grid_size: (u16, u16),
    /// 포커스된 타일 ID
    focused_tile: Option<&'a str>,
    /// 포커스된 타일 제목 (빈 타일이면 None)
    focused_title: Option<&'a str>,
    /// 현재 테마 이름
    theme_name: &'a str,
    /// 토스트 메시지
    toast: Option<&'a str>,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 토스트 색상
    toast_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            orientation: "Landscape",
            grid_size: (8, 4),
            focused_tile: None,
            focused_title: None,
            theme_name: "Default",
            toast: None,
            bg_color: Color::Rgb(25, 118, 210),
            fg_color: Color::White,
            toast_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 화면 방향 설정
    pub fn orientation(mut self, orientation: &'a str) -> Self {
        self.orientation = orientation;
        self
    }

    /// 그리드 크기 설정
    pub fn grid_size(mut self, cols: u16, rows: u16) -> Self {
        self.grid_size = (cols, rows);
        self
    }

    /// 포커스된 타일 설정
    pub fn focused_tile(mut self, id: Option<&'a str>) -> Self {
        self.focused_tile = id;
        self
    }

    /// 포커스된 타일 제목 설정
    pub fn focused_title(mut self, title: Option<&'a str>) -> Self {
        self.focused_title = title;
        self
    }

    /// 테마 이름 설정
    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = name;
        self
    }

    /// 토스트 메시지 설정
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.toast_color = theme.warning.to_color();
        self
    }

    fn left_info(&self) -> String {
        let focus = match (self.focused_tile, self.focused_title) {
            (Some(id), Some(title)) => format!("{}: {}", id, title),
            (Some(id), None) => format!("{} (empty)", id),
            (None, _) => "-".to_string(),
        };
        format!(
            " {} {}x{} | {}",
            self.orientation, self.grid_size.0, self.grid_size.1, focus
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = self.left_info();
        let toast_info = self
            .toast
            .map(|msg| format!(" | {}", msg))
            .unwrap_or_default();
        let right_info = format!("[{}] ", self.theme_name);

        // 가용 공간 계산
        let left_len = left_info.width() + toast_info.width();
        let padding_len = (area.width as usize).saturating_sub(left_len + right_info.width());

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(
                toast_info,
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
