// Header component - 상단 헤더 컴포넌트
//
// 앱 이름과 가운데 정렬된 테마 전환 버튼을 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 헤더 컴포넌트
pub struct Header<'a> {
    /// 앱 이름
    app_name: &'a str,
    /// 현재 테마 표시 이름
    theme_name: &'a str,
    /// 테마 메뉴가 열려있는지
    menu_open: bool,
    bg_color: Color,
    fg_color: Color,
    /// 버튼 강조색
    accent_color: Color,
}

impl Default for Header<'_> {
    fn default() -> Self {
        Self {
            app_name: "TileDash",
            theme_name: "Default",
            menu_open: false,
            bg_color: Color::Rgb(245, 245, 245),
            fg_color: Color::Rgb(33, 33, 33),
            accent_color: Color::Rgb(25, 118, 210),
        }
    }
}

impl<'a> Header<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 앱 이름 설정
    pub fn app_name(mut self, name: &'a str) -> Self {
        self.app_name = name;
        self
    }

    /// 현재 테마 이름 설정
    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = name;
        self
    }

    /// 메뉴 열림 상태 설정
    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.accent_color = theme.header_fg.to_color();
        self
    }

    /// 버튼 레이블 ("Dark Theme ▾")
    pub fn button_label(&self) -> String {
        let arrow = if self.menu_open { "▴" } else { "▾" };
        format!(" {} Theme {} ", self.theme_name, arrow)
    }

    /// 헤더 영역 안에서 버튼이 차지하는 영역 (드롭다운 위치 기준)
    pub fn button_rect(&self, area: Rect) -> Rect {
        let width = (self.button_label().width() as u16).min(area.width);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: 1.min(area.height),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let name = Span::styled(
            format!(" {}", self.app_name),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_span(area.x, area.y, &name, area.width);

        // 버튼: 열려있으면 반전 표시
        let button_style = if self.menu_open {
            Style::default().fg(self.bg_color).bg(self.accent_color)
        } else {
            Style::default()
                .fg(self.accent_color)
                .add_modifier(Modifier::BOLD)
        };
        let button = self.button_rect(area);
        let label = Span::styled(self.button_label(), button_style);
        buf.set_span(button.x, button.y, &label, button.width);
    }
}
