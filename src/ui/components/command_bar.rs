// Command bar component - 하단 키 안내 바
//
// 왼쪽에 입력 모드 배지, 이어서 액션 레지스트리의 키 안내를 표시합니다.
// 너비가 부족하면 뒤쪽 항목부터 통째로 생략합니다.

use crate::core::actions::generate_command_bar_items;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 키 안내 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    pub key: &'static str,
    pub label: &'static str,
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// "key:label" 표시 너비
    fn width(&self) -> usize {
        self.key.width() + 1 + self.label.width()
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    items: Vec<CommandItem>,
    /// 입력 모드 배지 ("GRID", "THEME")
    mode: &'static str,
    bg_color: Color,
    badge_color: Color,
    key_color: Color,
    label_color: Color,
    disabled_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            items: generate_command_bar_items(),
            mode: "GRID",
            bg_color: Color::Rgb(224, 224, 224),
            badge_color: Color::Rgb(25, 118, 210),
            key_color: Color::Rgb(25, 118, 210),
            label_color: Color::Rgb(33, 33, 33),
            disabled_color: Color::Rgb(102, 102, 102),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(mut self, items: Vec<CommandItem>) -> Self {
        self.items = items;
        self
    }

    /// 입력 모드 배지 설정
    pub fn mode(mut self, mode: &'static str) -> Self {
        self.mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.badge_color = theme.primary.to_color();
        self.key_color = theme.primary.to_color();
        self.label_color = theme.command_bar_fg.to_color();
        self.disabled_color = theme.fg_secondary.to_color();
        self
    }

    /// 주어진 너비에 통째로 들어가는 앞쪽 항목 수
    fn visible_count(&self, width: usize) -> usize {
        let mut used = self.mode.width() + 3; // " MODE " + 공백
        self.items
            .iter()
            .take_while(|item| {
                used += item.width() + 1;
                used <= width
            })
            .count()
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let visible = self.visible_count(area.width as usize);
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode),
                Style::default()
                    .fg(self.bg_color)
                    .bg(self.badge_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        for item in self.items.iter().take(visible) {
            let (key_style, label_style) = if item.enabled {
                (
                    Style::default()
                        .fg(self.key_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_color),
                )
            } else {
                let dim = Style::default().fg(self.disabled_color);
                (dim, dim)
            };
            spans.push(Span::styled(item.key, key_style));
            spans.push(Span::styled(format!(":{} ", item.label), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
