// Theme menu component - 테마 선택 드롭다운
//
// 헤더의 테마 버튼 아래에 열리는 단일 단계 드롭다운

use crate::ui::theme::ThemeEntry;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 테마 메뉴 상태
#[derive(Debug, Clone, Default)]
pub struct ThemeMenuState {
    /// 메뉴가 열려있는지
    pub is_open: bool,
    /// 하이라이트된 항목 인덱스
    pub selected: usize,
}

impl ThemeMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 메뉴 열기 (현재 테마에 하이라이트)
    pub fn open(&mut self, current: usize) {
        self.is_open = true;
        self.selected = current;
    }

    /// 메뉴 닫기
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// 다음 항목 (순환)
    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// 이전 항목 (순환)
    pub fn prev(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }
}

/// 테마 드롭다운 컴포넌트
pub struct ThemeMenu<'a> {
    entries: &'a [ThemeEntry],
    state: &'a ThemeMenuState,
    /// 현재 적용 중인 테마 인덱스
    current: usize,
    bg_color: Color,
    fg_color: Color,
    selected_bg: Color,
    selected_fg: Color,
    border_color: Color,
}

impl<'a> ThemeMenu<'a> {
    pub fn new(entries: &'a [ThemeEntry], state: &'a ThemeMenuState, current: usize) -> Self {
        Self {
            entries,
            state,
            current,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            border_color: Color::Rgb(60, 60, 60),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.card_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.selected_bg = theme.primary.to_color();
        self.selected_fg = theme.card_bg.to_color();
        self.border_color = theme.card_focus_border.to_color();
        self
    }

    /// 드롭다운 너비 (표시 이름 + 체크 표시 + 테두리)
    pub fn calculate_width(&self) -> u16 {
        let max_label = self
            .entries
            .iter()
            .map(|entry| entry.name.width())
            .max()
            .unwrap_or(0);
        (max_label as u16 + 6).max(16)
    }

    /// 드롭다운 높이 (항목 + 테두리)
    pub fn calculate_height(&self) -> u16 {
        self.entries.len() as u16 + 2
    }
}

impl Widget for ThemeMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entries.is_empty() {
            return;
        }

        let dropdown_area = Rect {
            x: area.x,
            y: area.y,
            width: self.calculate_width().min(area.width),
            height: self.calculate_height().min(area.height),
        };
        if dropdown_area.width < 3 || dropdown_area.height < 3 {
            return;
        }

        Clear.render(dropdown_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(dropdown_area, buf);

        let inner_width = dropdown_area.width - 2;
        for (i, entry) in self.entries.iter().enumerate() {
            let y = dropdown_area.y + 1 + i as u16;
            if y >= dropdown_area.bottom() - 1 {
                break;
            }

            let is_selected = i == self.state.selected;
            let (bg, fg) = if is_selected {
                (self.selected_bg, self.selected_fg)
            } else {
                (self.bg_color, self.fg_color)
            };

            let row = Rect::new(dropdown_area.x + 1, y, inner_width, 1);
            buf.set_style(row, Style::default().bg(bg));

            let marker = if i == self.current { "✓ " } else { "  " };
            let mut style = Style::default().fg(fg).bg(bg);
            if i == self.current {
                style = style.add_modifier(Modifier::BOLD);
            }
            let label = Span::styled(format!("{}{}", marker, entry.name), style);
            buf.set_span(row.x + 1, y, &label, inner_width.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ThemeManager;

    #[test]
    fn test_menu_state_navigation() {
        let mut state = ThemeMenuState::new();
        state.open(5);
        assert!(state.is_open);
        assert_eq!(state.selected, 5);

        state.next(6);
        assert_eq!(state.selected, 0);
        state.prev(6);
        assert_eq!(state.selected, 5);

        state.close();
        assert!(!state.is_open);
    }

    #[test]
    fn test_menu_size() {
        let manager = ThemeManager::new();
        let state = ThemeMenuState::new();
        let menu = ThemeMenu::new(manager.available_themes(), &state, 0);
        // "Glassmorphism" = 13
        assert_eq!(menu.calculate_width(), 19);
        assert_eq!(menu.calculate_height(), 8);
    }

    #[test]
    fn test_render_lists_all_themes() {
        let manager = ThemeManager::new();
        let mut state = ThemeMenuState::new();
        state.open(1);

        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        ThemeMenu::new(manager.available_themes(), &state, 1).render(area, &mut buf);

        let mut rendered = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    rendered.push_str(cell.symbol());
                }
            }
            rendered.push('\n');
        }

        for name in ["Default", "Dark", "Colorful", "Brutalism", "Glassmorphism", "Dark Neon"] {
            assert!(rendered.contains(name), "missing {} in\n{}", name, rendered);
        }
        assert!(rendered.contains("✓ Dark"), "rendered=\n{}", rendered);
    }
}
