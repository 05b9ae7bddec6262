// Too-small screen - 터미널이 최소 크기보다 작을 때
//
// 현재 크기와 필요한 크기, 그리고 지금 방향의 타일 배치를
// 칸 단위 미니맵으로 보여줍니다.

use crate::models::{Orientation, TilePlacement};
use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 미니맵에서 한 그리드 칸이 차지하는 글자 수
const MINIMAP_CELL_WIDTH: usize = 2;

pub struct WarningScreen<'a> {
    placements: &'a [TilePlacement],
    orientation: Orientation,
    current_size: (u16, u16),
    bg_color: Color,
    fg_color: Color,
    warning_color: Color,
    map_color: Color,
}

impl<'a> WarningScreen<'a> {
    pub fn new(placements: &'a [TilePlacement], orientation: Orientation) -> Self {
        Self {
            placements,
            orientation,
            current_size: (0, 0),
            bg_color: Color::Rgb(245, 245, 245),
            fg_color: Color::Rgb(102, 102, 102),
            warning_color: Color::Rgb(237, 108, 2),
            map_color: Color::Rgb(25, 118, 210),
        }
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_secondary.to_color();
        self.warning_color = theme.warning.to_color();
        self.map_color = theme.primary.to_color();
        self
    }

    /// 그리드 칸마다 덮고 있는 타일 번호 (빈 칸은 '·')
    fn minimap(&self) -> Vec<String> {
        (0..self.orientation.rows())
            .map(|y| {
                (0..self.orientation.cols())
                    .map(|x| {
                        let glyph = self
                            .placements
                            .iter()
                            .position(|p| x >= p.x && x < p.right() && y >= p.y && y < p.bottom())
                            .and_then(|i| char::from_digit((i % 10) as u32, 10))
                            .unwrap_or('·');
                        glyph.to_string().repeat(MINIMAP_CELL_WIDTH)
                    })
                    .collect()
            })
            .collect()
    }

    /// 부족한 쪽 안내 ("width +4, height +3")
    fn shortfall(&self) -> String {
        let (width, height) = self.current_size;
        let mut parts = Vec::new();
        if width < MIN_WIDTH {
            parts.push(format!("width +{}", MIN_WIDTH - width));
        }
        if height < MIN_HEIGHT {
            parts.push(format!("height +{}", MIN_HEIGHT - height));
        }
        parts.join(", ")
    }
}

impl Widget for WarningScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let muted = Style::default().fg(self.fg_color);
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "⚠ {}x{} < {}x{}",
                    self.current_size.0, self.current_size.1, MIN_WIDTH, MIN_HEIGHT
                ),
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.shortfall(), muted)),
        ];

        lines.extend(
            self.minimap()
                .into_iter()
                .map(|row| Line::from(Span::styled(row, Style::default().fg(self.map_color)))),
        );
        lines.push(Line::from(Span::styled(
            format!(
                "{} {}x{}",
                self.orientation.label(),
                self.orientation.cols(),
                self.orientation.rows()
            ),
            muted,
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tile::generate_layout;

    fn render_to_string(screen: WarningScreen<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        let mut rendered = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    rendered.push_str(cell.symbol());
                }
            }
            rendered.push('\n');
        }
        rendered
    }

    #[test]
    fn test_landscape_minimap() {
        let layout = generate_layout(Orientation::Landscape);
        let screen = WarningScreen::new(&layout, Orientation::Landscape);
        assert_eq!(
            screen.minimap(),
            vec![
                "0000111122223333",
                "0000111122223333",
                "4444555566667777",
                "4444555566667777",
            ]
        );
    }

    #[test]
    fn test_minimap_shows_gaps() {
        let mut layout = generate_layout(Orientation::Portrait);
        layout[0].w = 1;
        let screen = WarningScreen::new(&layout, Orientation::Portrait);
        let map = screen.minimap();
        assert_eq!(map.len(), 8);
        assert_eq!(map[0], "00··1111");
        assert_eq!(map[7], "66667777");
    }

    #[test]
    fn test_shortfall() {
        let layout = generate_layout(Orientation::Landscape);
        let screen = WarningScreen::new(&layout, Orientation::Landscape);
        assert_eq!(screen.current_size(36, 10).shortfall(), "width +4, height +5");
        let screen = WarningScreen::new(&layout, Orientation::Landscape);
        assert_eq!(screen.current_size(60, 12).shortfall(), "height +3");
    }

    #[test]
    fn test_render_shows_sizes_and_grid() {
        let layout = generate_layout(Orientation::Landscape);
        let area = Rect::new(0, 0, 36, 10);
        let screen = WarningScreen::new(&layout, Orientation::Landscape).current_size(36, 10);
        let rendered = render_to_string(screen, area);

        assert!(rendered.contains("36x10 < 40x15"), "rendered=\n{}", rendered);
        assert!(rendered.contains("0000111122223333"), "rendered=\n{}", rendered);
        assert!(rendered.contains("Landscape 8x4"), "rendered=\n{}", rendered);
    }
}
