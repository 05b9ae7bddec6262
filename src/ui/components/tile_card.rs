// Tile card component - 타일 카드 컴포넌트
//
// 타일 콘텐츠 종류별 샘플 위젯을 카드 안에 그립니다.
// 매핑이 없는 타일은 "Empty Tile <id>" 플레이스홀더를 표시합니다.

use crate::models::fixtures::{self, MockFeed};
use crate::models::{TileContent, TileKind, TilePlacement};
use crate::ui::Theme;
use crate::utils::text::{center_offset, truncate_to_width};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// 차트를 크게 그리는 최소 타일 너비 (그리드 칸)
pub const WIDE_CHART_MIN_COLS: u16 = 3;

/// 월별 성과 샘플 (막대 높이 0..=8)
const CHART_SERIES: [u8; 6] = [3, 5, 2, 6, 4, 8];
const BAR_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// 타일 카드 컴포넌트
pub struct TileCard<'a> {
    placement: &'a TilePlacement,
    content: TileContent,
    feed: &'a MockFeed,
    /// 포커스 여부
    focused: bool,
    border_type: BorderType,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
    border_color: Color,
    focus_border_color: Color,
    primary_color: Color,
    secondary_color: Color,
    success_color: Color,
}

impl<'a> TileCard<'a> {
    pub fn new(placement: &'a TilePlacement, content: TileContent, feed: &'a MockFeed) -> Self {
        Self {
            placement,
            content,
            feed,
            focused: false,
            border_type: BorderType::Rounded,
            bg_color: Color::Rgb(255, 255, 255),
            fg_color: Color::Rgb(33, 33, 33),
            muted_color: Color::Rgb(102, 102, 102),
            border_color: Color::Rgb(204, 204, 204),
            focus_border_color: Color::Rgb(25, 118, 210),
            primary_color: Color::Rgb(25, 118, 210),
            secondary_color: Color::Rgb(220, 0, 78),
            success_color: Color::Rgb(46, 125, 50),
        }
    }

    /// 포커스 상태 설정
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_type = theme.card_border_type;
        self.bg_color = theme.card_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.muted_color = theme.fg_secondary.to_color();
        self.border_color = theme.card_border.to_color();
        self.focus_border_color = theme.card_focus_border.to_color();
        self.primary_color = theme.primary.to_color();
        self.secondary_color = theme.secondary.to_color();
        self.success_color = theme.success.to_color();
        self
    }

    fn text(&self, s: impl Into<String>) -> Span<'static> {
        Span::styled(s.into(), Style::default().fg(self.fg_color))
    }

    fn muted(&self, s: impl Into<String>) -> Span<'static> {
        Span::styled(s.into(), Style::default().fg(self.muted_color))
    }

    fn accent(&self, s: impl Into<String>, color: Color) -> Span<'static> {
        Span::styled(
            s.into(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }

    /// 콘텐츠 종류별 본문
    fn body_lines(&self, kind: TileKind, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let fit = |s: &str| truncate_to_width(s, width.saturating_sub(2));

        match kind {
            TileKind::Metrics => fixtures::METRICS
                .iter()
                .enumerate()
                .map(|(i, (value, label))| {
                    let (icon, color) = if i == 0 {
                        ("▲", self.primary_color)
                    } else {
                        ("●", self.secondary_color)
                    };
                    Line::from(vec![
                        self.accent(format!("{} ", icon), color),
                        self.accent(format!("{:<5}", value), self.fg_color),
                        self.muted(*label),
                    ])
                })
                .collect(),
            TileKind::Chart => {
                let mut lines = self.chart_lines();
                lines.push(Line::from(self.muted("Chart Placeholder")));
                lines
            }
            TileKind::UserList => fixtures::USER_NAMES
                .iter()
                .enumerate()
                .flat_map(|(i, name)| {
                    [
                        Line::from(self.text(fit(*name))),
                        Line::from(self.muted(fit(self.feed.user_last_active(i).as_str()))),
                    ]
                })
                .collect(),
            TileKind::Form => {
                let field = "_".repeat(width.saturating_sub(10).clamp(4, 24));
                vec![
                    Line::from(vec![self.muted("Name:  "), self.text(field.clone())]),
                    Line::from(vec![self.muted("Email: "), self.text(field)]),
                    Line::from(""),
                    Line::from(Span::styled(
                        " Submit ",
                        Style::default()
                            .fg(self.bg_color)
                            .bg(self.primary_color)
                            .add_modifier(Modifier::BOLD),
                    )),
                ]
            }
            TileKind::Activity => fixtures::ACTIVITIES
                .iter()
                .enumerate()
                .flat_map(|(i, activity)| {
                    [
                        Line::from(self.text(fit(*activity))),
                        Line::from(self.muted(self.feed.activity_age(i))),
                    ]
                })
                .collect(),
            TileKind::Status => vec![
                self.gauge_line(width),
                Line::from(self.accent("Systems Online", self.success_color)),
                Line::from(self.muted(fit("Last checked: 2 minutes ago"))),
            ],
            TileKind::Calendar => self
                .feed
                .upcoming_events()
                .iter()
                .map(|event| Line::from(self.text(fit(event.as_str()))))
                .collect(),
            TileKind::Tasks => fixtures::TASKS
                .iter()
                .enumerate()
                .flat_map(|(i, task)| {
                    [
                        Line::from(self.text(fit(format!("☐ {}", task).as_str()))),
                        Line::from(self.muted(format!("  Priority: {}", fixtures::task_priority(i)))),
                    ]
                })
                .collect(),
        }
    }

    /// 막대 차트 (타일이 넓으면 4줄, 아니면 1줄)
    fn chart_lines(&self) -> Vec<Line<'static>> {
        let style = Style::default().fg(self.primary_color);

        if self.placement.w < WIDE_CHART_MIN_COLS {
            let bars: String = CHART_SERIES
                .iter()
                .map(|v| BAR_GLYPHS[usize::from(*v)])
                .collect();
            return vec![Line::from(Span::styled(bars, style))];
        }

        // 한 줄에 8단계씩, 위에서부터 4줄
        const ROWS: u8 = 4;
        (0..ROWS)
            .rev()
            .map(|row| {
                let bars: String = CHART_SERIES
                    .iter()
                    .map(|v| {
                        let scaled = v * ROWS;
                        let level = scaled.saturating_sub(row * 8).min(8);
                        let glyph = BAR_GLYPHS[usize::from(level)];
                        format!("{}{} ", glyph, glyph)
                    })
                    .collect();
                Line::from(Span::styled(bars, style))
            })
            .collect()
    }

    /// 상태 게이지 한 줄
    fn gauge_line(&self, width: usize) -> Line<'static> {
        let percent = usize::from(fixtures::STATUS_PERCENT);
        let bar_width = width.saturating_sub(8).clamp(4, 30);
        let filled = bar_width * percent / 100;
        Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(self.success_color)),
            self.muted("░".repeat(bar_width - filled)),
            self.text(format!(" {}%", percent)),
        ])
    }
}

impl Widget for TileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let border_color = if self.focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        let mut border_style = Style::default().fg(border_color);
        if self.focused {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type)
            .border_style(border_style)
            .style(Style::default().bg(self.bg_color));
        if let Some(config) = self.content.config() {
            let title = truncate_to_width(config.title, area.width.saturating_sub(4) as usize);
            block = block.title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if self.content.is_empty() {
            if inner.height == 0 {
                return;
            }
            let label = truncate_to_width(
                &format!("Empty Tile {}", self.placement.id),
                inner.width as usize,
            );
            let x = inner.x + center_offset(&label, inner.width);
            let y = inner.y + inner.height / 2;
            buf.set_span(x, y, &self.muted(label), inner.width);
            return;
        }

        if let Some(config) = self.content.config() {
            let lines = self.body_lines(config.kind, inner.width);
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tile::generate_layout;
    use crate::models::{resolve_tile, Orientation};
    use chrono::NaiveDate;

    fn feed() -> MockFeed {
        MockFeed {
            user_minutes_ago: [1, 2, 3, 4],
            activity_hours_ago: [5, 6, 7, 8],
            today: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        }
    }

    fn render_to_string(card: TileCard<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

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
    fn test_render_form_tile() {
        let layout = generate_layout(Orientation::Landscape);
        let feed = feed();
        let card = TileCard::new(&layout[3], resolve_tile(&layout[3].id), &feed);
        let rendered = render_to_string(card, Rect::new(0, 0, 30, 10));

        assert!(rendered.contains("Quick Input"), "rendered=\n{}", rendered);
        assert!(rendered.contains("Email:"), "rendered=\n{}", rendered);
        assert!(rendered.contains("Submit"), "rendered=\n{}", rendered);
    }

    #[test]
    fn test_render_user_list_uses_feed() {
        let layout = generate_layout(Orientation::Landscape);
        let feed = feed();
        let card = TileCard::new(&layout[2], resolve_tile(&layout[2].id), &feed);
        let rendered = render_to_string(card, Rect::new(0, 0, 40, 12));

        assert!(rendered.contains("John Doe"), "rendered=\n{}", rendered);
        assert!(
            rendered.contains("Last active: 1 minutes ago"),
            "rendered=\n{}",
            rendered
        );
    }

    #[test]
    fn test_render_empty_tile() {
        let placement = TilePlacement {
            id: "tile-9".to_string(),
            x: 0,
            y: 0,
            w: 2,
            h: 2,
            min_w: 1,
            min_h: 1,
        };
        let feed = feed();
        let card = TileCard::new(&placement, resolve_tile(&placement.id), &feed);
        let rendered = render_to_string(card, Rect::new(0, 0, 30, 7));

        assert!(rendered.contains("Empty Tile tile-9"), "rendered=\n{}", rendered);

        // 제목 없는 테두리: 윗줄은 모서리 사이가 모두 가로선
        let first_line = rendered.lines().next().unwrap();
        let inner_top: String = first_line.chars().skip(1).take(28).collect();
        assert!(
            inner_top.chars().all(|c| c == '─'),
            "top border={}",
            first_line
        );
    }

    #[test]
    fn test_chart_size_depends_on_width() {
        let mut placement = generate_layout(Orientation::Landscape)[1].clone();
        let feed = feed();

        let narrow = TileCard::new(&placement, resolve_tile("tile-1"), &feed);
        assert_eq!(narrow.chart_lines().len(), 1);

        placement.w = WIDE_CHART_MIN_COLS;
        let wide = TileCard::new(&placement, resolve_tile("tile-1"), &feed);
        assert_eq!(wide.chart_lines().len(), 4);
    }

    #[test]
    fn test_every_kind_renders_in_small_area() {
        let feed = feed();
        for tile in generate_layout(Orientation::Portrait) {
            let card = TileCard::new(&tile, resolve_tile(&tile.id), &feed).focused(true);
            let mut buf = Buffer::empty(Rect::new(0, 0, 8, 3));
            card.render(Rect::new(0, 0, 8, 3), &mut buf);
        }
    }
}
