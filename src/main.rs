mod app;
mod core;
mod models;
mod ui;
mod utils;

use app::App;
use core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::resolve_tile;
use ratatui::{backend::CrosstermBackend, layout::Rect, style::Style, widgets::Block, Frame, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info};
use ui::{CommandBar, Header, LayoutMode, StatusBar, ThemeMenu, TileCard, WarningScreen};
use utils::error::Result;

const APP_NAME: &str = "TileDash";
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let log_path = utils::logging::init();
    info!(log = ?log_path, "starting {}", APP_NAME);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "dashboard loop failed");
        eprintln!("Error: {:?}", err);
    }

    info!("exiting {}", APP_NAME);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.clear_expired_toast();

        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트 (방향이 바뀌면 타일 재배치)
            app.handle_resize(size);

            match app.layout_mode() {
                LayoutMode::TooSmall => {
                    // 경고 화면 표시
                    let (width, height) = app.layout.terminal_size();
                    let warning =
                        WarningScreen::new(app.grid.placements(), app.grid.orientation())
                            .current_size(width, height)
                            .theme(app.theme_manager.current());
                    f.render_widget(warning, app.layout.areas().warning);
                }
                LayoutMode::Dashboard => {
                    render_dashboard(f, app);
                }
            }
        })?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.is_theme_menu_open() {
                        // 드롭다운 모드에서의 키 처리
                        handle_theme_menu_keys(app, key.modifiers, key.code);
                    } else {
                        // 일반 모드에서의 키 처리
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 대시보드 렌더링: 헤더 | 타일 그리드 | 상태바 | 커맨드바 (+ 테마 드롭다운)
fn render_dashboard(f: &mut Frame, app: &App) {
    let theme = app.theme_manager.current();
    let areas = app.layout.areas().clone();

    // 헤더
    let header = Header::new()
        .app_name(APP_NAME)
        .theme_name(app.theme_manager.current_name())
        .menu_open(app.is_theme_menu_open())
        .theme(theme);
    let button = header.button_rect(areas.header);
    f.render_widget(header, areas.header);

    // 그리드 배경
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary.to_color())),
        areas.grid,
    );

    // 타일
    let geometry = app.layout.grid_geometry();
    let focused = app.grid.focused_index();
    for (index, placement) in app.grid.placements().iter().enumerate() {
        let rect = geometry.tile_rect(placement);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        let card = TileCard::new(placement, resolve_tile(&placement.id), &app.feed)
            .focused(index == focused)
            .theme(theme);
        f.render_widget(card, rect);
    }

    // 상태바
    let focused_content = app.focused_content();
    let status_bar = StatusBar::new()
        .orientation(app.grid.orientation().label())
        .grid_size(app.grid.cols(), app.grid.rows())
        .focused_tile(app.grid.focused().map(|p| p.id.as_str()))
        .focused_title(focused_content.config().map(|c| c.title))
        .theme_name(app.theme_manager.current_name())
        .toast(app.toast_display())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    // 커맨드바 (드롭다운이 열려있으면 t만 활성)
    let menu_open = app.is_theme_menu_open();
    let commands = generate_command_bar_items()
        .into_iter()
        .map(|item| {
            let enabled = !menu_open || item.key == "t";
            item.enabled(enabled)
        })
        .collect();
    f.render_widget(
        CommandBar::new()
            .mode(if menu_open { "THEME" } else { "GRID" })
            .commands(commands)
            .theme(theme),
        areas.command_bar,
    );

    // 테마 드롭다운 (헤더 버튼 아래)
    if app.is_theme_menu_open() {
        let menu = ThemeMenu::new(
            app.theme_manager.available_themes(),
            &app.theme_menu,
            app.theme_manager.current_index(),
        )
        .theme(theme);
        let frame = f.area();
        let y = button.y + 1;
        let width = menu.calculate_width().min(frame.width);
        let x = button.x.min(frame.width.saturating_sub(width));
        let height = menu
            .calculate_height()
            .min(frame.height.saturating_sub(y));
        f.render_widget(menu, Rect::new(x, y, width, height));
    }
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 테마 드롭다운 키 처리
fn handle_theme_menu_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('t')) => app.close_theme_menu(),
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => app.theme_menu_prev(),
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => app.theme_menu_next(),
        (_, KeyCode::Enter) => app.confirm_theme_menu(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        _ => {}
    }
}
