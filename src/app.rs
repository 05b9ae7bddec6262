use crate::core::actions::Action;
use crate::models::{resolve_tile, Direction, GridBlock, GridState, MockFeed, TileContent};
use crate::ui::{LayoutManager, LayoutMode, ThemeManager, ThemeMenuState};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub mod settings;

use settings::PersistedSettings;

/// 토스트 표시 시간
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

pub struct App {
    should_quit: bool,
    pub layout: LayoutManager,
    pub grid: GridState,
    pub theme_manager: ThemeManager,
    pub theme_menu: ThemeMenuState,
    pub feed: MockFeed,
    pub toast_message: Option<(String, Instant)>,
    settings_path: Option<PathBuf>,
}

impl App {
    pub fn new() -> Self {
        Self::with_settings_path(settings::default_settings_path())
    }

    /// 설정 파일 경로를 지정해 생성 (None이면 저장/복원 안 함)
    pub(crate) fn with_settings_path(settings_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            grid: GridState::default(),
            theme_manager: ThemeManager::new(),
            theme_menu: ThemeMenuState::new(),
            feed: MockFeed::generate(),
            toast_message: None,
            settings_path,
        };
        app.load_settings();
        app
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        Self::with_settings_path(None)
    }

    // === 설정 저장/복원 ===

    fn load_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if !path.exists() {
            debug!(path = %path.display(), "no settings file yet");
            return;
        }
        match settings::load(path) {
            Ok(loaded) => {
                // 없는 id면 첫 번째 테마
                self.theme_manager = ThemeManager::with_theme(&loaded.theme);
                info!(
                    theme = self.theme_manager.current_id(),
                    "restored theme from settings"
                );
            }
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring settings file"),
        }
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        let payload = PersistedSettings::new(self.theme_manager.current_id());
        match settings::save(path, &payload) {
            Ok(()) => debug!(path = %path.display(), theme = %payload.theme, "settings saved"),
            Err(err) => warn!(path = %path.display(), error = %err, "failed to save settings"),
        }
    }

    // === 종료 ===

    pub fn quit(&mut self) {
        self.save_settings();
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // === 화면 크기 ===

    /// 터미널 크기 반영. 방향이 바뀌면 그리드를 새로 생성합니다.
    pub fn handle_resize(&mut self, area: Rect) {
        self.layout.update(area);
        let orientation = self.layout.orientation();
        if self.grid.set_orientation(orientation) {
            info!(
                orientation = orientation.label(),
                width = area.width,
                height = area.height,
                "orientation changed, layout regenerated"
            );
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// 포커스된 타일의 콘텐츠
    pub fn focused_content(&self) -> TileContent {
        self.grid
            .focused()
            .map(|placement| resolve_tile(&placement.id))
            .unwrap_or(TileContent::Empty)
    }

    // === 액션 ===

    pub fn execute_action(&mut self, action: Action) {
        debug!(action = action.def().map_or("unknown", |d| d.id), "execute action");
        match action {
            Action::Quit => self.quit(),
            Action::FocusNext => self.grid.focus_next(),
            Action::FocusPrev => self.grid.focus_prev(),
            Action::MoveUp => self.move_focused(Direction::Up),
            Action::MoveDown => self.move_focused(Direction::Down),
            Action::MoveLeft => self.move_focused(Direction::Left),
            Action::MoveRight => self.move_focused(Direction::Right),
            Action::GrowWidth => self.resize_focused(Direction::Right),
            Action::ShrinkWidth => self.resize_focused(Direction::Left),
            Action::GrowHeight => self.resize_focused(Direction::Down),
            Action::ShrinkHeight => self.resize_focused(Direction::Up),
            Action::ResetLayout => {
                self.grid.reset();
                self.set_toast("Layout reset");
            }
            Action::Refresh => {
                self.feed = MockFeed::generate();
                self.set_toast("Data refreshed");
            }
            Action::OpenThemeMenu => self.open_theme_menu(),
            Action::CycleTheme => {
                self.theme_manager.cycle_theme();
                self.after_theme_change();
            }
        }
    }

    fn move_focused(&mut self, direction: Direction) {
        let result = self.grid.move_focused(direction);
        self.report_block(result);
    }

    fn resize_focused(&mut self, direction: Direction) {
        let result = self.grid.resize_focused(direction);
        self.report_block(result);
    }

    fn report_block(&mut self, result: std::result::Result<(), GridBlock>) {
        if let Err(block) = result {
            debug!(%block, "grid change rejected");
            self.set_toast(&format!("Blocked: {}", block));
        }
    }

    // === 테마 ===

    pub fn is_theme_menu_open(&self) -> bool {
        self.theme_menu.is_open
    }

    pub fn open_theme_menu(&mut self) {
        self.theme_menu.open(self.theme_manager.current_index());
    }

    pub fn close_theme_menu(&mut self) {
        self.theme_menu.close();
    }

    pub fn theme_menu_next(&mut self) {
        let count = self.theme_manager.available_themes().len();
        self.theme_menu.next(count);
    }

    pub fn theme_menu_prev(&mut self) {
        let count = self.theme_manager.available_themes().len();
        self.theme_menu.prev(count);
    }

    /// 드롭다운에서 선택한 테마 적용 후 닫기
    pub fn confirm_theme_menu(&mut self) {
        let selected = self
            .theme_manager
            .available_themes()
            .get(self.theme_menu.selected)
            .map(|entry| entry.id);
        self.theme_menu.close();
        if let Some(id) = selected {
            self.select_theme_and_save(id);
        }
    }

    /// id로 테마 선택. 없는 id면 현재 테마를 유지합니다.
    pub fn select_theme_and_save(&mut self, id: &str) -> bool {
        if !self.theme_manager.select(id) {
            warn!(theme = id, "unknown theme id, keeping current theme");
            return false;
        }
        self.after_theme_change();
        true
    }

    fn after_theme_change(&mut self) {
        info!(theme = self.theme_manager.current_id(), "theme changed");
        self.save_settings();
        let message = format!("Theme: {}", self.theme_manager.current_name());
        self.set_toast(&message);
    }

    // === 토스트 ===

    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed() >= TOAST_DURATION {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed() < TOAST_DURATION {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
