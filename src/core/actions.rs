//! 액션 레지스트리: 키 바인딩과 커맨드바 항목의 단일 출처
//!
//! 모든 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Focus
    FocusNext,
    FocusPrev,
    // Move
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    // Resize
    GrowWidth,
    ShrinkWidth,
    GrowHeight,
    ShrinkHeight,
    ResetLayout,
    // Theme
    OpenThemeMenu,
    CycleTheme,
    // System
    Refresh,
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::FocusNext,
        id: "focus_next",
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Focus",
            priority: 1,
        }),
    },
    ActionDef {
        action: Action::FocusPrev,
        id: "focus_prev",
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveLeft,
        id: "move_left",
        command_bar: Some(CommandBarEntry {
            key: "hjkl",
            label: "Move",
            priority: 2,
        }),
    },
    ActionDef {
        action: Action::MoveRight,
        id: "move_right",
        command_bar: None,
    },
    ActionDef {
        action: Action::GrowWidth,
        id: "grow_width",
        command_bar: Some(CommandBarEntry {
            key: "HJKL",
            label: "Resize",
            priority: 3,
        }),
    },
    ActionDef {
        action: Action::ShrinkWidth,
        id: "shrink_width",
        command_bar: None,
    },
    ActionDef {
        action: Action::GrowHeight,
        id: "grow_height",
        command_bar: None,
    },
    ActionDef {
        action: Action::ShrinkHeight,
        id: "shrink_height",
        command_bar: None,
    },
    ActionDef {
        action: Action::ResetLayout,
        id: "reset_layout",
        command_bar: Some(CommandBarEntry {
            key: "0",
            label: "Reset",
            priority: 4,
        }),
    },
    ActionDef {
        action: Action::OpenThemeMenu,
        id: "theme_menu",
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            priority: 5,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "theme_cycle",
        command_bar: None,
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        command_bar: Some(CommandBarEntry {
            key: "r",
            label: "Refresh",
            priority: 6,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 9,
        }),
    },
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    let none = Some(KeyModifiers::NONE);
    let shift = Some(KeyModifiers::SHIFT);

    vec![
        // 종료
        bind(KeyCode::Char('q'), none, Action::Quit),
        bind(KeyCode::Char('c'), Some(KeyModifiers::CONTROL), Action::Quit),
        // 포커스
        bind(KeyCode::Tab, none, Action::FocusNext),
        bind(KeyCode::BackTab, None, Action::FocusPrev),
        // 크기 조절: Shift+방향키 (이동보다 먼저 검사)
        bind(KeyCode::Up, shift, Action::ShrinkHeight),
        bind(KeyCode::Down, shift, Action::GrowHeight),
        bind(KeyCode::Left, shift, Action::ShrinkWidth),
        bind(KeyCode::Right, shift, Action::GrowWidth),
        // 크기 조절: Vim 대문자
        bind(KeyCode::Char('K'), None, Action::ShrinkHeight),
        bind(KeyCode::Char('J'), None, Action::GrowHeight),
        bind(KeyCode::Char('H'), None, Action::ShrinkWidth),
        bind(KeyCode::Char('L'), None, Action::GrowWidth),
        // 이동: 방향키
        bind(KeyCode::Up, none, Action::MoveUp),
        bind(KeyCode::Down, none, Action::MoveDown),
        bind(KeyCode::Left, none, Action::MoveLeft),
        bind(KeyCode::Right, none, Action::MoveRight),
        // 이동: Vim
        bind(KeyCode::Char('k'), none, Action::MoveUp),
        bind(KeyCode::Char('j'), none, Action::MoveDown),
        bind(KeyCode::Char('h'), none, Action::MoveLeft),
        bind(KeyCode::Char('l'), none, Action::MoveRight),
        // 레이아웃/데이터
        bind(KeyCode::Char('0'), none, Action::ResetLayout),
        bind(KeyCode::Char('r'), none, Action::Refresh),
        // 테마
        bind(KeyCode::Char('t'), none, Action::OpenThemeMenu),
        bind(KeyCode::Char('T'), None, Action::CycleTheme),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true, // any modifier
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

impl Action {
    /// 액션 메타데이터
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

/// 레지스트리 기반 커맨드바 항목 생성 (priority 순)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|d| d.command_bar.as_ref())
        .collect();
    entries.sort_by_key(|e| e.priority);
    entries
        .into_iter()
        .map(|e| CommandItem::new(e.key, e.label))
        .collect()
}
