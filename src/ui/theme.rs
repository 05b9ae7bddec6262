use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// 색상 테마 시스템
///
/// 대시보드 전체의 색상 팔레트와 카드 테두리 스타일을 정의합니다.
/// 선택 가능한 테마는 고정된 목록(`THEME_IDS`)으로만 제공됩니다.
#[derive(Debug, Clone)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_secondary: ColorDef,

    // 팔레트
    pub primary: ColorDef,
    pub secondary: ColorDef,

    // 타일 카드
    pub card_bg: ColorDef,
    pub card_border: ColorDef,
    pub card_focus_border: ColorDef,
    pub card_border_type: BorderType,

    // UI 컴포넌트
    pub header_bg: ColorDef,
    pub header_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (Hex 문자열, "#1e1e1e" 또는 "#0ff")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDef(&'static str);

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        parse_hex_color(self.0)
    }
}

impl From<&'static str> for ColorDef {
    fn from(hex: &'static str) -> Self {
        ColorDef(hex)
    }
}

/// Hex 색상 문자열을 Color로 파싱 (6자리 / 3자리)
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

    match hex.len() {
        6 => Color::Rgb(channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        3 => {
            // "#0ff" → "#00ffff"
            let expand = |i: usize| channel(&hex[i..i + 1]) * 17;
            Color::Rgb(expand(0), expand(1), expand(2))
        }
        _ => Color::Reset,
    }
}

impl Theme {
    /// Default 테마 (밝은 배경, 파란 강조)
    pub fn default_light() -> Self {
        Theme {
            bg_primary: "#f5f5f5".into(),
            fg_primary: "#212121".into(),
            fg_secondary: "#666666".into(),

            primary: "#1976d2".into(),
            secondary: "#dc004e".into(),

            card_bg: "#ffffff".into(),
            card_border: "#cccccc".into(),
            card_focus_border: "#1976d2".into(),
            card_border_type: BorderType::Rounded,

            header_bg: "#f5f5f5".into(),
            header_fg: "#1976d2".into(),
            status_bar_bg: "#1976d2".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#e0e0e0".into(),
            command_bar_fg: "#212121".into(),

            warning: "#ed6c02".into(),
            error: "#d32f2f".into(),
            success: "#2e7d32".into(),
        }
    }

    /// Dark 테마
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#121212".into(),
            fg_primary: "#ffffff".into(),
            fg_secondary: "#b3b3b3".into(),

            primary: "#90caf9".into(),
            secondary: "#f48fb1".into(),

            card_bg: "#1e1e1e".into(),
            card_border: "#3c3c3c".into(),
            card_focus_border: "#90caf9".into(),
            card_border_type: BorderType::Rounded,

            header_bg: "#121212".into(),
            header_fg: "#90caf9".into(),
            status_bar_bg: "#1e1e1e".into(),
            status_bar_fg: "#90caf9".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            warning: "#ffa726".into(),
            error: "#f44336".into(),
            success: "#66bb6a".into(),
        }
    }

    /// Colorful 테마 (보라/남색)
    pub fn colorful() -> Self {
        Theme {
            bg_primary: "#f0f7ff".into(),
            fg_primary: "#1a1a2e".into(),
            fg_secondary: "#5c5c7a".into(),

            primary: "#6a1b9a".into(),
            secondary: "#0d47a1".into(),

            card_bg: "#ffffff".into(),
            card_border: "#d1b3e0".into(),
            card_focus_border: "#9c27b0".into(),
            card_border_type: BorderType::Rounded,

            header_bg: "#f0f7ff".into(),
            header_fg: "#6a1b9a".into(),
            status_bar_bg: "#6a1b9a".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#0d47a1".into(),
            command_bar_fg: "#ffffff".into(),

            warning: "#ff9800".into(),
            error: "#d32f2f".into(),
            success: "#388e3c".into(),
        }
    }

    /// Brutalism 테마 (원색, 굵은 검정 테두리)
    pub fn brutalism() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#000000".into(),
            fg_secondary: "#000000".into(),

            primary: "#ff0000".into(),
            secondary: "#000000".into(),

            card_bg: "#ffff00".into(),
            card_border: "#000000".into(),
            card_focus_border: "#ff0000".into(),
            card_border_type: BorderType::Thick,

            header_bg: "#ffffff".into(),
            header_fg: "#000000".into(),
            status_bar_bg: "#000000".into(),
            status_bar_fg: "#ffff00".into(),
            command_bar_bg: "#ff0000".into(),
            command_bar_fg: "#ffffff".into(),

            warning: "#ff0000".into(),
            error: "#0000ff".into(),
            success: "#000000".into(),
        }
    }

    /// Glassmorphism 테마
    ///
    /// 반투명 색상은 밝은 배경(#f4f7fe)과 합성한 불투명 색상으로 근사합니다.
    pub fn glassmorphism() -> Self {
        Theme {
            bg_primary: "#f4f7fe".into(),
            fg_primary: "#1e293b".into(),
            fg_secondary: "#64748b".into(),

            primary: "#6d70f0".into(),
            secondary: "#d94ced".into(),

            card_bg: "#f8fafe".into(),
            card_border: "#e2e8f5".into(),
            card_focus_border: "#6d70f0".into(),
            card_border_type: BorderType::Rounded,

            header_bg: "#f4f7fe".into(),
            header_fg: "#6d70f0".into(),
            status_bar_bg: "#e0e3fb".into(),
            status_bar_fg: "#1e293b".into(),
            command_bar_bg: "#eceffd".into(),
            command_bar_fg: "#1e293b".into(),

            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            success: "#10b981".into(),
        }
    }

    /// Dark Neon 테마 (청록/마젠타)
    pub fn dark_neon() -> Self {
        Theme {
            bg_primary: "#0a0a14".into(),
            fg_primary: "#ffffff".into(),
            fg_secondary: "#b3b3cc".into(),

            primary: "#0ff".into(),
            secondary: "#f0f".into(),

            card_bg: "#141428".into(),
            card_border: "#0a4a50".into(),
            card_focus_border: "#0ff".into(),
            card_border_type: BorderType::Double,

            header_bg: "#0a0a14".into(),
            header_fg: "#0ff".into(),
            status_bar_bg: "#141428".into(),
            status_bar_fg: "#f0f".into(),
            command_bar_bg: "#0a0a14".into(),
            command_bar_fg: "#b3b3cc".into(),

            warning: "#ffff00".into(),
            error: "#ff3366".into(),
            success: "#00ff99".into(),
        }
    }
}

/// 선택 가능한 테마 목록 (id, 표시 이름)
pub const THEME_IDS: [(&str, &str); 6] = [
    ("default", "Default"),
    ("dark", "Dark"),
    ("colorful", "Colorful"),
    ("brutalism", "Brutalism"),
    ("glassmorphism", "Glassmorphism"),
    ("darkneon", "Dark Neon"),
];

fn build_theme(id: &str) -> Theme {
    match id {
        "dark" => Theme::dark(),
        "colorful" => Theme::colorful(),
        "brutalism" => Theme::brutalism(),
        "glassmorphism" => Theme::glassmorphism(),
        "darkneon" => Theme::dark_neon(),
        _ => Theme::default_light(),
    }
}

/// 테마 목록 항목
#[derive(Debug, Clone)]
pub struct ThemeEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub theme: Theme,
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current: usize,
    available_themes: Vec<ThemeEntry>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (목록의 첫 번째 테마)
    pub fn new() -> Self {
        Self {
            current: 0,
            available_themes: THEME_IDS
                .iter()
                .map(|&(id, name)| ThemeEntry {
                    id,
                    name,
                    theme: build_theme(id),
                })
                .collect(),
        }
    }

    /// 특정 테마로 초기화 (없는 id면 첫 번째 테마)
    pub fn with_theme(id: &str) -> Self {
        let mut manager = Self::new();
        let resolved = manager.lookup(id).id;
        manager.select(resolved);
        manager
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.available_themes.iter().position(|entry| entry.id == id)
    }

    /// id로 테마 조회 (없으면 첫 번째 테마)
    pub fn lookup(&self, id: &str) -> &ThemeEntry {
        let index = self.index_of(id).unwrap_or(0);
        &self.available_themes[index]
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.available_themes[self.current].theme
    }

    pub fn current_id(&self) -> &'static str {
        self.available_themes[self.current].id
    }

    pub fn current_name(&self) -> &'static str {
        self.available_themes[self.current].name
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 테마 전환 (id로)
    ///
    /// 목록에 없는 id면 현재 테마를 유지하고 false를 반환합니다.
    pub fn select(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        self.current = (self.current + 1) % self.available_themes.len();
    }

    /// 사용 가능한 테마 목록
    pub fn available_themes(&self) -> &[ThemeEntry] {
        &self.available_themes
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
