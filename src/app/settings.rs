// Persisted settings - 테마 선택 저장/복원
//
// TOML 파일 { version, theme } 하나만 관리합니다.

use crate::utils::error::{Result, TileDashError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로 환경 변수
pub const SETTINGS_ENV: &str = "TILEDASH_SETTINGS_FILE";
/// 설정 포맷 버전
pub const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub version: u32,
    pub theme: String,
}

impl PersistedSettings {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme: theme.into(),
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 버전이 다르거나 테마가 비어 있으면 무시
    pub fn decode(data: &str) -> Result<Self> {
        let parsed: PersistedSettings = toml::from_str(data)?;
        if parsed.version != SETTINGS_VERSION {
            return Err(TileDashError::Settings(format!(
                "unsupported settings version {}",
                parsed.version
            )));
        }
        if parsed.theme.trim().is_empty() {
            return Err(TileDashError::Settings("theme is empty".to_string()));
        }
        Ok(parsed)
    }
}

/// 기본 설정 파일 경로
///
/// `TILEDASH_SETTINGS_FILE`이 비어 있지 않으면 그 경로, 아니면
/// 사용자 설정 디렉토리 아래 `tiledash/settings.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var(SETTINGS_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir().map(|dir| dir.join("tiledash").join("settings.toml"))
}

pub fn save(path: &Path, settings: &PersistedSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, settings.encode()?)?;
    Ok(())
}

pub fn load(path: &Path) -> Result<PersistedSettings> {
    let data = fs::read_to_string(path)?;
    PersistedSettings::decode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_encode_contains_fields() {
        let text = PersistedSettings::new("darkneon").encode().unwrap();
        assert!(text.contains("version = 1"));
        assert!(text.contains("theme = \"darkneon\""));
    }

    #[test]
    fn test_decode_rejects_version_mismatch() {
        let err = PersistedSettings::decode("version = 99\ntheme = \"dark\"\n").unwrap_err();
        assert!(matches!(err, TileDashError::Settings(_)));
    }

    #[test]
    fn test_decode_rejects_blank_theme() {
        let err = PersistedSettings::decode("version = 1\ntheme = \"  \"\n").unwrap_err();
        assert!(matches!(err, TileDashError::Settings(_)));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let err = PersistedSettings::decode("version = ").unwrap_err();
        assert!(matches!(err, TileDashError::SettingsParse(_)));
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");

        save(&path, &PersistedSettings::new("brutalism")).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, PersistedSettings::new("brutalism"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, TileDashError::Io(_)));
    }
}
