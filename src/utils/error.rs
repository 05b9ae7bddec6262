use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileDashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("Settings encode error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, TileDashError>;
