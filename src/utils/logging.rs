//! 로그 초기화
//!
//! `TILEDASH_LOG` 환경 변수로 필터를 지정합니다 (기본값 `info`).
//! 표준 출력은 TUI가 사용하므로 로그는 캐시 디렉토리의 파일에 기록합니다.
//!
//! ```bash
//! TILEDASH_LOG=debug tiledash
//! TILEDASH_LOG=tiledash::app=trace,warn tiledash
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "TILEDASH_LOG";
const LOG_FILE_NAME: &str = "tiledash.log";
const DEFAULT_FILTER: &str = "info";

/// 로그 파일 경로 (캐시 디렉토리가 없으면 None)
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("tiledash").join(LOG_FILE_NAME))
}

/// 필터 지시어 파싱 (없거나 잘못되면 `info`)
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn build_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref())
}

/// tracing 구독자 초기화
///
/// 실패해도 대시보드 실행은 계속됩니다. 기록 중인 로그 파일 경로를 반환합니다.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    fmt()
        .with_env_filter(build_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_info() {
        assert_eq!(filter_from(None).to_string(), "info");
        assert_eq!(filter_from(Some("  ")).to_string(), "info");
    }

    #[test]
    fn test_filter_uses_directives() {
        assert_eq!(filter_from(Some("debug")).to_string(), "debug");
        assert!(filter_from(Some("tiledash=trace,warn"))
            .to_string()
            .contains("tiledash=trace"));
    }

    #[test]
    fn test_invalid_directive_falls_back_to_info() {
        assert_eq!(filter_from(Some("tiledash=loud")).to_string(), "info");
    }

    #[test]
    fn test_build_filter_reads_env() {
        // 환경 변수가 없거나 잘못돼도 필터는 항상 만들어짐
        let expected = filter_from(std::env::var(LOG_ENV).ok().as_deref()).to_string();
        assert_eq!(build_filter().to_string(), expected);
    }

    #[test]
    fn test_log_file_name() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("tiledash/tiledash.log"));
        }
    }
}
