// Text helpers - 표시 너비 기준 문자열 처리

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 표시 너비가 max_width를 넘으면 끝을 잘라 "…"를 붙임
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_to_width("Recent Activity", 8), "Recent …");
/// assert_eq!(truncate_to_width("Tasks", 8), "Tasks");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        // 말줄임표 한 칸 확보
        if used + cw > max_width - 1 {
            break;
        }
        result.push(c);
        used += cw;
    }
    result.push('…');
    result
}

/// 표시 너비 기준 가운데 정렬용 왼쪽 여백
pub fn center_offset(text: &str, width: u16) -> u16 {
    width.saturating_sub(text.width() as u16) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate_to_width("Tasks", 8), "Tasks");
        assert_eq!(truncate_to_width("12345678", 8), "12345678");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("Recent Activity", 8), "Recent …");
        assert_eq!(truncate_to_width("abc", 1), "…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // 한글은 2칸
        assert_eq!(truncate_to_width("대시보드", 5), "대시…");
        assert_eq!(truncate_to_width("대시보드", 4), "대…");
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset("abcd", 10), 3);
        assert_eq!(center_offset("abcdefghijk", 10), 0);
    }
}
