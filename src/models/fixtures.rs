// Mock fixtures - 타일 위젯용 샘플 데이터
//
// 무작위 값은 MockFeed 생성 시 한 번만 뽑아서 프레임마다 바뀌지 않게 합니다.
// Refresh 액션에서 다시 생성합니다.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use rand::Rng;

/// 사용자 목록 샘플
pub const USER_NAMES: [&str; 4] = ["John Doe", "Jane Smith", "Robert Johnson", "Emily Davis"];

/// 최근 활동 샘플
pub const ACTIVITIES: [&str; 4] = [
    "File uploaded: report.pdf",
    "User comment: Great work!",
    "New user registered",
    "Purchase completed",
];

/// 할 일 샘플
pub const TASKS: [&str; 4] = [
    "Review design mockups",
    "Update documentation",
    "Fix login bug",
    "Prepare presentation",
];

/// 지표 (값, 레이블)
pub const METRICS: [(&str, &str); 2] = [("85%", "Conversion"), ("128", "New Users")];

/// 시스템 상태 게이지 값 (%)
pub const STATUS_PERCENT: u16 = 92;

/// 할 일 우선순위 레이블
pub fn task_priority(index: usize) -> &'static str {
    match index {
        0 => "High",
        1 => "Medium",
        _ => "Low",
    }
}

/// 프레임 사이에 유지되는 무작위 샘플 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFeed {
    /// 사용자별 마지막 활동 (분 전, 0..60)
    pub user_minutes_ago: [u32; 4],
    /// 활동별 경과 시간 (시간 전, 0..24)
    pub activity_hours_ago: [u32; 4],
    /// 일정 기준 날짜
    pub today: NaiveDate,
}

impl MockFeed {
    /// 새 무작위 샘플 생성
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self {
            user_minutes_ago: std::array::from_fn(|_| rng.random_range(0..60)),
            activity_hours_ago: std::array::from_fn(|_| rng.random_range(0..24)),
            today: Local::now().date_naive(),
        }
    }

    /// 사용자 활동 문구
    pub fn user_last_active(&self, index: usize) -> String {
        let minutes = self.user_minutes_ago.get(index).copied().unwrap_or(0);
        format!("Last active: {} minutes ago", minutes)
    }

    /// 활동 경과 문구
    pub fn activity_age(&self, index: usize) -> String {
        let hours = self.activity_hours_ago.get(index).copied().unwrap_or(0);
        format!("{}h ago", hours)
    }

    /// 다가오는 일정 목록
    pub fn upcoming_events(&self) -> Vec<String> {
        let tomorrow = self.today + Duration::days(1);
        let friday = next_weekday(self.today, Weekday::Fri);
        let monday = next_weekday(self.today, Weekday::Mon);
        let next_month = first_of_next_month(self.today);

        vec![
            format!("Team Meeting - {} 10:00", tomorrow.format("%a %b %-d")),
            format!("Project Deadline - {}", friday.format("%a %b %-d")),
            format!("Client Call - {}", monday.format("%a %b %-d")),
            format!("Conference - {}", next_month.format("%B %Y")),
        ]
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::generate()
    }
}

/// 기준일 이후(당일 제외) 처음 오는 요일
fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = from.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let mut delta = (target - current).rem_euclid(7);
    if delta == 0 {
        delta = 7;
    }
    from + Duration::days(delta)
}

/// 다음 달 1일
fn first_of_next_month(from: NaiveDate) -> NaiveDate {
    let (year, month) = if from.month() == 12 {
        (from.year() + 1, 1)
    } else {
        (from.year(), from.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_feed() -> MockFeed {
        MockFeed {
            user_minutes_ago: [5, 12, 0, 59],
            activity_hours_ago: [1, 2, 3, 23],
            // 2026-10-17 (토)
            today: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        }
    }

    #[test]
    fn test_generate_ranges() {
        for _ in 0..20 {
            let feed = MockFeed::generate();
            assert!(feed.user_minutes_ago.iter().all(|m| *m < 60));
            assert!(feed.activity_hours_ago.iter().all(|h| *h < 24));
        }
    }

    #[test]
    fn test_freshness_text() {
        let feed = fixed_feed();
        assert_eq!(feed.user_last_active(1), "Last active: 12 minutes ago");
        assert_eq!(feed.activity_age(3), "23h ago");
        assert_eq!(feed.activity_age(99), "0h ago");
    }

    #[test]
    fn test_upcoming_events() {
        let events = fixed_feed().upcoming_events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], "Team Meeting - Sun Oct 18 10:00");
        assert_eq!(events[1], "Project Deadline - Fri Oct 23");
        assert_eq!(events[2], "Client Call - Mon Oct 19");
        assert_eq!(events[3], "Conference - November 2026");
    }

    #[test]
    fn test_next_weekday_skips_today() {
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            next_weekday(friday, Weekday::Fri),
            NaiveDate::from_ymd_opt(2026, 10, 23).unwrap()
        );
    }

    #[test]
    fn test_first_of_next_month_wraps_year() {
        let dec = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(
            first_of_next_month(dec),
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_task_priority() {
        assert_eq!(task_priority(0), "High");
        assert_eq!(task_priority(1), "Medium");
        assert_eq!(task_priority(3), "Low");
    }
}
