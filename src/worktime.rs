use crate::error::{OffhoursError, Result};
use crate::util::{weekday_name, WEEKDAYS};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

pub const WORK_START_HOUR: u32 = 9;
pub const WORK_END_HOUR: u32 = 18;

/// Working hours `[start_hour, end_hour)`, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl WorkHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if end_hour > 24 {
            return Err(OffhoursError::InvalidWorkHours(format!(
                "end hour {end_hour} is past midnight"
            )));
        }
        if start_hour >= end_hour {
            return Err(OffhoursError::InvalidWorkHours(format!(
                "start hour {start_hour} must be before end hour {end_hour}"
            )));
        }
        Ok(Self { start_hour, end_hour })
    }

    pub fn is_workday(day: Weekday) -> bool {
        day.number_from_monday() <= 5
    }

    /// Uses the wall-clock hour and weekday of the timestamp's own offset.
    pub fn contains<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        let hour = timestamp.hour();
        Self::is_workday(timestamp.weekday()) && hour >= self.start_hour && hour < self.end_hour
    }

    pub fn work_days(&self) -> Vec<String> {
        WEEKDAYS
            .iter()
            .filter(|d| Self::is_workday(**d))
            .map(|d| weekday_name(*d).to_string())
            .collect()
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self {
            start_hour: WORK_START_HOUR,
            end_hour: WORK_END_HOUR,
        }
    }
}

pub fn is_work_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> bool {
    WorkHours::default().contains(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, NaiveDate};

    // 2024-01-15 is a Monday.
    fn at(day_offset: i64, hour: u32) -> DateTime<FixedOffset> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap() + Duration::days(day_offset);
        let naive = date.and_hms_opt(hour, 30, 0).unwrap();
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .from_local_datetime(&naive)
            .unwrap()
    }

    #[test]
    fn weekends_are_never_work_time() {
        for day in 5..7 {
            for hour in 0..24 {
                assert!(!is_work_time(&at(day, hour)), "day {day} hour {hour}");
            }
        }
    }

    #[test]
    fn weekday_hours_follow_half_open_range() {
        for day in 0..5 {
            for hour in 0..24 {
                let expected = (9..18).contains(&hour);
                assert_eq!(is_work_time(&at(day, hour)), expected, "day {day} hour {hour}");
            }
        }
    }

    #[test]
    fn boundaries() {
        let base = at(0, 0).date_naive();
        let offset = FixedOffset::east_opt(0).unwrap();
        let ts = |h, m, s| {
            offset
                .from_local_datetime(&base.and_hms_opt(h, m, s).unwrap())
                .unwrap()
        };
        assert!(!is_work_time(&ts(8, 59, 59)));
        assert!(is_work_time(&ts(9, 0, 0)));
        assert!(is_work_time(&ts(17, 59, 59)));
        assert!(!is_work_time(&ts(18, 0, 0)));
    }

    #[test]
    fn local_hour_comes_from_commit_offset() {
        // 10:00 in +09:00 is 01:00 UTC, still work time for the author.
        let ts = DateTime::parse_from_rfc3339("2024-01-16T10:00:00+09:00").unwrap();
        assert!(is_work_time(&ts));
        assert!(!is_work_time(&ts.with_timezone(&chrono::Utc)));
    }

    #[test]
    fn custom_hours() {
        let hours = WorkHours::new(7, 15).unwrap();
        assert!(hours.contains(&at(2, 7)));
        assert!(!hours.contains(&at(2, 15)));
        assert!(!hours.contains(&at(6, 10)));
    }

    #[test]
    fn invalid_hours_are_rejected() {
        assert!(matches!(
            WorkHours::new(18, 9),
            Err(OffhoursError::InvalidWorkHours(_))
        ));
        assert!(WorkHours::new(9, 9).is_err());
        assert!(WorkHours::new(0, 25).is_err());
        assert!(WorkHours::new(0, 24).is_ok());
    }

    #[test]
    fn work_days_are_monday_to_friday() {
        assert_eq!(
            WorkHours::default().work_days(),
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        );
    }
}
