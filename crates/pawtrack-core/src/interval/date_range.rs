//! Inclusive calendar-day ranges.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive range of calendar days.
///
/// As an instant span it covers `[start 00:00, (end + 1 day) 00:00)`, so
/// adjacent ranges tile without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidValue {
                field: "date_range".into(),
                message: format!("start ({start}) must not be after end ({end})"),
            });
        }
        Ok(Self { start, end })
    }

    /// Single calendar day.
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Monday-to-Sunday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let start = date.week(Weekday::Mon).first_day();
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let next_month = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        };
        let end = next_month.and_then(|d| d.pred_opt()).unwrap_or(start);
        Self { start, end }
    }

    /// Parse two `YYYY-MM-DD` strings.
    pub fn parse(from: &str, to: &str) -> Result<Self, ValidationError> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// First instant of the range.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(chrono::NaiveTime::MIN)
    }

    /// Exclusive end instant (midnight after the last day).
    pub fn end_instant(&self) -> NaiveDateTime {
        (self.end + Duration::days(1)).and_time(chrono::NaiveTime::MIN)
    }

    /// Whether the instant lies in `[start_instant, end_instant)`.
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start_instant() && instant < self.end_instant()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.num_days().max(0) as usize)
    }

    /// Calendar weeks (Monday-based) intersecting this range, whole weeks.
    pub fn weeks(&self) -> Vec<DateRange> {
        let mut weeks = Vec::new();
        let mut cursor = DateRange::week_of(self.start);
        while cursor.start <= self.end {
            weeks.push(cursor);
            cursor = DateRange::week_of(cursor.end + Duration::days(1));
        }
        weeks
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidValue {
        field: "date".into(),
        message: format!("Invalid date format '{s}'. Expected YYYY-MM-DD"),
    })
}

/// True for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
