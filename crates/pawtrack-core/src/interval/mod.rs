//! Interval arithmetic for workload durations.
//!
//! Clamps event spans against arbitrary ranges (day, week, month, custom).
//! Overnight events are capped per calendar day so that a single stay does
//! not dominate a day's workload; range totals stay uncapped.

mod date_range;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{ClassifiedEvent, TimeSpan};

pub use date_range::{is_weekend, parse_date, DateRange};

/// Per-day ceiling for overnight events, in minutes.
pub const OVERNIGHT_DAILY_CAP_MINUTES: f64 = 720.0;

/// Half-open overlap test: `[a_start, a_end)` and `[b_start, b_end)` intersect.
///
/// Back-to-back spans do not overlap.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether two spans overlap.
pub fn spans_overlap<A: TimeSpan + ?Sized, B: TimeSpan + ?Sized>(a: &A, b: &B) -> bool {
    overlaps(a.start(), a.end(), b.start(), b.end())
}

/// Minutes of `event` that fall inside `[range_start, range_end]`.
///
/// Returns 0 when the two do not overlap or the event is malformed.
pub fn minutes_in_range<E: TimeSpan + ?Sized>(
    event: &E,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> f64 {
    if event.end() < range_start || event.start() > range_end {
        return 0.0;
    }
    let effective_start = event.start().max(range_start);
    let effective_end = event.end().min(range_end);
    let seconds = (effective_end - effective_start).num_seconds().max(0);
    seconds as f64 / 60.0
}

/// Hours of `event` inside `[range_start, range_end]`.
pub fn hours_in_range<E: TimeSpan + ?Sized>(
    event: &E,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> f64 {
    minutes_in_range(event, range_start, range_end) / 60.0
}

/// Minutes of `event` inside the calendar days of `range`.
pub fn minutes_in_date_range<E: TimeSpan + ?Sized>(event: &E, range: &DateRange) -> f64 {
    minutes_in_range(event, range.start_instant(), range.end_instant())
}

/// Minutes an event contributes to one calendar day's workload.
///
/// Overnight events are capped at [`OVERNIGHT_DAILY_CAP_MINUTES`].
pub fn daily_minutes(event: &ClassifiedEvent, day: NaiveDate) -> f64 {
    let minutes = minutes_in_date_range(event, &DateRange::day(day));
    if event.is_overnight_event {
        minutes.min(OVERNIGHT_DAILY_CAP_MINUTES)
    } else {
        minutes
    }
}

/// Whether the event touches the given calendar day.
pub fn touches_day<E: TimeSpan + ?Sized>(event: &E, day: NaiveDate) -> bool {
    let range = DateRange::day(day);
    overlaps(event.start(), event.end(), range.start_instant(), range.end_instant())
}

/// Calendar days the event touches (a zero-length event touches its start day).
pub fn days_spanned<E: TimeSpan + ?Sized>(event: &E) -> Vec<NaiveDate> {
    let first = event.start().date();
    let last = if event.end() > event.start() {
        // an event ending exactly at midnight does not touch the next day
        (event.end() - chrono::Duration::nanoseconds(1)).date()
    } else {
        first
    };
    first.iter_days().take_while(|d| *d <= last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawEvent;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn classified(start: NaiveDateTime, end: NaiveDateTime, overnight: bool) -> ClassifiedEvent {
        ClassifiedEvent {
            raw: RawEvent::new("e", "Smith - stay", start, end),
            is_work_event: true,
            is_overnight_event: overnight,
            client_name: Some("Smith".into()),
            service_info: None,
        }
    }

    #[test]
    fn test_clamps_to_month_end() {
        let event = RawEvent::new("e", "stay", at(2026, 1, 30, 9), at(2026, 2, 2, 9));
        let january = DateRange::month_of(date(2026, 1, 15));
        let hours = minutes_in_date_range(&event, &january) / 60.0;
        assert!((hours - 39.0).abs() < 0.01, "got {hours}");
    }

    #[test]
    fn test_clamps_to_month_start() {
        let event = RawEvent::new("e", "stay", at(2025, 12, 31, 20), at(2026, 1, 1, 8));
        let january = DateRange::month_of(date(2026, 1, 1));
        let hours = minutes_in_date_range(&event, &january) / 60.0;
        assert!((hours - 8.0).abs() < 0.01, "got {hours}");
    }

    #[test]
    fn test_disjoint_range_is_zero() {
        let event = RawEvent::new("e", "walk", at(2026, 1, 5, 9), at(2026, 1, 5, 10));
        assert_eq!(minutes_in_range(&event, at(2026, 1, 6, 0), at(2026, 1, 7, 0)), 0.0);
        assert_eq!(minutes_in_range(&event, at(2026, 1, 5, 10), at(2026, 1, 5, 12)), 0.0);
    }

    #[test]
    fn test_malformed_event_is_zero() {
        let event = RawEvent::new("e", "walk", at(2026, 1, 5, 10), at(2026, 1, 5, 9));
        assert_eq!(minutes_in_range(&event, at(2026, 1, 5, 0), at(2026, 1, 6, 0)), 0.0);
    }

    #[test]
    fn test_overnight_cap_applies_per_day_only() {
        let stay = classified(at(2026, 3, 2, 0), at(2026, 3, 3, 0), true);
        assert_eq!(daily_minutes(&stay, date(2026, 3, 2)), 720.0);
        assert_eq!(minutes_in_date_range(&stay, &DateRange::day(date(2026, 3, 2))), 1440.0);

        let long_day = classified(at(2026, 3, 2, 0), at(2026, 3, 3, 0), false);
        assert_eq!(daily_minutes(&long_day, date(2026, 3, 2)), 1440.0);
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        assert!(!overlaps(at(2026, 1, 1, 9), at(2026, 1, 1, 10), at(2026, 1, 1, 10), at(2026, 1, 1, 11)));
        assert!(overlaps(at(2026, 1, 1, 9), at(2026, 1, 1, 11), at(2026, 1, 1, 10), at(2026, 1, 1, 12)));
    }

    #[test]
    fn test_days_spanned_excludes_midnight_end() {
        let event = RawEvent::new("e", "stay", at(2026, 3, 2, 18), at(2026, 3, 4, 0));
        assert_eq!(days_spanned(&event), vec![date(2026, 3, 2), date(2026, 3, 3)]);
        assert!(!touches_day(&event, date(2026, 3, 4)));
    }
}
