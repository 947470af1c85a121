//! Integration tests for workload aggregation.
//!
//! Builds a realistic month of visits, classifies it and checks the rolled
//! up totals, per-day metrics and levels.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pawtrack_core::{
    aggregate, classify_all, daily_metrics, period_report, workload_level, DateRange, Period, RawEvent,
    WorkloadLevel, WorkloadThresholds,
};

const CLIENTS: [&str; 10] = [
    "Smith", "Jones", "Patel", "Garcia", "Kim", "Nguyen", "Brown", "Lee", "Davis", "Lopez",
];

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn event(id: usize, title: String, start: NaiveDateTime, minutes: i64) -> RawEvent {
    RawEvent::new(id.to_string(), title, start, start + Duration::minutes(minutes))
}

/// 80 x 30 min drop-ins, 30 x 60 min walks, 10 x 12 h overnights, 10 x 1 h personal.
fn busy_month() -> Vec<RawEvent> {
    let mut events = Vec::new();
    let mut id = 0;
    let mut next_id = || {
        id += 1;
        id
    };

    for i in 0..80usize {
        let day = 1 + (i / 4) as u32;
        let hour = 8 + (i % 4) as u32;
        events.push(event(next_id(), format!("Drop-in - {}", CLIENTS[i % 10]), at(day, hour), 30));
    }
    for i in 0..30usize {
        events.push(event(next_id(), format!("Walk - {}", CLIENTS[i % 10]), at(1 + i as u32, 13), 60));
    }
    for i in 0..10usize {
        events.push(event(next_id(), format!("Overnight - {}", CLIENTS[i]), at(11 + i as u32, 20), 720));
    }
    for i in 0..10usize {
        events.push(event(next_id(), "Dentist".to_string(), at(21 + i as u32, 15), 60));
    }
    events
}

fn march() -> DateRange {
    DateRange::month_of(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
}

#[test]
fn test_end_to_end_month_totals() {
    let classified = classify_all(&busy_month());
    let summary = aggregate(&classified, &march());

    assert_eq!(summary.total_visits, 120);
    assert!((summary.total_hours - 190.0).abs() < 1e-6, "got {}", summary.total_hours);
    assert_eq!(summary.unique_clients, 10);

    let report = period_report(&classified, &march(), Period::Monthly, &WorkloadThresholds::default());
    assert_eq!(report.level, WorkloadLevel::High);
}

#[test]
fn test_event_starting_before_range_adds_hours_not_visits() {
    let events = classify_all(&[
        RawEvent::new("1", "Housesit - Smith", at(1, 0) - Duration::hours(12), at(1, 12)),
        RawEvent::new("2", "Walk - Jones", at(1, 14), at(1, 15)),
        RawEvent::new("3", "Yoga", at(1, 16), at(1, 17)),
    ]);
    let summary = aggregate(&events, &DateRange::day(at(1, 0).date()));

    assert_eq!(summary.total_visits, 1);
    assert_eq!(summary.unique_clients, 1);
    assert!((summary.total_hours - 13.0).abs() < 1e-6);
}

#[test]
fn test_daily_metrics_cover_every_day_with_travel() {
    let classified = classify_all(&busy_month());
    let range = DateRange::new(at(1, 0).date(), at(7, 0).date()).unwrap();
    let days = daily_metrics(&classified, &range, &WorkloadThresholds::default(), 15);

    assert_eq!(days.len(), 7);
    let first = &days[0];
    // four drop-ins and one walk
    assert_eq!(first.event_count, 5);
    assert_eq!(first.work_minutes, 180.0);
    assert_eq!(first.travel_minutes, 75.0);
    assert_eq!(first.total_minutes, 255.0);
    assert_eq!(first.level, WorkloadLevel::Comfortable);
}

#[test]
fn test_overnight_day_is_capped() {
    let classified = classify_all(&busy_month());
    let day = at(11, 0).date();
    let metric = &daily_metrics(&classified, &DateRange::day(day), &WorkloadThresholds::default(), 0)[0];
    // drop-ins 2h + walk 1h + overnight 4h (20:00 to midnight)
    assert_eq!(metric.work_minutes, 420.0);
    assert_eq!(metric.level, WorkloadLevel::Busy);
}

#[test]
fn test_threshold_boundaries() {
    let thresholds = WorkloadThresholds::default();
    assert_eq!(workload_level(6.0, Period::Daily, &thresholds), WorkloadLevel::Comfortable);
    assert_eq!(workload_level(6.01, Period::Daily, &thresholds), WorkloadLevel::Busy);
    assert_eq!(workload_level(50.0, Period::Weekly, &thresholds), WorkloadLevel::High);
    assert_eq!(workload_level(50.01, Period::Weekly, &thresholds), WorkloadLevel::Burnout);
}
