//! Integration tests for event classification.
//!
//! Covers precedence of personal patterns over work patterns, client and
//! service extraction on realistic titles, and idempotence.

use chrono::{NaiveDate, NaiveDateTime};
use pawtrack_core::classifier::{personal_match, verdict, PersonalCategory};
use pawtrack_core::{classify, classify_all, RawEvent, ServiceType, Verdict};
use proptest::prelude::*;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn event(id: &str, title: &str) -> RawEvent {
    RawEvent::new(id, title, at(2, 9), at(2, 10))
}

#[test]
fn test_mixed_calendar_day() {
    let events = vec![
        event("1", "Drop-in - Smith"),
        event("2", "Walk | Jones (Rex) 45"),
        event("3", "Dentist"),
        event("4", "Bella & Max - evening visit"),
        event("5", "Lunch with Sam"),
        event("6", "Meet & Greet - Patel"),
        event("7", "Groceries"),
    ];
    let classified = classify_all(&events);

    let work: Vec<&str> = classified
        .iter()
        .filter(|e| e.is_work_event)
        .map(|e| e.id())
        .collect();
    assert_eq!(work, vec!["1", "2", "4", "6"]);

    assert_eq!(classified[0].client(), Some("Smith"));
    assert_eq!(classified[1].client(), Some("Jones"));

    let walk = classified[1].service_info.as_ref().unwrap();
    assert_eq!(walk.service_type, ServiceType::Walk);
    assert_eq!(walk.duration_minutes, 45);
    assert_eq!(walk.pet_name.as_deref(), Some("Rex"));

    assert_eq!(classified[3].client(), Some("Bella & Max"));
    assert_eq!(
        classified[5].service_info.as_ref().map(|s| s.service_type),
        Some(ServiceType::MeetGreet)
    );
}

#[test]
fn test_personal_keyword_wins_over_work_keyword() {
    let title = "Vacation - no drop-ins";
    assert!(!classify(&event("1", title)).is_work_event);
    assert!(matches!(verdict(title), Verdict::Personal { .. }));
    assert_eq!(personal_match("Doctor then walk"), Some(PersonalCategory::Medical));
}

#[test]
fn test_overnight_stay_detected_from_span() {
    let raw = RawEvent::new("1", "Smith - stay", at(2, 20), at(3, 8));
    let classified = classify(&raw);
    assert!(classified.is_work_event);
    assert!(classified.is_overnight_event);
}

proptest! {
    #[test]
    fn prop_classification_is_idempotent(title in "[A-Za-z &|()-]{0,40}( [0-9]{2})?", hours in 0i64..48) {
        let start = at(2, 9);
        let raw = RawEvent::new("p", title, start, start + chrono::Duration::hours(hours));
        let first = classify(&raw);
        let second = classify(&first.raw);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_personal_match_means_not_work(title in "[A-Za-z -]{0,20}", keyword in prop::sample::select(vec!["dentist", "day off", "lunch", "gym", "vacation"])) {
        let raw = event("p", &format!("{title} {keyword} walk 30"));
        prop_assert!(!classify(&raw).is_work_event);
    }
}
