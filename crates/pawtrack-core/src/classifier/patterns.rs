//! Compiled title patterns.
//!
//! Personal patterns are listed in evaluation order and always run before any
//! work pattern.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which personal rule matched a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonalCategory {
    Admin,
    DayOff,
    Medical,
    Private,
    Blocked,
    Holiday,
    Meal,
    Travel,
    Entertainment,
    SelfCare,
}

// ============================================================================
// Personal patterns
// ============================================================================

pub(super) static PERSONAL_PATTERNS: LazyLock<Vec<(PersonalCategory, Regex)>> = LazyLock::new(|| {
    [
        (
            PersonalCategory::Admin,
            r"(?i)\b(?:admin|bookkeeping|book[\s-]keeping|invoic(?:e|es|ing)|accounting|taxes|paperwork|payroll)\b",
        ),
        (
            PersonalCategory::DayOff,
            r"(?i)\b(?:days?[\s-]?off|off[\s-]day|no\s+(?:visits|bookings|work)|unavailable|not\s+available)\b",
        ),
        (
            PersonalCategory::Medical,
            r"(?i)\b(?:doctors?|dentist|dental|medical|physio(?:therapy)?|therapy|therapist|hospital|clinic|check[\s-]?up|optician)\b",
        ),
        (PersonalCategory::Private, r"(?i)\b(?:personal|private|me\s+time)\b"),
        (
            PersonalCategory::Blocked,
            r"(?i)\b(?:blocked|block(?:ed)?[\s-]?out|busy|do\s+not\s+book)\b",
        ),
        (
            PersonalCategory::Holiday,
            r"(?i)\b(?:holidays?|vacation|pto|annual\s+leave|time[\s-]off)\b",
        ),
        (
            PersonalCategory::Meal,
            r"(?i)\b(?:breakfast|brunch|lunch|dinner|supper|coffee\s+with)\b",
        ),
        (
            PersonalCategory::Travel,
            r"(?i)\b(?:flights?|fly\s+to|airport|travel(?:l?ing)?|train\s+to|road\s*trip)\b",
        ),
        (
            PersonalCategory::Entertainment,
            r"(?i)\b(?:movies?|cinema|concert|theat(?:re|er)|party|wedding|birthday|date\s+night|game\s+night)\b",
        ),
        (
            PersonalCategory::SelfCare,
            r"(?i)\b(?:gym|yoga|pilates|workout|haircut|massage|spa|nap|self[\s-]?care|meditation)\b",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| (category, Regex::new(pattern).expect("Invalid regex")))
    .collect()
});

// ============================================================================
// Work patterns
// ============================================================================

/// Duration token at the very end of the title ("Bella 30", "Max - 45 min").
pub(super) static TRAILING_DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\d:.])(15|20|30|45|60)\s*(?:m|mins?|minutes?)?\s*$").expect("Invalid regex")
});

/// Duration token anywhere; clock times like "9:30" are not durations.
pub(super) static DURATION_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\d:.])(15|20|30|45|60)\s*(?:m|mins?|minutes?)?\b").expect("Invalid regex")
});

pub(super) static MEET_GREET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bmeet[\s-]*(?:&|and|n)?[\s-]*greet\b|\bm\s?&\s?g\b").expect("Invalid regex")
});

pub(super) static HOUSESIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhouse[\s-]?sit(?:s|ting|ter)?\b").expect("Invalid regex")
});

pub(super) static OVERNIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bover[\s-]?nights?\b|\bsleep[\s-]?overs?\b").expect("Invalid regex")
});

pub(super) static NAIL_TRIM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnails?[\s-]?(?:trim|clip|cut)(?:s|ming|ping)?\b|\bnails\b").expect("Invalid regex")
});

pub(super) static WALK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwalk(?:s|ing|ies)?\b").expect("Invalid regex"));

pub(super) static DROP_IN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bdrop[\s-]?ins?\b|\bvisits?\b|\bcheck[\s-]?ins?\b|\bpop[\s-]?ins?\b").expect("Invalid regex")
});

/// Capitalised name (optionally "A & B" or two words) followed by " - ".
pub(super) static LEADING_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\p{Lu}[\p{L}'’.]*(?:\s+(?:&|and)\s+\p{Lu}[\p{L}'’.]*|\s+\p{Lu}[\p{L}'’.]*)?)\s+-\s+")
        .expect("Invalid regex")
});

// ============================================================================
// Extraction helpers
// ============================================================================

pub(super) static PET_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([^()]*?)\s*\)").expect("Invalid regex"));

pub(super) static PARENTHETICAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)").expect("Invalid regex"));

/// Separators tried when splitting a title into name and service parts.
pub(super) const NAME_SEPARATORS: [&str; 5] = [" - ", " \u{2013} ", " \u{2014} ", " | ", " @ "];

/// First personal category matching `title`, in precedence order.
pub fn personal_match(title: &str) -> Option<PersonalCategory> {
    PERSONAL_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(title))
        .map(|(category, _)| *category)
}

/// True when the text names a service rather than a person.
pub(super) fn is_service_text(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    MEET_GREET_PATTERN.is_match(text)
        || HOUSESIT_PATTERN.is_match(text)
        || OVERNIGHT_PATTERN.is_match(text)
        || NAIL_TRIM_PATTERN.is_match(text)
        || WALK_PATTERN.is_match(text)
        || DROP_IN_PATTERN.is_match(text)
        || TRAILING_DURATION_PATTERN
            .captures(text)
            .and_then(|caps| caps.get(0))
            .is_some_and(|m| m.as_str().trim() == text)
}

/// First explicit duration token in `title`, in minutes.
pub(super) fn duration_token(title: &str) -> Option<u32> {
    DURATION_TOKEN_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_categories_in_order() {
        assert_eq!(personal_match("Invoicing for March"), Some(PersonalCategory::Admin));
        assert_eq!(personal_match("Day off"), Some(PersonalCategory::DayOff));
        assert_eq!(personal_match("Dentist"), Some(PersonalCategory::Medical));
        assert_eq!(personal_match("Private"), Some(PersonalCategory::Private));
        assert_eq!(personal_match("BUSY"), Some(PersonalCategory::Blocked));
        assert_eq!(personal_match("PTO"), Some(PersonalCategory::Holiday));
        assert_eq!(personal_match("Lunch with Sam"), Some(PersonalCategory::Meal));
        assert_eq!(personal_match("Flight to Denver"), Some(PersonalCategory::Travel));
        assert_eq!(personal_match("Movie night"), Some(PersonalCategory::Entertainment));
        assert_eq!(personal_match("Yoga"), Some(PersonalCategory::SelfCare));
        assert_eq!(personal_match("Bella walk"), None);
    }

    #[test]
    fn test_clock_times_are_not_durations() {
        assert_eq!(duration_token("Bella 9:30 walk"), None);
        assert_eq!(duration_token("Bella walk 45min"), Some(45));
        assert_eq!(duration_token("Max 300"), None);
        assert_eq!(duration_token("30 min drop-in"), Some(30));
    }

    #[test]
    fn test_trailing_duration_requires_end_of_title() {
        assert!(TRAILING_DURATION_PATTERN.is_match("Bella 30"));
        assert!(TRAILING_DURATION_PATTERN.is_match("Max - 45 min"));
        assert!(!TRAILING_DURATION_PATTERN.is_match("30 Rosewood Ave"));
    }

    #[test]
    fn test_meet_greet_variants() {
        for title in ["Meet & Greet", "meet and greet", "Meet-n-greet", "M&G Jones"] {
            assert!(MEET_GREET_PATTERN.is_match(title), "{title}");
        }
    }

    #[test]
    fn test_leading_name_captures_pairs() {
        let caps = LEADING_NAME_PATTERN.captures("Bella & Max - walk").unwrap();
        assert_eq!(&caps[1], "Bella & Max");
        assert!(LEADING_NAME_PATTERN.captures("Drop-in 30 - Smith").is_none());
    }

    #[test]
    fn test_service_text_detection() {
        assert!(is_service_text("Drop-in 30"));
        assert!(is_service_text("45 min"));
        assert!(!is_service_text("Smith"));
        assert!(!is_service_text(""));
    }
}
