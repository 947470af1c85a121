//! Event classification.
//!
//! Turns a raw calendar event into a [`ClassifiedEvent`]:
//! - **Personal** rules run first and always win (admin, day off, medical, ...)
//! - **Work** heuristics are OR-combined (duration token, service keywords,
//!   leading "Name - " prefix)
//! - Work events get a client name and [`ServiceInfo`] extracted from the title
//!
//! Classification is a best-effort, lossy heuristic. It never fails: odd input
//! degrades to a personal event or a 30 minute `other` service.

mod patterns;

use serde::{Deserialize, Serialize};

use crate::event::{ClassifiedEvent, RawEvent, ServiceInfo, ServiceType, TimeSpan};
use patterns::*;

pub use patterns::{personal_match, PersonalCategory};

/// Events spanning at least this long across midnight count as overnight.
pub const OVERNIGHT_MIN_SPAN_MINUTES: i64 = 8 * 60;

/// Which work heuristics fired for a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSignals {
    pub trailing_duration: bool,
    pub meet_greet: bool,
    pub housesit: bool,
    pub overnight: bool,
    pub nail_trim: bool,
    pub walk: bool,
    pub drop_in: bool,
    pub leading_name: bool,
}

impl WorkSignals {
    /// True if any heuristic matched.
    pub fn any(&self) -> bool {
        self.trailing_duration
            || self.meet_greet
            || self.housesit
            || self.overnight
            || self.nail_trim
            || self.walk
            || self.drop_in
            || self.leading_name
    }
}

/// Outcome of the precedence check, for callers that want to explain a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Verdict {
    Empty,
    Personal { category: PersonalCategory },
    Work { signals: WorkSignals },
    Unmatched,
}

/// Evaluate work heuristics without the personal precedence check.
pub fn work_signals(title: &str) -> WorkSignals {
    WorkSignals {
        trailing_duration: TRAILING_DURATION_PATTERN.is_match(title),
        meet_greet: MEET_GREET_PATTERN.is_match(title),
        housesit: HOUSESIT_PATTERN.is_match(title),
        overnight: OVERNIGHT_PATTERN.is_match(title),
        nail_trim: NAIL_TRIM_PATTERN.is_match(title),
        walk: WALK_PATTERN.is_match(title),
        drop_in: DROP_IN_PATTERN.is_match(title),
        leading_name: leading_name(title).is_some(),
    }
}

/// Run the full precedence chain for a title.
pub fn verdict(title: &str) -> Verdict {
    if title.trim().is_empty() {
        return Verdict::Empty;
    }
    if let Some(category) = personal_match(title) {
        return Verdict::Personal { category };
    }
    let signals = work_signals(title);
    if signals.any() {
        Verdict::Work { signals }
    } else {
        Verdict::Unmatched
    }
}

/// Whether the title describes billable work.
pub fn is_work_title(title: &str) -> bool {
    matches!(verdict(title), Verdict::Work { .. })
}

/// Classify a single event.
pub fn classify(raw: &RawEvent) -> ClassifiedEvent {
    let title = raw.title.as_str();
    let spans_overnight = spans_overnight(raw);

    let (is_work_event, client_name, service_info, keyword_overnight) = match verdict(title) {
        Verdict::Work { signals } => {
            let service = service_info(title, &signals);
            (
                true,
                extract_client_name(title),
                Some(service),
                signals.housesit || signals.overnight,
            )
        }
        _ => (false, None, None, false),
    };

    tracing::trace!(id = %raw.id, title, is_work_event, "classified event");

    ClassifiedEvent {
        raw: raw.clone(),
        is_work_event,
        is_overnight_event: keyword_overnight || spans_overnight,
        client_name,
        service_info,
    }
}

/// Classify a batch of events, preserving order.
pub fn classify_all(events: &[RawEvent]) -> Vec<ClassifiedEvent> {
    events.iter().map(classify).collect()
}

/// At least eight hours long and ending on a later calendar day.
fn spans_overnight(raw: &RawEvent) -> bool {
    raw.duration_minutes() >= OVERNIGHT_MIN_SPAN_MINUTES && raw.end.date() > raw.start.date()
}

fn service_info(title: &str, signals: &WorkSignals) -> ServiceInfo {
    let explicit = duration_token(title);

    let service_type = if signals.meet_greet {
        ServiceType::MeetGreet
    } else if signals.housesit {
        ServiceType::Housesit
    } else if signals.overnight {
        ServiceType::Overnight
    } else if signals.nail_trim {
        ServiceType::NailTrim
    } else if signals.walk {
        ServiceType::Walk
    } else if signals.drop_in || explicit.is_some() {
        ServiceType::DropIn
    } else {
        ServiceType::Other
    };

    let duration_minutes = match explicit {
        Some(minutes) if !service_type.has_fixed_duration() => minutes,
        _ => service_type.default_duration_minutes(),
    };

    ServiceInfo {
        service_type,
        duration_minutes,
        pet_name: pet_name(title),
    }
}

fn leading_name(title: &str) -> Option<&str> {
    LEADING_NAME_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| !is_service_text(name))
}

/// Client (or pet) name from a work title.
///
/// Prefers an explicit leading "Name - " prefix, then the non-service side of
/// the first separator, then the whole title.
pub fn extract_client_name(title: &str) -> Option<String> {
    if let Some(name) = leading_name(title) {
        return clean_name(name);
    }

    let split = NAME_SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep).map(|idx| (idx, sep.len())))
        .min_by_key(|(idx, _)| *idx);

    match split {
        Some((idx, len)) => {
            let head = &title[..idx];
            let tail = &title[idx + len..];
            if is_service_text(head) && !is_service_text(tail) {
                clean_name(tail)
            } else {
                clean_name(head)
            }
        }
        None => clean_name(title),
    }
}

fn clean_name(raw: &str) -> Option<String> {
    let without_parens = PARENTHETICAL_PATTERN.replace_all(raw, "");
    let mut name = without_parens.trim();
    if let Some(m) = TRAILING_DURATION_PATTERN.find(name) {
        // the match may include one leading non-digit char
        let cut = name[m.start()..]
            .find(|c: char| c.is_ascii_digit())
            .map(|offset| m.start() + offset)
            .unwrap_or(m.start());
        name = name[..cut].trim_end();
    }
    let name = name.trim_matches(|c: char| c == '-' || c == '|' || c == '@' || c.is_whitespace());
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn pet_name(title: &str) -> Option<String> {
    PET_NAME_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|name| !name.is_empty())
}
