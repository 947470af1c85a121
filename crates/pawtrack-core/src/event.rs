//! Calendar event types.
//!
//! A [`RawEvent`] is what the calendar provider hands us. A
//! [`ClassifiedEvent`] carries the fields derived from the title and span;
//! those are always recomputed by the classifier and never read back from
//! storage.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Anything occupying a `[start, end)` span of local wall-clock time.
pub trait TimeSpan {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;

    /// Length of the span in minutes, never negative.
    fn duration_minutes(&self) -> i64 {
        (self.end() - self.start()).num_minutes().max(0)
    }
}

/// Event as fetched from the external calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    #[serde(default)]
    pub calendar_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl RawEvent {
    /// Create an event on the default calendar.
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            calendar_id: String::new(),
            title: title.into(),
            start,
            end,
            location: None,
            all_day: false,
        }
    }
}

impl TimeSpan for RawEvent {
    fn start(&self) -> NaiveDateTime {
        self.start
    }
    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Kind of pet-sitting service inferred from an event title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    DropIn,
    Walk,
    Overnight,
    Housesit,
    MeetGreet,
    NailTrim,
    Other,
}

impl ServiceType {
    /// Duration assumed when the title carries no explicit one.
    pub fn default_duration_minutes(self) -> u32 {
        match self {
            ServiceType::Housesit => 1440,
            ServiceType::Overnight => 720,
            ServiceType::NailTrim => 15,
            ServiceType::DropIn
            | ServiceType::Walk
            | ServiceType::MeetGreet
            | ServiceType::Other => 30,
        }
    }

    /// Housesits and overnights always keep their fixed duration.
    pub fn has_fixed_duration(self) -> bool {
        matches!(self, ServiceType::Housesit | ServiceType::Overnight)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::DropIn => "drop-in",
            ServiceType::Walk => "walk",
            ServiceType::Overnight => "overnight",
            ServiceType::Housesit => "housesit",
            ServiceType::MeetGreet => "meet-greet",
            ServiceType::NailTrim => "nail-trim",
            ServiceType::Other => "other",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service metadata extracted from a work event's title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service_type: ServiceType,
    pub duration_minutes: u32,
    pub pet_name: Option<String>,
}

/// Raw event plus derived classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEvent {
    #[serde(flatten)]
    pub raw: RawEvent,
    pub is_work_event: bool,
    pub is_overnight_event: bool,
    pub client_name: Option<String>,
    pub service_info: Option<ServiceInfo>,
}

impl ClassifiedEvent {
    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    /// Client name if present and non-blank.
    pub fn client(&self) -> Option<&str> {
        self.client_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl TimeSpan for ClassifiedEvent {
    fn start(&self) -> NaiveDateTime {
        self.raw.start
    }
    fn end(&self) -> NaiveDateTime {
        self.raw.end
    }
}
