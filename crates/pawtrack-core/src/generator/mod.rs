//! Multi-event booking generator.
//!
//! Expands one booking (a client, a date range and a visit pattern) into
//! concrete calendar events, then checks those candidates against what is
//! already on the calendar. Generated events are not persisted here; the
//! caller turns accepted ones into [`RawEvent`]s.

mod booking;
mod conflict;
mod template;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::event::{RawEvent, ServiceType, TimeSpan};
use crate::interval::{is_weekend, DateRange};

pub use booking::{
    parse_time, validate_config, validate_templates, BookingType, DropinConfig, MultiEventConfig,
    OvernightConfig, VisitSlot,
};
pub use conflict::{conflict_report, detect_conflicts, Conflict, ConflictingEvent};
pub use template::{Template, TemplateSource};

/// A candidate event produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl GeneratedEvent {
    /// Accept the candidate onto `calendar_id` with a fresh id.
    pub fn into_raw_event(self, calendar_id: impl Into<String>) -> RawEvent {
        RawEvent {
            id: Uuid::new_v4().to_string(),
            calendar_id: calendar_id.into(),
            title: self.title,
            start: self.start,
            end: self.end,
            location: self.location,
            all_day: false,
        }
    }
}

impl TimeSpan for GeneratedEvent {
    fn start(&self) -> NaiveDateTime {
        self.start
    }
    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Expand `config` into events, failing with every validation problem found.
pub fn generate_events<T: TemplateSource + ?Sized>(
    config: &MultiEventConfig,
    templates: &T,
) -> Result<Vec<GeneratedEvent>> {
    let mut errors = validate_config(config);
    errors.extend(validate_templates(config, templates));
    if !errors.is_empty() {
        return Err(ValidationError::InvalidBooking { errors }.into());
    }

    let range = DateRange::new(config.start_date, config.end_date)?;
    let events = match config.booking_type {
        BookingType::DailyVisits => daily_visits(config, &range, templates)?,
        BookingType::OvernightStay => overnight_stay(config, &range, templates)?,
    };

    tracing::debug!(
        client = %config.client_name,
        range = %range,
        count = events.len(),
        "generated booking events"
    );
    Ok(events)
}

fn daily_visits<T: TemplateSource + ?Sized>(
    config: &MultiEventConfig,
    range: &DateRange,
    templates: &T,
) -> Result<Vec<GeneratedEvent>> {
    let mut events = Vec::new();
    for day in range.days() {
        let slots = if is_weekend(day) {
            config.weekend_slots()
        } else {
            config.visits.as_slice()
        };
        for slot in slots {
            let template = templates.template(&slot.template_id).ok_or_else(|| {
                ValidationError::InvalidBooking {
                    errors: vec![format!("Unknown template '{}'", slot.template_id)],
                }
            })?;
            let duration = effective_duration(slot.duration_minutes, template);
            let start = day.and_time(parse_time(&slot.time)?);
            events.push(candidate(config, template, start, duration));
        }
    }
    Ok(events)
}

fn overnight_stay<T: TemplateSource + ?Sized>(
    config: &MultiEventConfig,
    range: &DateRange,
    templates: &T,
) -> Result<Vec<GeneratedEvent>> {
    let mut events = Vec::new();

    if let Some(overnight) = &config.overnight_config {
        let template = resolve(templates, overnight.template_id.as_deref(), ServiceType::Overnight);
        let start = config.start_date.and_time(parse_time(&overnight.arrival_time)?);
        let end = config.end_date.and_time(parse_time(&overnight.departure_time)?);
        events.push(GeneratedEvent {
            title: title(&template, config),
            start,
            end,
            template_id: Some(template.id.clone()),
            location: location(config),
        });
    }

    if let Some(dropin) = &config.dropin_config {
        let template = resolve(templates, dropin.template_id.as_deref(), ServiceType::DropIn);
        let time = parse_time(&dropin.time)?;
        let duration = effective_duration(dropin.duration_minutes, &template);
        events.extend(range.days().map(|day| candidate(config, &template, day.and_time(time), duration)));
    }

    Ok(events)
}

/// Template by id, else the first of `service_type`, else the built-in one.
fn resolve<T: TemplateSource + ?Sized>(templates: &T, id: Option<&str>, service_type: ServiceType) -> Template {
    id.and_then(|id| templates.template(id))
        .or_else(|| templates.by_service(service_type))
        .cloned()
        .unwrap_or_else(|| builtin(service_type))
}

fn builtin(service_type: ServiceType) -> Template {
    Template::defaults()
        .into_iter()
        .find(|t| t.service_type == service_type)
        .unwrap_or_else(|| {
            Template::new(
                service_type.as_str(),
                service_type.as_str(),
                service_type,
                service_type.default_duration_minutes(),
            )
        })
}

fn effective_duration(requested: u32, template: &Template) -> u32 {
    if requested == 0 {
        template.duration_minutes
    } else {
        requested
    }
}

fn candidate(config: &MultiEventConfig, template: &Template, start: NaiveDateTime, minutes: u32) -> GeneratedEvent {
    GeneratedEvent {
        title: title(template, config),
        start,
        end: start + Duration::minutes(i64::from(minutes)),
        template_id: Some(template.id.clone()),
        location: location(config),
    }
}

fn title(template: &Template, config: &MultiEventConfig) -> String {
    format!("{} - {}", template.name, config.client_name.trim())
}

fn location(config: &MultiEventConfig) -> Option<String> {
    let location = config.location.trim();
    (!location.is_empty()).then(|| location.to_string())
}
