//! Multi-day booking configuration and its validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::template::TemplateSource;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingType {
    DailyVisits,
    OvernightStay,
}

/// One recurring visit: a template at a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitSlot {
    pub template_id: String,
    /// "HH:mm"
    pub time: String,
    /// 0 means "use the template's duration"
    #[serde(default)]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvernightConfig {
    #[serde(default)]
    pub template_id: Option<String>,
    /// "HH:mm" on the start date
    pub arrival_time: String,
    /// "HH:mm" on the end date
    pub departure_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropinConfig {
    #[serde(default)]
    pub template_id: Option<String>,
    /// "HH:mm"
    pub time: String,
    /// 0 means "use the template's duration"
    #[serde(default)]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiEventConfig {
    pub client_name: String,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub booking_type: BookingType,
    #[serde(default)]
    pub visits: Vec<VisitSlot>,
    #[serde(default)]
    pub weekend_visits: Option<Vec<VisitSlot>>,
    #[serde(default)]
    pub overnight_config: Option<OvernightConfig>,
    #[serde(default)]
    pub dropin_config: Option<DropinConfig>,
}

impl MultiEventConfig {
    /// Slots used on weekend days: weekend list when non-empty, else weekday list.
    pub fn weekend_slots(&self) -> &[VisitSlot] {
        match &self.weekend_visits {
            Some(slots) if !slots.is_empty() => slots,
            _ => &self.visits,
        }
    }
}

/// Parse "HH:mm" (24h).
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ValidationError::InvalidTime {
        value: value.to_string(),
    })
}

/// Human-readable problems with `config`; empty means valid.
pub fn validate_config(config: &MultiEventConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.client_name.trim().is_empty() {
        errors.push("Client name is required".to_string());
    }

    if config.start_date > config.end_date {
        errors.push(format!(
            "Start date ({}) must be on or before end date ({})",
            config.start_date, config.end_date
        ));
    }

    match config.booking_type {
        BookingType::DailyVisits => {
            if config.visits.is_empty() {
                errors.push("At least one visit slot is required".to_string());
            }
            let weekend = config.weekend_visits.iter().flatten();
            for slot in config.visits.iter().chain(weekend) {
                if let Err(err) = parse_time(&slot.time) {
                    errors.push(format!("Visit '{}': {err}", slot.template_id));
                }
            }
        }
        BookingType::OvernightStay => {
            if config.overnight_config.is_none() && config.dropin_config.is_none() {
                errors.push("An overnight or drop-in configuration is required".to_string());
            }
            if let Some(overnight) = &config.overnight_config {
                validate_overnight(config, overnight, &mut errors);
            }
            if let Some(dropin) = &config.dropin_config {
                if let Err(err) = parse_time(&dropin.time) {
                    errors.push(format!("Drop-in: {err}"));
                }
            }
        }
    }

    errors
}

fn validate_overnight(config: &MultiEventConfig, overnight: &OvernightConfig, errors: &mut Vec<String>) {
    let arrival = parse_time(&overnight.arrival_time);
    let departure = parse_time(&overnight.departure_time);
    match (arrival, departure) {
        (Ok(arrival), Ok(departure)) => {
            let start = config.start_date.and_time(arrival);
            let end = config.end_date.and_time(departure);
            if config.start_date <= config.end_date && end <= start {
                errors.push("Overnight departure must be after arrival".to_string());
            }
        }
        (arrival, departure) => {
            for err in [arrival.err(), departure.err()].into_iter().flatten() {
                errors.push(format!("Overnight: {err}"));
            }
        }
    }
}

/// Template ids referenced by `config` that the source does not know.
///
/// Overnight and drop-in configs without a template id are not checked;
/// generation resolves those by service type.
pub fn validate_templates<T: TemplateSource + ?Sized>(config: &MultiEventConfig, templates: &T) -> Vec<String> {
    let mut ids: Vec<&str> = Vec::new();
    match config.booking_type {
        BookingType::DailyVisits => {
            let weekend = config.weekend_visits.iter().flatten();
            ids.extend(config.visits.iter().chain(weekend).map(|s| s.template_id.as_str()));
        }
        BookingType::OvernightStay => {
            ids.extend(config.overnight_config.as_ref().and_then(|o| o.template_id.as_deref()));
            ids.extend(config.dropin_config.as_ref().and_then(|d| d.template_id.as_deref()));
        }
    }

    let mut errors = Vec::new();
    for id in ids {
        if templates.template(id).is_none() {
            let message = format!("Unknown template '{id}'");
            if !errors.contains(&message) {
                errors.push(message);
            }
        }
    }
    errors
}
