//! Workload metrics over classified events.
//!
//! Rolls work events up into:
//! - **Summaries**: visits, hours and unique clients for a period
//! - **Daily metrics**: one [`DailyMetric`] per calendar day, for calendar views
//! - **Levels**: discrete [`WorkloadLevel`]s via configurable thresholds
//!
//! Personal events never contribute to any figure.

mod thresholds;

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::ClassifiedEvent;
use crate::interval::{daily_minutes, minutes_in_date_range, touches_day, DateRange};

pub use thresholds::{workload_level, Period, ThresholdSet, WorkloadLevel, WorkloadThresholds};

/// Aggregate workload for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// Work events starting inside the period
    pub total_visits: u32,
    /// Work hours overlapping the period (clamped, uncapped)
    pub total_hours: f64,
    /// Distinct client names among the counted visits
    pub unique_clients: u32,
}

/// Summary plus its level for a given period type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub range: DateRange,
    pub period: Period,
    #[serde(flatten)]
    pub summary: WorkloadSummary,
    pub level: WorkloadLevel,
}

/// Workload figures for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    /// Work minutes on this day, overnight events capped per day
    pub work_minutes: f64,
    /// Travel buffer for visits starting on this day
    pub travel_minutes: f64,
    pub total_minutes: f64,
    /// Work events touching this day
    pub event_count: u32,
    pub level: WorkloadLevel,
}

impl DailyMetric {
    pub fn work_hours(&self) -> f64 {
        self.work_minutes / 60.0
    }
}

fn work_events(events: &[ClassifiedEvent]) -> impl Iterator<Item = &ClassifiedEvent> {
    events.iter().filter(|e| e.is_work_event)
}

/// Visits, hours and unique clients for `range`.
pub fn aggregate(events: &[ClassifiedEvent], range: &DateRange) -> WorkloadSummary {
    let mut total_visits = 0u32;
    let mut total_minutes = 0.0;
    let mut clients: HashSet<String> = HashSet::new();

    for event in work_events(events) {
        total_minutes += minutes_in_date_range(event, range);

        if range.contains_instant(event.raw.start) {
            total_visits += 1;
            if let Some(client) = event.client() {
                clients.insert(client.to_string());
            }
        }
    }

    WorkloadSummary {
        total_visits,
        total_hours: total_minutes / 60.0,
        unique_clients: clients.len() as u32,
    }
}

/// Summary for `range` together with its level for `period`.
pub fn period_report(
    events: &[ClassifiedEvent],
    range: &DateRange,
    period: Period,
    thresholds: &WorkloadThresholds,
) -> PeriodReport {
    let summary = aggregate(events, range);
    let level = workload_level(summary.total_hours, period, thresholds);
    PeriodReport {
        range: *range,
        period,
        summary,
        level,
    }
}

/// Metric for a single day.
pub fn daily_metric(
    events: &[ClassifiedEvent],
    date: NaiveDate,
    thresholds: &WorkloadThresholds,
    travel_minutes_per_visit: u32,
) -> DailyMetric {
    let mut work_minutes = 0.0;
    let mut event_count = 0u32;
    let mut starting_here = 0u32;

    for event in work_events(events) {
        if !touches_day(event, date) {
            continue;
        }
        event_count += 1;
        work_minutes += daily_minutes(event, date);
        if event.raw.start.date() == date {
            starting_here += 1;
        }
    }

    let travel_minutes = f64::from(starting_here) * f64::from(travel_minutes_per_visit);

    DailyMetric {
        date,
        work_minutes,
        travel_minutes,
        total_minutes: work_minutes + travel_minutes,
        event_count,
        level: workload_level(work_minutes / 60.0, Period::Daily, thresholds),
    }
}

/// One metric per calendar day in `range`.
pub fn daily_metrics(
    events: &[ClassifiedEvent],
    range: &DateRange,
    thresholds: &WorkloadThresholds,
    travel_minutes_per_visit: u32,
) -> Vec<DailyMetric> {
    range
        .days()
        .map(|date| daily_metric(events, date, thresholds, travel_minutes_per_visit))
        .collect()
}
