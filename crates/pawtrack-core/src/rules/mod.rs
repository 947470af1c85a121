//! Workload rules engine.
//!
//! Evaluates classified events over a date range against configurable limits:
//! - **Day checks**: visits per day, hours per day, weekend overwork
//! - **Week checks**: hours per calendar week, minimum days off
//! - **Streaks**: consecutive busy days
//!
//! and folds the resulting violations into a [`BurnoutRisk`] score. The engine
//! keeps no state between calls; callers that want a "last result" cache hold
//! it themselves.

mod burnout;
mod violation;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::ClassifiedEvent;
use crate::interval::{days_spanned, is_weekend, DateRange};
use crate::metrics::{aggregate, daily_metric, daily_metrics, DailyMetric, WorkloadThresholds};

pub use burnout::{score_burnout, BurnoutRisk, RiskLevel};
pub use violation::{RuleViolation, Severity, ViolationType};

/// Visits over the daily limit by more than this are critical.
const VISITS_CRITICAL_MARGIN: f64 = 2.0;
/// Hours over the daily limit by more than this are critical.
const DAY_HOURS_CRITICAL_MARGIN: f64 = 2.0;
/// Hours over the weekly limit by more than this are critical.
const WEEK_HOURS_CRITICAL_MARGIN: f64 = 10.0;
/// Streak days over the limit by more than this are critical.
const STREAK_CRITICAL_MARGIN: f64 = 2.0;
/// Weekend days above this many work hours raise an advisory.
pub const WEEKEND_OVERWORK_HOURS: f64 = 4.0;

/// User-configurable workload limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadRules {
    #[serde(default = "default_max_visits_per_day")]
    pub max_visits_per_day: u32,
    #[serde(default = "default_max_hours_per_day")]
    pub max_hours_per_day: f64,
    #[serde(default = "default_max_hours_per_week")]
    pub max_hours_per_week: f64,
    #[serde(default = "default_max_consecutive_busy_days")]
    pub max_consecutive_busy_days: u32,
    #[serde(default = "default_true")]
    pub weekend_overwork_alerts: bool,
    /// Work-free days required per full calendar week; 0 disables the check.
    #[serde(default = "default_min_days_off_per_week")]
    pub min_days_off_per_week: u32,
}

fn default_max_visits_per_day() -> u32 {
    8
}
fn default_max_hours_per_day() -> f64 {
    10.0
}
fn default_max_hours_per_week() -> f64 {
    50.0
}
fn default_max_consecutive_busy_days() -> u32 {
    6
}
fn default_true() -> bool {
    true
}
fn default_min_days_off_per_week() -> u32 {
    1
}

impl Default for WorkloadRules {
    fn default() -> Self {
        Self {
            max_visits_per_day: default_max_visits_per_day(),
            max_hours_per_day: default_max_hours_per_day(),
            max_hours_per_week: default_max_hours_per_week(),
            max_consecutive_busy_days: default_max_consecutive_busy_days(),
            weekend_overwork_alerts: true,
            min_days_off_per_week: default_min_days_off_per_week(),
        }
    }
}

/// Rules and thresholds bundled for repeated evaluation.
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    rules: WorkloadRules,
    thresholds: WorkloadThresholds,
}

impl RulesEngine {
    pub fn new(rules: WorkloadRules, thresholds: WorkloadThresholds) -> Self {
        Self { rules, thresholds }
    }

    pub fn rules(&self) -> &WorkloadRules {
        &self.rules
    }

    pub fn thresholds(&self) -> &WorkloadThresholds {
        &self.thresholds
    }

    pub fn evaluate(&self, events: &[ClassifiedEvent], range: &DateRange) -> Vec<RuleViolation> {
        evaluate(events, range, &self.rules, &self.thresholds)
    }

    pub fn burnout_risk(&self, events: &[ClassifiedEvent], range: &DateRange) -> BurnoutRisk {
        burnout_risk(events, range, &self.rules, &self.thresholds)
    }

    pub fn would_violate(&self, existing: &[ClassifiedEvent], candidate: &ClassifiedEvent) -> Vec<RuleViolation> {
        would_violate_rules(existing, candidate, &self.rules, &self.thresholds)
    }
}

/// Run every check over `range`.
///
/// Never fails; empty input yields no violations.
pub fn evaluate(
    events: &[ClassifiedEvent],
    range: &DateRange,
    rules: &WorkloadRules,
    thresholds: &WorkloadThresholds,
) -> Vec<RuleViolation> {
    let days = daily_metrics(events, range, thresholds, 0);
    let mut violations = Vec::new();

    for day in &days {
        check_day(day, rules, &mut violations);
    }
    for week in range.weeks() {
        check_week_hours(events, &week, rules, &mut violations);
    }
    check_busy_streaks(&days, rules, &mut violations);
    check_days_off(&days, range, rules, &mut violations);

    tracing::debug!(
        range = %range,
        events = events.len(),
        violations = violations.len(),
        "evaluated workload rules"
    );

    violations
}

/// Day-level checks for `existing + [candidate]` on the days the candidate spans.
///
/// Week and streak checks are not re-run; this is a pre-booking guard.
pub fn would_violate_rules(
    existing: &[ClassifiedEvent],
    candidate: &ClassifiedEvent,
    rules: &WorkloadRules,
    thresholds: &WorkloadThresholds,
) -> Vec<RuleViolation> {
    let mut combined = existing.to_vec();
    combined.push(candidate.clone());

    let mut violations = Vec::new();
    for date in days_spanned(candidate) {
        let day = daily_metric(&combined, date, thresholds, 0);
        check_day(&day, rules, &mut violations);
    }
    violations
}

/// Violations plus burnout score for `range`.
pub fn burnout_risk(
    events: &[ClassifiedEvent],
    range: &DateRange,
    rules: &WorkloadRules,
    thresholds: &WorkloadThresholds,
) -> BurnoutRisk {
    let violations = evaluate(events, range, rules, thresholds);
    let peak_weekly_hours = range
        .weeks()
        .iter()
        .map(|week| aggregate(events, week).total_hours)
        .fold(0.0, f64::max);
    let risk = score_burnout(violations, peak_weekly_hours, thresholds);

    tracing::debug!(score = risk.score, level = ?risk.level, "computed burnout risk");
    risk
}

fn check_day(day: &DailyMetric, rules: &WorkloadRules, out: &mut Vec<RuleViolation>) {
    let visits = f64::from(day.event_count);
    let max_visits = f64::from(rules.max_visits_per_day);
    if visits > max_visits {
        out.push(
            RuleViolation::new(
                ViolationType::MaxVisitsDay,
                Severity::escalate(visits, max_visits, VISITS_CRITICAL_MARGIN),
                "Too many visits",
                format!(
                    "{} visits on {} (limit {})",
                    day.event_count, day.date, rules.max_visits_per_day
                ),
                visits,
                max_visits,
            )
            .on(day.date)
            .with_recommendation("Move a visit to a lighter day or hand it to a backup sitter"),
        );
    }

    let hours = day.work_hours();
    if hours > rules.max_hours_per_day {
        out.push(
            RuleViolation::new(
                ViolationType::MaxHoursDay,
                Severity::escalate(hours, rules.max_hours_per_day, DAY_HOURS_CRITICAL_MARGIN),
                "Long work day",
                format!(
                    "{hours:.1} hours of work on {} (limit {})",
                    day.date, rules.max_hours_per_day
                ),
                hours,
                rules.max_hours_per_day,
            )
            .on(day.date)
            .with_recommendation("Shorten or reschedule visits to keep the day within your limit"),
        );
    }

    if rules.weekend_overwork_alerts && is_weekend(day.date) && hours > WEEKEND_OVERWORK_HOURS {
        out.push(
            RuleViolation::new(
                ViolationType::WeekendOverwork,
                Severity::Info,
                "Weekend overwork",
                format!("{hours:.1} hours of work on {} {}", day.date.weekday(), day.date),
                hours,
                WEEKEND_OVERWORK_HOURS,
            )
            .on(day.date)
            .with_recommendation("Keep some weekend time for rest"),
        );
    }
}

fn check_week_hours(
    events: &[ClassifiedEvent],
    week: &DateRange,
    rules: &WorkloadRules,
    out: &mut Vec<RuleViolation>,
) {
    let hours = aggregate(events, week).total_hours;
    if hours > rules.max_hours_per_week {
        out.push(
            RuleViolation::new(
                ViolationType::MaxHoursWeek,
                Severity::escalate(hours, rules.max_hours_per_week, WEEK_HOURS_CRITICAL_MARGIN),
                "Heavy week",
                format!(
                    "{hours:.1} hours in the week of {} (limit {})",
                    week.start, rules.max_hours_per_week
                ),
                hours,
                rules.max_hours_per_week,
            )
            .on(week.start)
            .with_recommendation("Decline or reassign new bookings for this week"),
        );
    }
}

fn check_busy_streaks(days: &[DailyMetric], rules: &WorkloadRules, out: &mut Vec<RuleViolation>) {
    let mut streak = 0u32;
    let mut last_busy: Option<NaiveDate> = None;

    for day in days {
        if day.level.is_busy() {
            streak += 1;
            last_busy = Some(day.date);
        } else {
            close_streak(streak, last_busy, rules, out);
            streak = 0;
        }
    }
    // the streak still open at the end of the range counts too
    close_streak(streak, last_busy, rules, out);
}

fn close_streak(streak: u32, end: Option<NaiveDate>, rules: &WorkloadRules, out: &mut Vec<RuleViolation>) {
    if streak <= rules.max_consecutive_busy_days {
        return;
    }
    let Some(end) = end else { return };
    let metric = f64::from(streak);
    let threshold = f64::from(rules.max_consecutive_busy_days);
    out.push(
        RuleViolation::new(
            ViolationType::ConsecutiveBusyDays,
            Severity::escalate(metric, threshold, STREAK_CRITICAL_MARGIN),
            "Too many busy days in a row",
            format!(
                "{streak} consecutive busy days ending {end} (limit {})",
                rules.max_consecutive_busy_days
            ),
            metric,
            threshold,
        )
        .on(end)
        .with_recommendation("Schedule a light or free day to recover"),
    );
}

fn check_days_off(days: &[DailyMetric], range: &DateRange, rules: &WorkloadRules, out: &mut Vec<RuleViolation>) {
    if rules.min_days_off_per_week == 0 {
        return;
    }
    for week in range.weeks() {
        if week.start < range.start || week.end > range.end {
            continue;
        }
        let days_off = days
            .iter()
            .filter(|d| week.contains_date(d.date) && d.event_count == 0)
            .count() as u32;
        if days_off < rules.min_days_off_per_week {
            out.push(
                RuleViolation::new(
                    ViolationType::MinDaysOffWeek,
                    Severity::Warning,
                    "Missing day off",
                    format!(
                        "{days_off} day(s) off in the week of {} (minimum {})",
                        week.start, rules.min_days_off_per_week
                    ),
                    f64::from(days_off),
                    f64::from(rules.min_days_off_per_week),
                )
                .on(week.start)
                .with_recommendation("Block out a full day with no visits"),
            );
        }
    }
}
