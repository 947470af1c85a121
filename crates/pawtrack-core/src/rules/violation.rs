//! Rule violation types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of workload rule that was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationType {
    MaxVisitsDay,
    MaxHoursDay,
    MaxHoursWeek,
    ConsecutiveBusyDays,
    WeekendOverwork,
    MinDaysOffWeek,
}

impl ViolationType {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationType::MaxVisitsDay => "max-visits-day",
            ViolationType::MaxHoursDay => "max-hours-day",
            ViolationType::MaxHoursWeek => "max-hours-week",
            ViolationType::ConsecutiveBusyDays => "consecutive-busy-days",
            ViolationType::WeekendOverwork => "weekend-overwork",
            ViolationType::MinDaysOffWeek => "min-days-off-week",
        }
    }
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Warning, or critical when `metric` exceeds `threshold` by more than `margin`.
    pub fn escalate(metric: f64, threshold: f64, margin: f64) -> Self {
        if metric - threshold > margin {
            Severity::Critical
        } else {
            Severity::Warning
        }
    }
}

/// A single broken rule. Recomputed on every evaluation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleViolation {
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Observed value (visits, hours or days)
    pub metric: f64,
    /// Configured limit the metric was compared against
    pub threshold: f64,
    pub date: Option<NaiveDate>,
    pub recommendation: Option<String>,
}

impl RuleViolation {
    pub fn new(
        violation_type: ViolationType,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        metric: f64,
        threshold: f64,
    ) -> Self {
        Self {
            violation_type,
            severity,
            title: title.into(),
            description: description.into(),
            metric,
            threshold,
            date: None,
            recommendation: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}
