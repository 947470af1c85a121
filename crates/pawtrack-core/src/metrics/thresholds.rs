//! Workload thresholds and the levels derived from them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Aggregation period a threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl std::str::FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Period::Daily),
            "weekly" | "week" => Ok(Period::Weekly),
            "monthly" | "month" => Ok(Period::Monthly),
            other => Err(ValidationError::InvalidValue {
                field: "period".into(),
                message: format!("unknown period '{other}', expected daily/weekly/monthly"),
            }),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        })
    }
}

/// Discrete workload tier, ordered from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadLevel {
    Comfortable,
    Busy,
    High,
    Burnout,
}

impl WorkloadLevel {
    /// Busy or heavier; used for streak tracking.
    pub fn is_busy(self) -> bool {
        self >= WorkloadLevel::Busy
    }
}

/// Upper bounds (hours, inclusive) of the comfortable, busy and high buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub comfortable: f64,
    pub busy: f64,
    pub high: f64,
}

impl ThresholdSet {
    pub const fn new(comfortable: f64, busy: f64, high: f64) -> Self {
        Self { comfortable, busy, high }
    }

    /// Largest bucket not exceeded by `hours`; lower bounds are inclusive.
    pub fn level_for(&self, hours: f64) -> WorkloadLevel {
        if hours <= self.comfortable {
            WorkloadLevel::Comfortable
        } else if hours <= self.busy {
            WorkloadLevel::Busy
        } else if hours <= self.high {
            WorkloadLevel::High
        } else {
            WorkloadLevel::Burnout
        }
    }

    fn validate(&self, period: Period) -> Result<(), ValidationError> {
        let ordered = self.comfortable.is_finite()
            && self.high.is_finite()
            && self.comfortable >= 0.0
            && self.comfortable < self.busy
            && self.busy < self.high;
        if ordered {
            Ok(())
        } else {
            Err(ValidationError::InvalidThresholds {
                period: period.to_string(),
                message: format!(
                    "expected 0 <= comfortable < busy < high, got {} / {} / {}",
                    self.comfortable, self.busy, self.high
                ),
            })
        }
    }
}

/// Per-period threshold triples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadThresholds {
    #[serde(default = "default_daily")]
    pub daily: ThresholdSet,
    #[serde(default = "default_weekly")]
    pub weekly: ThresholdSet,
    #[serde(default = "default_monthly")]
    pub monthly: ThresholdSet,
}

fn default_daily() -> ThresholdSet {
    ThresholdSet::new(6.0, 8.0, 10.0)
}
fn default_weekly() -> ThresholdSet {
    ThresholdSet::new(30.0, 40.0, 50.0)
}
fn default_monthly() -> ThresholdSet {
    ThresholdSet::new(120.0, 160.0, 200.0)
}

impl Default for WorkloadThresholds {
    fn default() -> Self {
        Self {
            daily: default_daily(),
            weekly: default_weekly(),
            monthly: default_monthly(),
        }
    }
}

impl WorkloadThresholds {
    pub fn for_period(&self, period: Period) -> &ThresholdSet {
        match period {
            Period::Daily => &self.daily,
            Period::Weekly => &self.weekly,
            Period::Monthly => &self.monthly,
        }
    }

    /// Check the `comfortable < busy < high` ordering for every period.
    ///
    /// The analytics functions assume this holds; callers validate settings
    /// before passing them in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.daily.validate(Period::Daily)?;
        self.weekly.validate(Period::Weekly)?;
        self.monthly.validate(Period::Monthly)
    }
}

/// Workload level for `hours` aggregated over `period`.
pub fn workload_level(hours: f64, period: Period, thresholds: &WorkloadThresholds) -> WorkloadLevel {
    thresholds.for_period(period).level_for(hours)
}
