//! # Pawtrack Core Library
//!
//! Calendar analytics for a solo pet-sitting business. Events come in from
//! an external calendar; this library decides which ones are paid work,
//! measures how much time they take, rolls that up into workload levels,
//! flags schedules that break the sitter's own limits and expands multi-day
//! bookings into individual visits.
//!
//! ## Architecture
//!
//! - **Classifier**: title-pattern rules splitting work from personal events
//! - **Interval**: range-clamped durations with the per-day overnight cap
//! - **Metrics**: visit/hour/client aggregation and workload levels
//! - **Rules**: workload limit checks and burnout risk scoring
//! - **Generator**: booking expansion and conflict detection
//! - **Storage**: TOML settings (thresholds, rules, templates)
//!
//! Everything except [`Settings`] I/O is a pure function over in-memory data.
//!
//! ## Key Components
//!
//! - [`classify`]: derive work/overnight/client/service fields from a [`RawEvent`]
//! - [`aggregate`]: visits, hours and unique clients over a [`DateRange`]
//! - [`RulesEngine`]: violations and [`BurnoutRisk`] for a range
//! - [`generate_events`]: concrete visits from a [`MultiEventConfig`]

pub mod classifier;
pub mod error;
pub mod event;
pub mod generator;
pub mod interval;
pub mod metrics;
pub mod rules;
pub mod storage;

pub use classifier::{classify, classify_all, extract_client_name, is_work_title, Verdict, WorkSignals};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use event::{ClassifiedEvent, RawEvent, ServiceInfo, ServiceType, TimeSpan};
pub use generator::{
    conflict_report, detect_conflicts, generate_events, validate_config, validate_templates, BookingType,
    Conflict, GeneratedEvent, MultiEventConfig, Template, TemplateSource, VisitSlot,
};
pub use interval::{hours_in_range, minutes_in_range, DateRange};
pub use metrics::{
    aggregate, daily_metrics, period_report, workload_level, DailyMetric, Period, PeriodReport, ThresholdSet,
    WorkloadLevel, WorkloadSummary, WorkloadThresholds,
};
pub use rules::{BurnoutRisk, RiskLevel, RuleViolation, RulesEngine, Severity, ViolationType, WorkloadRules};
pub use storage::Settings;
