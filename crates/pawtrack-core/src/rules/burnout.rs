//! Burnout risk scoring.
//!
//! Additive, capped at 100. This is an advisory heuristic for the sitter's
//! own planning, not a medical or HR metric.

use serde::{Deserialize, Serialize};

use super::violation::{RuleViolation, Severity, ViolationType};
use crate::metrics::WorkloadThresholds;

const CRITICAL_POINTS: u32 = 20;
const WARNING_POINTS: u32 = 10;
/// Only this many warnings earn points; more add a factor only.
const SCORED_WARNINGS: usize = 2;
const WEEKLY_HIGH_POINTS: u32 = 25;
const WEEKLY_BUSY_POINTS: u32 = 15;
const STREAK_POINTS: u32 = 15;
const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskLevel::Critical,
            50..=69 => RiskLevel::High,
            30..=49 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutRisk {
    pub level: RiskLevel,
    /// 0 to 100
    pub score: u8,
    pub factors: Vec<String>,
    pub violations: Vec<RuleViolation>,
}

impl BurnoutRisk {
    /// No violations, no pressure.
    pub fn none() -> Self {
        Self {
            level: RiskLevel::Low,
            score: 0,
            factors: Vec::new(),
            violations: Vec::new(),
        }
    }
}

/// Score a set of violations plus the heaviest week's hours.
pub fn score_burnout(
    violations: Vec<RuleViolation>,
    peak_weekly_hours: f64,
    thresholds: &WorkloadThresholds,
) -> BurnoutRisk {
    let mut score = 0u32;
    let mut factors = Vec::new();

    let critical = violations.iter().filter(|v| v.severity == Severity::Critical).count();
    let warnings = violations.iter().filter(|v| v.severity == Severity::Warning).count();

    if critical > 0 {
        score += CRITICAL_POINTS * critical as u32;
        factors.push(format!("{critical} critical workload violation(s)"));
    }

    if warnings > 0 {
        score += WARNING_POINTS * warnings.min(SCORED_WARNINGS) as u32;
        factors.push(format!("{warnings} workload warning(s)"));
        if warnings > SCORED_WARNINGS {
            factors.push("Multiple workload warnings".to_string());
        }
    }

    if peak_weekly_hours > thresholds.weekly.high {
        score += WEEKLY_HIGH_POINTS;
        factors.push(format!(
            "Weekly hours ({peak_weekly_hours:.1}) above high threshold ({})",
            thresholds.weekly.high
        ));
    } else if peak_weekly_hours > thresholds.weekly.busy {
        score += WEEKLY_BUSY_POINTS;
        factors.push(format!(
            "Weekly hours ({peak_weekly_hours:.1}) above busy threshold ({})",
            thresholds.weekly.busy
        ));
    }

    if violations
        .iter()
        .any(|v| v.violation_type == ViolationType::ConsecutiveBusyDays)
    {
        score += STREAK_POINTS;
        factors.push("Too many consecutive busy days".to_string());
    }

    let score = score.min(MAX_SCORE) as u8;

    BurnoutRisk {
        level: RiskLevel::from_score(score),
        score,
        factors,
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(kind: ViolationType, severity: Severity) -> RuleViolation {
        RuleViolation::new(kind, severity, "t", "d", 1.0, 0.0)
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let risk = score_burnout(Vec::new(), 0.0, &WorkloadThresholds::default());
        assert_eq!(risk, BurnoutRisk::none());
    }

    #[test]
    fn test_warnings_beyond_two_add_factor_only() {
        let thresholds = WorkloadThresholds::default();
        let two = vec![
            violation(ViolationType::MaxVisitsDay, Severity::Warning),
            violation(ViolationType::MaxHoursDay, Severity::Warning),
        ];
        let mut five = two.clone();
        for _ in 0..3 {
            five.push(violation(ViolationType::MaxHoursDay, Severity::Warning));
        }

        let risk_two = score_burnout(two, 0.0, &thresholds);
        let risk_five = score_burnout(five, 0.0, &thresholds);
        assert_eq!(risk_two.score, 20);
        assert_eq!(risk_five.score, 20);
        assert!(risk_five.factors.iter().any(|f| f == "Multiple workload warnings"));
        assert!(!risk_two.factors.iter().any(|f| f == "Multiple workload warnings"));
    }

    #[test]
    fn test_info_violations_do_not_score() {
        let risk = score_burnout(
            vec![violation(ViolationType::WeekendOverwork, Severity::Info)],
            0.0,
            &WorkloadThresholds::default(),
        );
        assert_eq!(risk.score, 0);
        assert_eq!(risk.violations.len(), 1);
    }

    #[test]
    fn test_weekly_pressure_uses_highest_bucket_only() {
        let thresholds = WorkloadThresholds::default();
        assert_eq!(score_burnout(Vec::new(), 45.0, &thresholds).score, 15);
        assert_eq!(score_burnout(Vec::new(), 55.0, &thresholds).score, 25);
        assert_eq!(score_burnout(Vec::new(), 40.0, &thresholds).score, 0);
    }

    #[test]
    fn test_streak_critical_and_pressure_combine() {
        let thresholds = WorkloadThresholds::default();
        let risk = score_burnout(
            vec![
                violation(ViolationType::ConsecutiveBusyDays, Severity::Critical),
                violation(ViolationType::MaxHoursWeek, Severity::Critical),
            ],
            60.0,
            &thresholds,
        );
        // 20 + 20 + 25 + 15
        assert_eq!(risk.score, 80);
        assert_eq!(risk.level, RiskLevel::Critical);
    }

    #[test]
    fn test_score_is_capped() {
        let violations = (0..8)
            .map(|_| violation(ViolationType::MaxHoursDay, Severity::Critical))
            .collect();
        let risk = score_burnout(violations, 70.0, &WorkloadThresholds::default());
        assert_eq!(risk.score, 100);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Critical);
    }
}
