use std::path::PathBuf;

use clap::Subcommand;
use pawtrack_core::{daily_metrics, period_report, workload_level, DateRange, Period, Settings};

use super::{load_events, print_json, RangeArgs};

#[derive(Subcommand)]
pub enum MetricsAction {
    /// Visits, hours, unique clients and level for a range
    Summary {
        /// JSON file holding an array of events
        events: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        /// Threshold period (inferred from the range length if omitted)
        #[arg(long)]
        period: Option<Period>,
    },
    /// One metric per day in a range
    Daily {
        /// JSON file holding an array of events
        events: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Workload level for a number of hours
    Level {
        hours: f64,
        #[arg(long, default_value = "daily")]
        period: Period,
    },
}

/// One day reads as daily, up to a week as weekly, anything longer as monthly.
fn infer_period(range: &DateRange) -> Period {
    match range.num_days() {
        1 => Period::Daily,
        2..=7 => Period::Weekly,
        _ => Period::Monthly,
    }
}

pub fn run(action: MetricsAction) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;

    match action {
        MetricsAction::Summary { events, range, period } => {
            let range = range.range()?;
            let events = load_events(&events)?;
            let period = period.unwrap_or_else(|| infer_period(&range));
            print_json(&period_report(&events, &range, period, &settings.thresholds))
        }
        MetricsAction::Daily { events, range } => {
            let range = range.range()?;
            let events = load_events(&events)?;
            let days = daily_metrics(
                &events,
                &range,
                &settings.thresholds,
                settings.travel_minutes_per_visit,
            );
            print_json(&days)
        }
        MetricsAction::Level { hours, period } => {
            let level = workload_level(hours, period, &settings.thresholds);
            print_json(&serde_json::json!({
                "hours": hours,
                "period": period,
                "level": level,
            }))
        }
    }
}
