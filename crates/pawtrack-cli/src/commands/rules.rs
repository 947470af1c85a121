use std::path::PathBuf;

use clap::Subcommand;
use pawtrack_core::{classify, RawEvent, RulesEngine, Settings};

use super::{load_events, print_json, read_json, RangeArgs};

#[derive(Subcommand)]
pub enum RulesAction {
    /// List rule violations in a range
    Check {
        /// JSON file holding an array of events
        events: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Burnout risk score for a range
    Risk {
        /// JSON file holding an array of events
        events: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Day-level violations a new event would cause
    WouldViolate {
        /// JSON file holding an array of existing events
        events: PathBuf,
        /// JSON file holding the candidate event
        candidate: PathBuf,
    },
}

pub fn run(action: RulesAction) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    let engine = RulesEngine::new(settings.rules, settings.thresholds);

    match action {
        RulesAction::Check { events, range } => {
            let range = range.range()?;
            let events = load_events(&events)?;
            print_json(&engine.evaluate(&events, &range))
        }
        RulesAction::Risk { events, range } => {
            let range = range.range()?;
            let events = load_events(&events)?;
            print_json(&engine.burnout_risk(&events, &range))
        }
        RulesAction::WouldViolate { events, candidate } => {
            let existing = load_events(&events)?;
            let candidate: RawEvent = read_json(&candidate)?;
            print_json(&engine.would_violate(&existing, &classify(&candidate)))
        }
    }
}
