use std::path::PathBuf;

use clap::Args;
use pawtrack_core::classifier::verdict;

use super::{load_events, print_json};

#[derive(Args)]
pub struct ClassifyArgs {
    /// JSON file holding an array of events
    pub events: PathBuf,
    /// Include which pattern decided each event
    #[arg(long)]
    pub explain: bool,
}

pub fn run(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let events = load_events(&args.events)?;

    if args.explain {
        let explained: Vec<serde_json::Value> = events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "event": event,
                    "verdict": verdict(event.title()),
                })
            })
            .collect();
        print_json(&explained)
    } else {
        print_json(&events)
    }
}
