pub mod booking;
pub mod classify;
pub mod config;
pub mod metrics;
pub mod rules;

use std::path::Path;

use clap::Args;
use pawtrack_core::{classify_all, ClassifiedEvent, DateRange, RawEvent};
use serde::de::DeserializeOwned;

/// Inclusive date range flags shared by range-based commands.
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,
    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,
}

impl RangeArgs {
    pub fn range(&self) -> Result<DateRange, Box<dyn std::error::Error>> {
        Ok(DateRange::parse(&self.from, &self.to)?)
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON in {}: {e}", path.display()).into())
}

/// Read a JSON array of raw events and classify them.
pub fn load_events(path: &Path) -> Result<Vec<ClassifiedEvent>, Box<dyn std::error::Error>> {
    let raw: Vec<RawEvent> = read_json(path)?;
    tracing::debug!(count = raw.len(), path = %path.display(), "loaded events");
    Ok(classify_all(&raw))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
