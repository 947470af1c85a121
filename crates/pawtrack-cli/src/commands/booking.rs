use std::path::{Path, PathBuf};

use clap::Subcommand;
use pawtrack_core::{
    conflict_report, generate_events, validate_config, validate_templates, MultiEventConfig, RawEvent,
    Settings, Template,
};

use super::{print_json, read_json};

#[derive(Subcommand)]
pub enum BookingAction {
    /// Check a booking configuration without generating events
    Validate {
        /// JSON file holding the booking configuration
        config: PathBuf,
        /// JSON file holding an array of templates (defaults to the settings' templates)
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Generate the booking's events and report conflicts
    Generate {
        /// JSON file holding the booking configuration
        config: PathBuf,
        /// JSON file holding an array of templates (defaults to the settings' templates)
        #[arg(long)]
        templates: Option<PathBuf>,
        /// JSON file holding existing events to check for conflicts
        #[arg(long)]
        existing: Option<PathBuf>,
    },
}

fn load_templates(path: Option<&Path>) -> Result<Vec<Template>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => read_json(path),
        None => Ok(Settings::load()?.templates),
    }
}

pub fn run(action: BookingAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BookingAction::Validate { config, templates } => {
            let config: MultiEventConfig = read_json(&config)?;
            let templates = load_templates(templates.as_deref())?;

            let mut errors = validate_config(&config);
            errors.extend(validate_templates(&config, &templates));
            print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "errors": errors,
            }))?;
            if !errors.is_empty() {
                std::process::exit(1);
            }
        }
        BookingAction::Generate {
            config,
            templates,
            existing,
        } => {
            let config: MultiEventConfig = read_json(&config)?;
            let templates = load_templates(templates.as_deref())?;
            let events = generate_events(&config, &templates)?;

            let existing: Vec<RawEvent> = match existing {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            let conflicts = conflict_report(&existing, &events);

            print_json(&serde_json::json!({
                "events": events,
                "conflicts": conflicts,
            }))?;
        }
    }
    Ok(())
}
