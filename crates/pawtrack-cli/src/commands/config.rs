use clap::Subcommand;
use pawtrack_core::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a settings value
    Get {
        /// Dot-separated key (e.g. "rules.max_visits_per_day", "thresholds.daily.busy")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Dot-separated key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings
    List,
    /// Reset settings to defaults
    Reset,
    /// Print the settings file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let settings = Settings::load()?;
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.set(&key, &value)?;
            settings.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let settings = Settings::load()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::Reset => {
            Settings::default().save()?;
            println!("settings reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", Settings::path()?.display());
        }
    }
    Ok(())
}
