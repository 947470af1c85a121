mod settings;

pub use settings::{Settings, MAX_TRAVEL_MINUTES_PER_VISIT};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/pawtrack[-dev]/` based on PAWTRACK_ENV.
///
/// Set PAWTRACK_ENV=dev to use the development directory, or
/// PAWTRACK_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("PAWTRACK_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("PAWTRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pawtrack-dev")
            } else {
                base_dir.join("pawtrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirectoryUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
