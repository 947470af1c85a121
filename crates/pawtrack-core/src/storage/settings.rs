use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::generator::Template;
use crate::metrics::WorkloadThresholds;
use crate::rules::WorkloadRules;

/// Upper bound for `travel_minutes_per_visit`: one full day.
pub const MAX_TRAVEL_MINUTES_PER_VISIT: u32 = 24 * 60;

/// User settings persisted as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Travel buffer added per visit in daily metrics.
    #[serde(default)]
    pub travel_minutes_per_visit: u32,
    #[serde(default)]
    pub thresholds: WorkloadThresholds,
    #[serde(default)]
    pub rules: WorkloadRules,
    #[serde(default = "Template::defaults")]
    pub templates: Vec<Template>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            travel_minutes_per_visit: 0,
            thresholds: WorkloadThresholds::default(),
            rules: WorkloadRules::default(),
            templates: Template::defaults(),
        }
    }
}

impl Settings {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let unknown = || invalid("unknown settings key".to_string());

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(invalid("settings key is empty".to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => value
                        .parse::<bool>()
                        .map(serde_json::Value::Bool)
                        .map_err(|e| invalid(e.to_string()))?,
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            value
                                .parse::<f64>()
                                .ok()
                                .and_then(serde_json::Number::from_f64)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// `settings.toml` inside [`data_dir`].
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("settings.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed or fails
    /// validation, or if the defaults cannot be written.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                settings.validate()?;
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                settings.save_to(path)?;
                Ok(settings)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("using default settings: {err}");
            Self::default()
        })
    }

    /// Get a value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key, keeping the field's type.
    ///
    /// Changes are in memory only; call [`Settings::save`] to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not parse as
    /// the field's type, or the result breaks threshold ordering. `self` is
    /// left untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Settings = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Travel buffer cap plus threshold ordering and template sanity.
    pub fn validate(&self) -> Result<()> {
        if self.travel_minutes_per_visit > MAX_TRAVEL_MINUTES_PER_VISIT {
            return Err(ConfigError::InvalidValue {
                key: "travel_minutes_per_visit".to_string(),
                message: format!("must be at most {MAX_TRAVEL_MINUTES_PER_VISIT} minutes"),
            }
            .into());
        }
        self.thresholds.validate()?;
        for template in &self.templates {
            if template.id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "templates".to_string(),
                    message: "template id must not be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
