// Layered export settings (file + environment overrides)

use crate::errors::SettingsError;
use crate::profile::{ExportProfile, DEFAULT_PROFILES};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Export engine settings. Profiles are keyed by record type name and
/// overlay the built-in defaults; an override replaces the whole profile
/// for that record type.
///
/// File and environment sources lowercase their keys, so the map is keyed
/// by lowercased record-type name and lookup is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    profiles: HashMap<String, ExportProfile>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            profiles: DEFAULT_PROFILES
                .iter()
                .map(|(record_type, profile)| (record_type.to_lowercase(), profile.clone()))
                .collect(),
        }
    }
}

impl ExportSettings {
    /// Load settings with layered precedence: defaults → file → env
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_path("config")
    }

    /// Load settings from a specific directory
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, SettingsError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("export.toml")).required(false))
            .add_source(
                Environment::with_prefix("COMMERCE_EXPORT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let loaded: ExportSettings = config.try_deserialize()?;

        let mut settings = ExportSettings::default();
        for (record_type, profile) in loaded.profiles {
            validate_profile(&record_type, &profile)?;
            debug!(record_type = %record_type, "Overriding export profile");
            settings.profiles.insert(record_type.to_lowercase(), profile);
        }

        Ok(settings)
    }

    /// The profile for a record type, falling back to an empty profile for
    /// types without one (everything exported under its own name).
    pub fn profile(&self, record_type: &str) -> ExportProfile {
        self.profiles
            .get(&record_type.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Replaces the whole profile for a record type.
    pub fn set_profile(&mut self, record_type: &str, profile: ExportProfile) {
        self.profiles.insert(record_type.to_lowercase(), profile);
    }
}

// A field cannot be both the target of a replacement and ignored; the
// coverage check would treat such a profile inconsistently.
fn validate_profile(record_type: &str, profile: &ExportProfile) -> Result<(), SettingsError> {
    for (column, field) in profile.replacements() {
        if profile.is_ignored(field) {
            return Err(SettingsError::InvalidProfile {
                record_type: record_type.to_string(),
                reason: format!("column '{column}' maps to ignored field '{field}'"),
            });
        }
    }
    Ok(())
}
