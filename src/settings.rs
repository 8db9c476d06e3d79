// Alert settings - threshold configuration with TOML persistence

use crate::Result;
use crate::certificates::AlertThresholds;
use crate::error::RadarError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Alert settings supplied by the configuration boundary
///
/// Validated before any classification uses the thresholds; the
/// classifier itself never checks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSettings {
    pub warning_days: i64,
    pub critical_days: i64,
    #[serde(default = "default_email_notifications")]
    pub email_notifications: bool,
}

fn default_email_notifications() -> bool {
    true
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            warning_days: 60,
            critical_days: 30,
            email_notifications: true,
        }
    }
}

impl AlertSettings {
    /// Load settings from a TOML file and validate them
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| RadarError::FileSystem {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        let settings: AlertSettings =
            toml::from_str(&contents).map_err(RadarError::SettingsParse)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).map_err(RadarError::SettingsEncode)?;

        fs::write(path.as_ref(), toml_str).map_err(|e| RadarError::FileSystem {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Check the threshold invariants
    ///
    /// Both thresholds must be at least one day and `critical_days`
    /// strictly below `warning_days`. The returned error names the
    /// offending field.
    pub fn validate(&self) -> std::result::Result<(), RadarError> {
        if self.warning_days < 1 {
            return Err(RadarError::Configuration {
                field: "warning_days",
                message: format!("must be a positive number of days, got {}", self.warning_days),
            });
        }

        if self.critical_days < 1 {
            return Err(RadarError::Configuration {
                field: "critical_days",
                message: format!(
                    "must be a positive number of days, got {}",
                    self.critical_days
                ),
            });
        }

        if self.critical_days >= self.warning_days {
            return Err(RadarError::Configuration {
                field: "critical_days",
                message: format!(
                    "must be less than warning_days ({}), got {}",
                    self.warning_days, self.critical_days
                ),
            });
        }

        Ok(())
    }

    /// The threshold pair consumed by the classifier
    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            warning_days: self.warning_days,
            critical_days: self.critical_days,
        }
    }
}
