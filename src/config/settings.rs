//! User settings for the budget planner
//!
//! Display preferences and the default sizes of the report views.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::PlannerPaths;
use crate::error::PlannerError;

/// User settings, stored as `config.json` in the base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Rows shown by the recent-transactions view
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Buckets shown by the monthly income/expense series
    #[serde(default = "default_series_months")]
    pub series_months: usize,

    /// Months covered by the trailing trend
    #[serde(default = "default_trend_span")]
    pub trend_span: usize,

    /// Rows shown by the top-expenses ranking
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_series_months() -> usize {
    6
}

fn default_trend_span() -> usize {
    12
}

fn default_top_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
            series_months: default_series_months(),
            trend_span: default_trend_span(),
            top_limit: default_top_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlannerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Reject a `date_format` chrono cannot render for a calendar date
    pub fn validate(&self) -> Result<(), PlannerError> {
        let mut rendered = String::new();
        write!(rendered, "{}", NaiveDate::default().format(&self.date_format)).map_err(|_| {
            PlannerError::Config(format!(
                "Invalid date_format '{}': use date specifiers such as %Y-%m-%d",
                self.date_format
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write settings file: {}", e)))?;

        debug!(path = %settings_path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.series_months, 6);
        assert_eq!(settings.trend_span, 12);
        assert_eq!(settings.top_limit, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            top_limit: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"trend_span": 24}"#).unwrap();
        assert_eq!(settings.trend_span, 24);
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.date_format, "%b %-d, %Y");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_unrenderable_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        for pattern in ["%H:%M", "%Q"] {
            let settings = Settings {
                date_format: pattern.to_string(),
                ..Settings::default()
            };
            assert!(matches!(settings.validate(), Err(PlannerError::Config(_))));

            settings.save(&paths).unwrap();
            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, PlannerError::Config(_)));
        }

        assert!(Settings::default().validate().is_ok());
    }
}
