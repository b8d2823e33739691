use crate::error::{QuestError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the quest tracker
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Radius in meters within which a quest's question may be opened
    pub proximity_threshold_m: ConfigValue<f64>,
    /// Points awarded per correct answer
    pub award_points: ConfigValue<u32>,
    /// Optional GeoJSON quest catalog; the built-in set is used when unset
    pub quest_file: ConfigValue<Option<PathBuf>>,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            proximity_threshold_m: ConfigValue::new(25.0, ConfigSource::Default),
            award_points: ConfigValue::new(10, ConfigSource::Default),
            quest_file: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| QuestError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| QuestError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(threshold) = file_config.proximity_threshold_m {
            validate_threshold(threshold)?;
            self.proximity_threshold_m.update(threshold, ConfigSource::File);
        }

        if let Some(points) = file_config.award_points {
            self.award_points.update(points, ConfigSource::File);
        }

        if let Some(quest_file) = file_config.quest_file {
            self.quest_file.update(Some(quest_file), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEOQUEST_PROXIMITY_THRESHOLD_M
        if let Ok(threshold_str) = env::var("GEOQUEST_PROXIMITY_THRESHOLD_M") {
            match threshold_str.parse::<f64>().ok().filter(|t| t.is_finite() && *t > 0.0) {
                Some(threshold) => {
                    self.proximity_threshold_m.update(threshold, ConfigSource::Environment)
                }
                None => tracing::warn!(
                    "Invalid GEOQUEST_PROXIMITY_THRESHOLD_M value '{}': expected a positive number of meters",
                    threshold_str
                ),
            }
        }

        // GEOQUEST_AWARD_POINTS
        if let Ok(points_str) = env::var("GEOQUEST_AWARD_POINTS") {
            match points_str.parse::<u32>() {
                Ok(points) => self.award_points.update(points, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOQUEST_AWARD_POINTS value '{}': expected a non-negative integer",
                    points_str
                ),
            }
        }

        // GEOQUEST_QUEST_FILE
        if let Ok(quest_file) = env::var("GEOQUEST_QUEST_FILE") {
            self.quest_file.update(Some(PathBuf::from(quest_file)), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(threshold) = overrides.proximity_threshold_m {
            self.proximity_threshold_m.update(threshold, ConfigSource::Cli);
        }

        if let Some(points) = overrides.award_points {
            self.award_points.update(points, ConfigSource::Cli);
        }

        if let Some(quest_file) = overrides.quest_file {
            self.quest_file.update(Some(quest_file), ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "proximity_threshold_m".to_string(),
            (
                format!("{}", self.proximity_threshold_m.value),
                self.proximity_threshold_m.source,
            ),
        );

        map.insert(
            "award_points".to_string(),
            (format!("{}", self.award_points.value), self.award_points.source),
        );

        map.insert(
            "quest_file".to_string(),
            (
                self.quest_file
                    .value
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
                self.quest_file.source,
            ),
        );

        map
    }
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(QuestError::ConfigInvalid {
            key: "proximity_threshold_m".to_string(),
            reason: format!("expected a positive number of meters, got {}", threshold),
        });
    }
    Ok(())
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    proximity_threshold_m: Option<f64>,
    award_points: Option<u32>,
    quest_file: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub proximity_threshold_m: Option<f64>,
    pub award_points: Option<u32>,
    pub quest_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.proximity_threshold_m.value, 25.0);
        assert_eq!(config.proximity_threshold_m.source, ConfigSource::Default);
        assert_eq!(config.award_points.value, 10);
        assert_eq!(config.quest_file.value, None);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400); // Still CLI value
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
proximity_threshold_m = 50.0
award_points = 25
quest_file = "quests.geojson"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.proximity_threshold_m.value, 50.0);
        assert_eq!(config.proximity_threshold_m.source, ConfigSource::File);
        assert_eq!(config.award_points.value, 25);
        assert_eq!(config.quest_file.value, Some(PathBuf::from("quests.geojson")));
    }

    #[test]
    fn test_file_rejects_bad_threshold() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "proximity_threshold_m = -5.0").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());

        assert!(matches!(result, Err(QuestError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            proximity_threshold_m: Some(100.0),
            award_points: None,
            quest_file: Some(PathBuf::from("custom.geojson")),
        };

        config.update_from_cli(overrides);

        assert_eq!(config.proximity_threshold_m.value, 100.0);
        assert_eq!(config.proximity_threshold_m.source, ConfigSource::Cli);
        assert_eq!(config.quest_file.source, ConfigSource::Cli);
        // This should still be the default
        assert_eq!(config.award_points.value, 10);
        assert_eq!(config.award_points.source, ConfigSource::Default);
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("proximity_threshold_m"));
        assert!(map.contains_key("award_points"));
        assert!(map.contains_key("quest_file"));

        let (quest_file_value, quest_file_source) = &map["quest_file"];
        assert_eq!(quest_file_value, "(built-in)");
        assert_eq!(*quest_file_source, ConfigSource::Default);
    }
}
