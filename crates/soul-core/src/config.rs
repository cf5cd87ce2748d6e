//! Configuration loading and typed config structures for the soul garden.
//!
//! The canonical configuration lives in `soul-config.yaml` at the project
//! root. Every field has a default, so a missing section (or an empty
//! file) yields the stock garden: the standard layout region, the
//! standard growth thresholds, and entropy-seeded placement.

use std::path::Path;

use serde::Deserialize;
use soul_garden::{GrowthRules, LayoutBounds};

/// Environment variable overriding `garden.seed`.
pub const SEED_ENV_VAR: &str = "SOUL_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an unusable garden.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration, mirroring `soul-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoulConfig {
    /// Garden engine settings.
    #[serde(default)]
    pub garden: GardenConfig,

    /// Point values for deeds entered by the user.
    #[serde(default)]
    pub deeds: DeedsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SoulConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `SOUL_SEED` overrides `garden.seed` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if the values fail validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if the values fail validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts with empty or inverted ranges and threshold tables
    /// that do not rise along the ladder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.garden.layout.is_valid() {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "garden.layout must have finite bounds with min < max, got {:?}",
                    self.garden.layout
                ),
            });
        }
        if !self.garden.rules.is_consistent() {
            return Err(ConfigError::Invalid {
                reason: String::from(
                    "garden.rules thresholds must strictly increase along each ladder",
                ),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `SOUL_SEED` is not a `u64`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let seed = std::env::var(SEED_ENV_VAR).ok();
        self.garden.apply_seed_override(seed.as_deref())
    }
}

/// Garden engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GardenConfig {
    /// Placement seed. `None` draws positions from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Region new seeds are placed in.
    #[serde(default)]
    pub layout: LayoutBounds,

    /// Upgrade and downgrade thresholds.
    #[serde(default)]
    pub rules: GrowthRules,
}

impl GardenConfig {
    /// Replace the seed with `raw` when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `raw` does not parse as a `u64`.
    pub fn apply_seed_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = raw else {
            return Ok(());
        };
        let seed = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
            reason: format!("{SEED_ENV_VAR}={raw:?} is not a valid seed: {e}"),
        })?;
        self.seed = Some(seed);
        Ok(())
    }
}

/// Point values applied to deeds the user types in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeedsConfig {
    /// Points for a user-entered good deed.
    #[serde(default = "default_good_points")]
    pub default_good_points: i64,

    /// Points for a user-entered bad deed.
    #[serde(default = "default_bad_points")]
    pub default_bad_points: i64,
}

impl Default for DeedsConfig {
    fn default() -> Self {
        Self {
            default_good_points: default_good_points(),
            default_bad_points: default_bad_points(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_good_points() -> i64 {
    10
}

const fn default_bad_points() -> i64 {
    -10
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SoulConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.garden.seed, None);
        assert_eq!(config.garden.rules, GrowthRules::default());
        assert_eq!(config.deeds.default_good_points, 10);
        assert_eq!(config.deeds.default_bad_points, -10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
garden:
  seed: 123
  layout:
    x_min: 0
    x_max: 400
    y_min: 0
    y_max: 600
  rules:
    upgrade:
      seed_to_tree: 2
      tree_to_fruit: 4
      fruit_to_bird: 6
    downgrade:
      bird_to_fruit: 1
      fruit_to_tree: 2
      tree_to_seed: 3
      burn: 5

deeds:
  default_good_points: 12
  default_bad_points: -7

logging:
  level: "debug"
"#;

        let config = SoulConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.garden.seed, Some(123));
        assert!(config.garden.layout.contains(soul_types::Position { x: 390.0, y: 590.0 }));
        assert_eq!(config.garden.rules.upgrade.seed_to_tree, 2);
        assert_eq!(config.garden.rules.downgrade.burn, 5);
        assert_eq!(config.deeds.default_good_points, 12);
        assert_eq!(config.deeds.default_bad_points, -7);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_partial_rules_keeps_other_defaults() {
        let yaml = "garden:\n  rules:\n    downgrade:\n      burn: 10\n";
        let config = SoulConfig::parse(yaml).ok().unwrap_or_default();
        assert_eq!(config.garden.rules.downgrade.burn, 10);
        assert_eq!(config.garden.rules.downgrade.tree_to_seed, 6);
        assert_eq!(config.garden.rules.upgrade.seed_to_tree, 3);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SoulConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn inverted_layout_is_rejected() {
        let yaml = "garden:\n  layout:\n    x_min: 300\n    x_max: 100\n";
        let result = SoulConfig::parse(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn non_increasing_thresholds_are_rejected() {
        let yaml = "garden:\n  rules:\n    upgrade:\n      seed_to_tree: 6\n";
        let result = SoulConfig::parse(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let result = SoulConfig::parse("garden: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn seed_override_replaces_seed() {
        let mut garden = GardenConfig::default();
        assert!(garden.apply_seed_override(Some(" 77 ")).is_ok());
        assert_eq!(garden.seed, Some(77));

        assert!(garden.apply_seed_override(None).is_ok());
        assert_eq!(garden.seed, Some(77));
    }

    #[test]
    fn bad_seed_override_is_rejected() {
        let mut garden = GardenConfig::default();
        let result = garden.apply_seed_override(Some("not-a-number"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        assert_eq!(garden.seed, None);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("soul-config.yaml");
        if path.exists() {
            let config = SoulConfig::parse(&std::fs::read_to_string(&path).unwrap_or_default());
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
