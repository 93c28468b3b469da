//! Engine configuration management via TOML files.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::Value;

use crate::data::archive::DEFAULT_ARCHIVE_CAPACITY;

/// Engine configuration loaded from an `[oracle]` TOML table.
///
/// # Examples
///
/// ```
/// use draw_oracle_core::EngineConfig;
///
/// let config = EngineConfig::load_from_file("config/engine.toml")
///     .unwrap_or_else(|_| EngineConfig::default());
///
/// assert!(config.entropy >= 0.0 && config.entropy <= 1.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    /// Entropy parameter for digit selection, clamped to [0, 1].
    pub entropy: f64,
    /// Number of draw records the archive retains.
    pub archive_capacity: usize,
    /// Random seed for reproducible generation cycles.
    pub seed: u64,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let value: Value =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let table = value
            .get("oracle")
            .and_then(|v| v.as_table())
            .cloned()
            .unwrap_or_default();

        let entropy = table
            .get("entropy")
            .and_then(|v| v.as_float())
            .map(|v| v.clamp(0.0, 1.0))
            .unwrap_or(0.45);

        let archive_capacity = table
            .get("archive_capacity")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as usize)
            .unwrap_or(DEFAULT_ARCHIVE_CAPACITY);

        let seed = table
            .get("seed")
            .and_then(|v| v.as_integer())
            .map(|v| v as u64)
            .unwrap_or(42);

        Ok(Self {
            entropy,
            archive_capacity,
            seed,
        })
    }

    /// Load a configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_else(|err| {
            tracing::warn!("failed to load engine configuration, using defaults: {}", err);
            Self::default()
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            entropy: 0.45,
            archive_capacity: DEFAULT_ARCHIVE_CAPACITY,
            seed: 42,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_section_missing() {
        let config = EngineConfig::from_str("[engine]\nrows = 8").unwrap();
        assert!((config.entropy - 0.45).abs() < f64::EPSILON);
        assert_eq!(config.archive_capacity, DEFAULT_ARCHIVE_CAPACITY);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_parses_custom_values() {
        let toml = "[oracle]\nentropy = 0.7\narchive_capacity = 100\nseed = 9";
        let config = EngineConfig::from_str(toml).unwrap();
        assert!((config.entropy - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.archive_capacity, 100);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_entropy_clamped_to_unit_interval() {
        let config = EngineConfig::from_str("[oracle]\nentropy = 3.5").unwrap();
        assert!((config.entropy - 1.0).abs() < f64::EPSILON);

        let config = EngineConfig::from_str("[oracle]\nentropy = -0.5").unwrap();
        assert!(config.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn test_capacity_floor_is_one() {
        let config = EngineConfig::from_str("[oracle]\narchive_capacity = 0").unwrap();
        assert_eq!(config.archive_capacity, 1);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = EngineConfig::from_str("oracle = {");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = EngineConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config.archive_capacity, DEFAULT_ARCHIVE_CAPACITY);
    }
}
