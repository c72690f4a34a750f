//! Arena configuration: scoring tables, adaptation parameters, metrics and export settings.
//! Loaded from TOML; every section and field falls back to the reference defaults.

pub mod adaptation_config;
pub mod export_config;
pub mod metrics_config;
pub mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use adaptation_config::{AdaptationConfig, ExplorationScheduleConfig};
pub use export_config::ExportConfig;
pub use metrics_config::MetricsConfig;
pub use scoring_config::{CvssBand, QualityTier, ScoringConfig, SpeedBand};

use crate::errors::{ConfigError, ConfigResult};

/// Top-level configuration aggregating all engine configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArenaConfig {
    pub scoring: ScoringConfig,
    pub adaptation: AdaptationConfig,
    pub metrics: MetricsConfig,
    pub export: ExportConfig,
}

impl ArenaConfig {
    /// Parse config from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        debug!(path = %path.display(), "Arena config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.scoring.validate()?;
        self.adaptation.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = ArenaConfig::from_toml("").unwrap();
        assert_eq!(config.scoring.uniqueness_ratio, 0.5);
        assert_eq!(config.adaptation.learning_rate, 0.15);
        assert_eq!(config.metrics.trend_slope_threshold, 5.0);
        assert!(config.export.metrics_path.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = ArenaConfig::from_toml(
            r#"
            [adaptation]
            learning_rate = 0.3
            seed = 42

            [scoring.severity_points]
            critical = 200.0
            high = 50.0
            medium = 25.0
            low = 10.0
            info = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(config.adaptation.learning_rate, 0.3);
        assert_eq!(config.adaptation.seed, Some(42));
        assert_eq!(config.adaptation.exploration_rate, 0.1);
        assert_eq!(config.scoring.severity_points.critical, 200.0);
    }

    #[test]
    fn test_invalid_weight_bounds_rejected() {
        let err = ArenaConfig::from_toml(
            r#"
            [adaptation]
            min_weight = 2.0
            max_weight = 1.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = ArenaConfig::from_toml("[scoring\nuniqueness_ratio = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArenaConfig::load(&dir.path().join("arena.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.toml");
        std::fs::write(&path, "[metrics]\ntop_n = 3\n").unwrap();
        let config = ArenaConfig::load(&path).unwrap();
        assert_eq!(config.metrics.top_n, 3);
    }
}
