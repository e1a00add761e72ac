//! Top-level OPC configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, BucketConfig, CertificationConfig, LeaderboardConfig, ObservabilityConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::models::ThresholdTable;

/// Calling contexts that each bring their own threshold table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdContext {
    /// 90/75/60 with certification classes I-III.
    #[default]
    Certification,
    /// 85/70/50 without certification classes.
    Leaderboard,
}

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OPC_*`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpcConfig {
    pub certification: CertificationConfig,
    pub leaderboard: LeaderboardConfig,
    pub buckets: BucketConfig,
    pub observability: ObservabilityConfig,
}

impl OpcConfig {
    /// Load configuration: defaults, then `path` (when given), then
    /// environment overrides. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load `opc.toml` from `root` when present, otherwise defaults, then
    /// apply environment overrides.
    pub fn load_from_dir(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        if path.exists() {
            Self::load(Some(&path))
        } else {
            Self::load(None)
        }
    }

    /// Load configuration from a TOML string. Missing keys keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Threshold tables are validated when they are built, so only the
    /// remaining scalar fields are checked here.
    pub fn validate(config: &OpcConfig) -> Result<(), ConfigError> {
        if config.certification.authority.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "certification.authority".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.certification.epoch_label.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "certification.epoch_label".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !config.buckets.distinguished_min_score.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "buckets.distinguished_min_score".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if !config.buckets.flagged_below_score.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "buckets.flagged_below_score".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        Ok(())
    }

    /// The threshold table a calling context should classify with.
    pub fn threshold_table(&self, context: ThresholdContext) -> &ThresholdTable {
        match context {
            ThresholdContext::Certification => &self.certification.thresholds,
            ThresholdContext::Leaderboard => &self.leaderboard.thresholds,
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut OpcConfig) {
        if let Ok(val) = std::env::var(constants::ENV_CERT_AUTHORITY) {
            config.certification.authority = val;
        }
        if let Ok(val) = std::env::var(constants::ENV_EPOCH_LABEL) {
            config.certification.epoch_label = val;
        }
        if let Ok(val) = std::env::var(constants::ENV_DISTINGUISHED_MIN_SCORE) {
            if let Ok(v) = val.parse::<f64>() {
                config.buckets.distinguished_min_score = v;
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_FLAGGED_BELOW_SCORE) {
            if let Ok(v) = val.parse::<f64>() {
                config.buckets.flagged_below_score = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
