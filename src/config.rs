//! Configuration management for the analysis engine

use crate::types::assessment::SuspicionThresholds;
use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

/// Analysis and scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum valid digit count for a statistically meaningful chi-square
    /// result; smaller samples get a warning attached to the result
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: usize,
    /// Significance level for the chi-square sub-test
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    /// Compliance percentage required to pass the compliance sub-test
    #[serde(default = "default_compliance_threshold")]
    pub compliance_threshold: f64,
    /// Mean absolute deviation ceiling for the low-deviation sub-test
    #[serde(default = "default_max_deviation")]
    pub max_deviation: f64,
    /// Risk score escalation applied when the deviation is significant
    #[serde(default = "default_significance_penalty")]
    pub significance_penalty: f64,
    /// Risk score boundaries for the suspicion level classification
    #[serde(default)]
    pub suspicion_levels: SuspicionThresholds,
}

fn default_min_sample_size() -> usize {
    30
}

fn default_significance_level() -> f64 {
    0.05
}

fn default_compliance_threshold() -> f64 {
    80.0
}

fn default_max_deviation() -> f64 {
    5.0
}

fn default_significance_penalty() -> f64 {
    15.0
}

/// Input size limits enforced by the serving binary
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of column values accepted per analysis
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_max_rows() -> usize {
    1_000_000
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            limits: LimitsConfig {
                max_rows: default_max_rows(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sample_size: default_min_sample_size(),
            significance_level: default_significance_level(),
            compliance_threshold: default_compliance_threshold(),
            max_deviation: default_max_deviation(),
            significance_penalty: default_significance_penalty(),
            suspicion_levels: SuspicionThresholds::default(),
        }
    }
}
