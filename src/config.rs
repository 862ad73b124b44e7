use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{GraphOptions, RecordOrder, ScoreCurve, TieBreak};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Minimum similarity for a pair to enter the solver's search space.
    /// Unset keeps the graph dense, zero-weight edges included.
    #[serde(default)]
    pub min_edge_weight: Option<f64>,
    #[serde(default = "default_tie_break")]
    pub tie_break: TieBreak,
    #[serde(default = "default_record_order")]
    pub record_order: RecordOrder,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_edge_weight: None,
            tie_break: default_tie_break(),
            record_order: default_record_order(),
        }
    }
}

fn default_tie_break() -> TieBreak {
    TieBreak::Ascending
}

fn default_record_order() -> RecordOrder {
    RecordOrder::ScoreDescending
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_steepness")]
    pub steepness: f64,
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            steepness: default_steepness(),
            midpoint: default_midpoint(),
        }
    }
}

fn default_steepness() -> f64 {
    15.0
}

fn default_midpoint() -> f64 {
    0.15
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Sources, later overriding earlier:
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (DUET__MATCHING__MIN_EDGE_WEIGHT etc.)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("DUET")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DUET")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            min_weight: self.matching.min_edge_weight,
            tie_break: self.matching.tie_break,
        }
    }

    pub fn score_curve(&self) -> ScoreCurve {
        ScoreCurve {
            steepness: self.scoring.steepness,
            midpoint: self.scoring.midpoint,
        }
    }
}
