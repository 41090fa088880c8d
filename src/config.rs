use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analyzers::grade::GradeThresholds;
use crate::analyzers::pass_fail::PASS_THRESHOLD;
use crate::error::ConfigError;

/// Grade bands and pass threshold used for an analysis cycle.
///
/// Stored as a JSON object on disk; omitted keys keep their defaults:
/// ```json
/// {
///   "thresholds": { "a": 90, "b": 80, "c": 70, "d": 60 },
///   "pass_threshold": 40
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub thresholds: GradeThresholds,
    pub pass_threshold: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            thresholds: GradeThresholds::default(),
            pass_threshold: PASS_THRESHOLD,
        }
    }
}

impl GradingConfig {
    /// Loads and validates the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: GradingConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Bands must be finite and strictly descending from A to D.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GradeThresholds { a, b, c, d } = self.thresholds;

        if ![a, b, c, d, self.pass_threshold].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid("thresholds must be finite numbers".into()));
        }
        if !(a > b && b > c && c > d) {
            return Err(ConfigError::Invalid(format!(
                "grade thresholds must be descending, got a={a} b={b} c={c} d={d}"
            )));
        }
        Ok(())
    }
}
