use serde_derive::{Deserialize, Serialize};

use super::error::{LookupError, Result};

pub const DEFAULT_LOOSENESS: f64 = 0.15;
pub const DEFAULT_LIMIT: usize = 80;

/// Tuning for a [`crate::Matcher`]. Missing JSON fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MatcherConfig {
    /// How far candidates may differ from the input in stroke and substroke
    /// count, from 0 (exact) to 1 (anything).
    pub looseness: f64,
    /// Maximum number of matches returned.
    pub limit: usize,
    /// Keep points the input device interpolated.
    pub use_historical_points: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            looseness: DEFAULT_LOOSENESS,
            limit: DEFAULT_LIMIT,
            use_historical_points: false,
        }
    }
}

impl MatcherConfig {
    pub fn from_json_str(json: &str) -> Result<MatcherConfig> {
        let config: MatcherConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.looseness) {
            return Err(LookupError::InvalidConfig(format!(
                "looseness must be within [0, 1], got {}",
                self.looseness
            )));
        }
        if self.limit == 0 {
            return Err(LookupError::InvalidConfig("limit must be positive".to_string()));
        }
        Ok(())
    }
}
