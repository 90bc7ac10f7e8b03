//! Pipeline configuration
//!
//! Every field has a default, so a JSON file only needs the keys it changes.

use carstream_core::{Error, Result};
use carstream_stream::{DEFAULT_MAX_AGE_MONTHS, DEFAULT_PRICE_RANGE};
use carstream_stats::TukeyFences;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Brand whose first `skip_count` records are dropped
    pub skip_brand: String,

    /// Number of `skip_brand` records to drop
    pub skip_count: usize,

    /// Records kept after skip filtering
    pub take: usize,

    /// Grouping only considers records produced within this many months
    pub recent_months: u32,

    /// Generated production dates fall within this many months (exclusive)
    pub max_age_months: u32,

    /// Lowest generated price (inclusive)
    pub min_price: u32,

    /// Highest generated price (exclusive)
    pub max_price: u32,

    /// Seed for the record generator; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Tukey fence width in IQRs
    pub outlier_multiplier: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            skip_brand: "Toyota".to_string(),
            skip_count: 10,
            take: 500,
            recent_months: 60,
            max_age_months: DEFAULT_MAX_AGE_MONTHS,
            min_price: DEFAULT_PRICE_RANGE.start,
            max_price: DEFAULT_PRICE_RANGE.end,
            seed: None,
            outlier_multiplier: TukeyFences::DEFAULT_MULTIPLIER,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.take == 0 {
            return Err(Error::Config("take must be positive".to_string()));
        }
        if self.max_age_months == 0 {
            return Err(Error::Config("max_age_months must be positive".to_string()));
        }
        if self.min_price >= self.max_price {
            return Err(Error::Config(format!(
                "price range {}..{} is empty",
                self.min_price, self.max_price
            )));
        }
        if !self.outlier_multiplier.is_finite() || self.outlier_multiplier <= 0.0 {
            return Err(Error::Config(format!(
                "outlier_multiplier must be positive and finite, got {}",
                self.outlier_multiplier
            )));
        }
        Ok(())
    }
}
