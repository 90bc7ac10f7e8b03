//! Tukey fence outlier classification
//!
//! Quartiles come from [`NearestRank`] over the sorted prices. A record is
//! within bounds when `q1 - k * iqr <= price <= q3 + k * iqr`, with the bounds
//! kept as real numbers.

use crate::quantile::{NearestRank, PercentileMethod};
use carstream_core::{Error, Result, VehicleRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Quartiles, interquartile range and the derived bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TukeyFences {
    pub q1: u32,
    pub q3: u32,
    pub iqr: u32,
    pub lower: f64,
    pub upper: f64,
}

impl TukeyFences {
    /// Tukey's conventional fence width
    pub const DEFAULT_MULTIPLIER: f64 = 1.5;

    /// Fences over ascending `sorted` prices
    pub fn from_sorted(sorted: &[u32], multiplier: f64) -> Result<Self> {
        let (q1, q3) = NearestRank.quartiles(sorted)?;
        let iqr = q3.checked_sub(q1).ok_or_else(|| {
            Error::InvalidInput(format!("prices are not sorted (q1 = {q1}, q3 = {q3})"))
        })?;

        let reach = multiplier * f64::from(iqr);
        Ok(Self {
            q1,
            q3,
            iqr,
            lower: f64::from(q1) - reach,
            upper: f64::from(q3) + reach,
        })
    }

    /// Inclusive on both bounds
    pub fn contains(&self, price: u32) -> bool {
        let x = f64::from(price);
        self.lower <= x && x <= self.upper
    }
}

/// Counts of records inside and outside the fences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub data: u64,
    pub outliers: u64,
}

impl OutlierReport {
    pub fn total(&self) -> u64 {
        self.data + self.outliers
    }

    /// The two-key `"data"` / `"outliers"` mapping
    pub fn to_map(&self) -> BTreeMap<&'static str, u64> {
        BTreeMap::from([("data", self.data), ("outliers", self.outliers)])
    }
}

impl fmt::Display for OutlierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{data={}, outliers={}}}", self.data, self.outliers)
    }
}

/// Partitions records by the 1.5 x IQR rule (or a custom multiplier)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierClassifier {
    multiplier: f64,
}

impl Default for OutlierClassifier {
    fn default() -> Self {
        Self {
            multiplier: TukeyFences::DEFAULT_MULTIPLIER,
        }
    }
}

impl OutlierClassifier {
    pub fn new(multiplier: f64) -> Result<Self> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "fence multiplier must be positive and finite, got {multiplier}"
            )));
        }
        Ok(Self { multiplier })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Fences for `records`, or `None` when there are no records
    pub fn fences(&self, records: &[VehicleRecord]) -> Option<TukeyFences> {
        let mut prices: Vec<u32> = records.iter().map(|r| r.price).collect();
        prices.sort_unstable();
        TukeyFences::from_sorted(&prices, self.multiplier).ok()
    }

    /// Count within-bound records and outliers over the full record set
    ///
    /// An empty input yields zero for both counts.
    pub fn analyze(&self, records: &[VehicleRecord]) -> OutlierReport {
        let Some(fences) = self.fences(records) else {
            debug!("no records to classify");
            return OutlierReport::default();
        };

        let data = records.iter().filter(|r| fences.contains(r.price)).count() as u64;
        let report = OutlierReport {
            data,
            outliers: records.len() as u64 - data,
        };
        debug!(
            q1 = fences.q1,
            q3 = fences.q3,
            lower = fences.lower,
            upper = fences.upper,
            data = report.data,
            outliers = report.outliers,
            "classified prices"
        );
        report
    }

    /// Split records into (within bounds, outliers), preserving input order
    pub fn partition<'a>(
        &self,
        records: &'a [VehicleRecord],
    ) -> (Vec<&'a VehicleRecord>, Vec<&'a VehicleRecord>) {
        match self.fences(records) {
            Some(fences) => records.iter().partition(|r| fences.contains(r.price)),
            None => (Vec::new(), Vec::new()),
        }
    }
}
