//! Single-pass price statistics
//!
//! [`PriceAccumulator`] keeps count, extremes and Welford's running mean and
//! sum of squared deviations. Two accumulators built over disjoint batches
//! merge with the pairwise update of Chan, Golub and LeVeque, so chunked and
//! sequential evaluation agree up to rounding.

use carstream_core::{Accumulator, VehicleRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "parallel")]
use carstream_core::{Error, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Finished price statistics
///
/// The `Default` value (all zeros) is what an empty input produces. It is a
/// sentinel, indistinguishable from a sample of zero-priced records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CarStatistics {
    pub minimum_price: u32,
    pub maximum_price: u32,
    pub average_price: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
}

impl fmt::Display for CarStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CarStatistics(minimum_price={}, maximum_price={}, average_price={:.4}, standard_deviation={:.4})",
            self.minimum_price, self.maximum_price, self.average_price, self.standard_deviation
        )
    }
}

/// Mergeable aggregate state over prices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceAccumulator {
    count: u64,
    minimum: Option<u32>,
    maximum: Option<u32>,
    mean: f64,
    m2: f64, // sum of squared deviations from the running mean
}

impl PriceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one price into the state (Welford update)
    pub fn push(&mut self, price: u32) {
        self.count += 1;
        self.minimum = Some(self.minimum.map_or(price, |m| m.min(price)));
        self.maximum = Some(self.maximum.map_or(price, |m| m.max(price)));

        let x = f64::from(price);
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn minimum(&self) -> Option<u32> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<u32> {
        self.maximum
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Population variance
    pub fn variance(&self) -> Option<f64> {
        (self.count > 0).then(|| (self.m2 / self.count as f64).max(0.0))
    }
}

impl Accumulator for PriceAccumulator {
    type Input = VehicleRecord;
    type Output = CarStatistics;

    fn accumulate(&mut self, record: &VehicleRecord) {
        self.push(record.price);
    }

    fn merge(&mut self, other: Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let total = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * (n_b / total);
        self.m2 += other.m2 + delta * delta * (n_a * n_b / total);
        self.count += other.count;
        self.minimum = self.minimum.min(other.minimum);
        self.maximum = self.maximum.max(other.maximum);
    }

    fn finish(&self) -> CarStatistics {
        let (Some(minimum), Some(maximum), Some(variance)) =
            (self.minimum, self.maximum, self.variance())
        else {
            return CarStatistics::default();
        };

        // Rounding can push the running mean an ulp past the extremes.
        let average = self.mean.clamp(f64::from(minimum), f64::from(maximum));

        CarStatistics {
            minimum_price: minimum,
            maximum_price: maximum,
            average_price: average,
            standard_deviation: variance.sqrt(),
        }
    }
}

/// Price statistics of `records` in one sequential pass
pub fn summarize<'a, I>(records: I) -> CarStatistics
where
    I: IntoIterator<Item = &'a VehicleRecord>,
{
    PriceAccumulator::collect(records)
}

/// Price statistics of a bare price slice
pub fn summarize_prices(prices: &[u32]) -> CarStatistics {
    let mut state = PriceAccumulator::new();
    for &price in prices {
        state.push(price);
    }
    state.finish()
}

/// Price statistics computed over `chunk_size` chunks in parallel, then merged
#[cfg(feature = "parallel")]
pub fn par_summarize(records: &[VehicleRecord], chunk_size: usize) -> Result<CarStatistics> {
    if chunk_size == 0 {
        return Err(Error::InvalidParameter(
            "chunk size must be positive".to_string(),
        ));
    }

    let state = records
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut part = PriceAccumulator::new();
            for record in chunk {
                part.accumulate(record);
            }
            part
        })
        .reduce(PriceAccumulator::new, |mut a, b| {
            a.merge(b);
            a
        });

    Ok(state.finish())
}
