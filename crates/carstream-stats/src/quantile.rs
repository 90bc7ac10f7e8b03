//! Percentiles over sorted prices
//!
//! Only the nearest-rank method is provided. It never interpolates: the
//! returned value is always an element of the sample.

use carstream_core::{Error, Result};

/// A rule for picking the `p`-th percentile out of sorted data
pub trait PercentileMethod {
    /// Percentile `p` in (0, 100] of ascending `sorted`
    fn percentile(&self, sorted: &[u32], p: f64) -> Result<u32>;

    /// First and third quartiles
    fn quartiles(&self, sorted: &[u32]) -> Result<(u32, u32)> {
        Ok((self.percentile(sorted, 25.0)?, self.percentile(sorted, 75.0)?))
    }
}

/// Nearest-rank percentile: 0-based index `ceil(p / 100 * n) - 1`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestRank;

impl PercentileMethod for NearestRank {
    fn percentile(&self, sorted: &[u32], p: f64) -> Result<u32> {
        // Written to also reject NaN
        if !(p > 0.0 && p <= 100.0) {
            return Err(Error::invalid_percentile(p));
        }
        if sorted.is_empty() {
            return Err(Error::empty_input());
        }

        let n = sorted.len();
        let rank = (p / 100.0 * n as f64).ceil() as usize;
        Ok(sorted[rank.clamp(1, n) - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EIGHT: [u32; 8] = [10, 20, 30, 40, 50, 60, 70, 80];

    #[test]
    fn test_quartiles_of_eight() {
        assert_eq!(NearestRank.percentile(&EIGHT, 25.0).unwrap(), 20);
        assert_eq!(NearestRank.percentile(&EIGHT, 75.0).unwrap(), 60);
        assert_eq!(NearestRank.quartiles(&EIGHT).unwrap(), (20, 60));
    }

    #[test]
    fn test_rank_is_ceiling_not_interpolated() {
        let nine = [10, 20, 30, 40, 50, 60, 70, 80, 1000];
        // ceil(2.25) - 1 = 2, ceil(6.75) - 1 = 6
        assert_eq!(NearestRank.quartiles(&nine).unwrap(), (30, 70));
        assert_eq!(NearestRank.percentile(&nine, 50.0).unwrap(), 50);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(NearestRank.percentile(&EIGHT, 100.0).unwrap(), 80);
        assert_eq!(NearestRank.percentile(&EIGHT, 0.001).unwrap(), 10);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(NearestRank.quartiles(&[42]).unwrap(), (42, 42));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = NearestRank.percentile(&[], 25.0).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 1, actual: 0 }));
    }

    #[test]
    fn test_out_of_range_percentile() {
        for p in [0.0, -5.0, 100.5, f64::NAN] {
            let err = NearestRank.percentile(&EIGHT, p).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "p = {p}");
        }
    }
}
