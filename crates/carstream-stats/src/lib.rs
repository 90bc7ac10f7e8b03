//! Price statistics for vehicle records
//!
//! This crate provides the two reductions run over a materialised record set:
//!
//! - [`PriceAccumulator`]: single-pass, mergeable count / min / max / mean /
//!   population standard deviation, finishing into [`CarStatistics`]
//! - [`OutlierClassifier`]: nearest-rank quartiles and Tukey fences,
//!   reporting counts as an [`OutlierReport`]
//!
//! # Estimator Properties
//!
//! | Statistic | Passes | Mergeable | Empty input |
//! |-----------|--------|-----------|-------------|
//! | min / max / mean / sd | 1 | yes | zero sentinel |
//! | quartiles / fences | sort + 1 | no | zero counts |
//!
//! # Example
//!
//! ```rust
//! use carstream_stats::{summarize_prices, NearestRank, PercentileMethod};
//!
//! let stats = summarize_prices(&[100, 200, 300, 400, 500]);
//! assert_eq!(stats.minimum_price, 100);
//! assert!((stats.standard_deviation - 20_000f64.sqrt()).abs() < 1e-9);
//!
//! let sorted = [10, 20, 30, 40, 50, 60, 70, 80];
//! assert_eq!(NearestRank.quartiles(&sorted).unwrap(), (20, 60));
//! ```
//!
//! With the `parallel` feature, `par_summarize` folds chunks on the rayon
//! pool and merges the partial states.

pub mod outlier;
pub mod quantile;
pub mod summary;

pub use outlier::{OutlierClassifier, OutlierReport, TukeyFences};
pub use quantile::{NearestRank, PercentileMethod};
pub use summary::{summarize, summarize_prices, CarStatistics, PriceAccumulator};

#[cfg(feature = "parallel")]
pub use summary::par_summarize;
