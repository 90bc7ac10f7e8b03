//! # carstream
//!
//! A small demonstration pipeline over a synthetic stream of vehicle records:
//!
//! 1. [`RecordSource`] generates an infinite, seeded stream
//! 2. [`SkipFilter`] drops the first N records of one brand, lazily
//! 3. the first `take` survivors are materialised
//! 4. recent records are grouped by category
//! 5. [`PriceAccumulator`] computes min / max / mean / standard deviation
//! 6. [`OutlierClassifier`] counts prices outside the Tukey fences
//!
//! ## Quick Start
//!
//! ```rust
//! use carstream::{Pipeline, PipelineConfig};
//! use chrono::NaiveDate;
//!
//! let config = PipelineConfig { seed: Some(7), take: 100, ..Default::default() };
//! let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! let report = Pipeline::new(config, today).unwrap().run().unwrap();
//!
//! assert_eq!(report.records.len(), 100);
//! assert_eq!(report.outliers.total(), 100);
//! ```

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use pipeline::{group_by_category, Pipeline, PipelineReport};
pub use report::{render_json, render_text};

// Re-export workspace crates
pub use carstream_core::{Accumulator, Error, Result, VehicleRecord};
pub use carstream_stats::{
    summarize, summarize_prices, CarStatistics, NearestRank, OutlierClassifier, OutlierReport,
    PercentileMethod, PriceAccumulator, TukeyFences,
};
pub use carstream_stream::{Catalog, Decision, RecordSource, SkipBrand, SkipBrandExt, SkipFilter};

#[cfg(feature = "parallel")]
pub use carstream_stats::par_summarize;
