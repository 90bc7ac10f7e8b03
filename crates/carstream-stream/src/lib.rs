//! Record stream stages
//!
//! - [`RecordSource`]: infinite, explicitly seeded generator of vehicle records
//! - [`SkipFilter`] / [`SkipBrand`]: drop the first N records of one brand,
//!   lazily, preserving the order of everything else
//!
//! # Example
//!
//! ```rust
//! use carstream_stream::{RecordSource, SkipBrandExt};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let records: Vec<_> = RecordSource::seeded(42, today)
//!     .skip_brand("Mazda", 10)
//!     .take(100)
//!     .collect();
//! assert_eq!(records.len(), 100);
//! ```

pub mod skip;
pub mod source;

pub use skip::{Decision, SkipBrand, SkipBrandExt, SkipFilter};
pub use source::{Catalog, RecordSource, DEFAULT_MAX_AGE_MONTHS, DEFAULT_PRICE_RANGE};
