//! Core types for the carstream pipeline
//!
//! This crate holds what every stage shares:
//!
//! - [`VehicleRecord`], the immutable value that flows from the generator
//!   through the skip filter into the statistics stages
//! - [`Accumulator`], the mergeable single-pass reduction shape
//! - [`Error`] and [`Result`], the unified error type
//!
//! # Example
//!
//! ```rust
//! use carstream_core::VehicleRecord;
//! use chrono::NaiveDate;
//!
//! let produced = NaiveDate::from_ymd_opt(2022, 5, 1).unwrap();
//! let record = VehicleRecord::new("Mazda", "CX-5", "Crossover", produced, 640_000);
//! assert!(record.is_produced_after(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()));
//! ```

pub mod error;
pub mod record;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use record::VehicleRecord;
pub use traits::Accumulator;
