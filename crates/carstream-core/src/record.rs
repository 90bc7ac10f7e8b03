//! The vehicle record flowing through the pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single synthetic vehicle listing
///
/// Records are plain values: they carry no identity beyond field equality and
/// are never mutated once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub category: String,
    pub production_date: NaiveDate,
    pub price: u32,
}

impl VehicleRecord {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        category: impl Into<String>,
        production_date: NaiveDate,
        price: u32,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            category: category.into(),
            production_date,
            price,
        }
    }

    /// Strictly after `date`; a record produced on the cutoff day is excluded.
    pub fn is_produced_after(&self, date: NaiveDate) -> bool {
        self.production_date > date
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VehicleRecord(brand={}, model={}, category={}, production_date={}, price={})",
            self.brand, self.model, self.category, self.production_date, self.price
        )
    }
}
