//! Synthetic vehicle record generation
//!
//! [`RecordSource`] is an infinite iterator. Randomness is threaded in
//! explicitly, so a seeded source replays the same stream every time.

use carstream_core::{Error, Result, VehicleRecord};
use chrono::{Months, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Default upper bound (exclusive) on vehicle age, in months
pub const DEFAULT_MAX_AGE_MONTHS: u32 = 240;

/// Default price range, lower bound inclusive and upper bound exclusive
pub const DEFAULT_PRICE_RANGE: Range<u32> = 200_000..1_200_000;

/// Value sets the generator draws brand, model and category from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    brands: Vec<String>,
    models: Vec<String>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog; every value set must be non-empty
    pub fn new<S: Into<String>>(
        brands: impl IntoIterator<Item = S>,
        models: impl IntoIterator<Item = S>,
        categories: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let brands: Vec<String> = brands.into_iter().map(Into::into).collect();
        let models: Vec<String> = models.into_iter().map(Into::into).collect();
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();

        for (name, values) in [("brands", &brands), ("models", &models), ("categories", &categories)] {
            if values.is_empty() {
                return Err(Error::InvalidParameter(format!("catalog {name} must not be empty")));
            }
        }

        Ok(Self { brands, models, categories })
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
        Self {
            brands: owned(&["Chevrolet", "Nissan", "Volkswagen", "Mazda", "Hyundai"]),
            models: owned(&["Cruze", "Altima", "Golf", "CX-5", "Sonata"]),
            categories: owned(&["Compact", "Sedan", "Crossover", "Coupe", "Hatchback"]),
        }
    }
}

/// Infinite stream of randomised vehicle records
///
/// Fields are drawn independently: brand, model and category uniformly from
/// the [`Catalog`], the production date `k` calendar months before `today`
/// with `k` uniform in `[0, max_age_months)`, and the price uniform in the
/// configured range.
///
/// [`with_max_age_months`](Self::with_max_age_months) rejects a window that
/// reaches before [`NaiveDate::MIN`]. The default window is not checked, so a
/// source anchored within 240 months of `NaiveDate::MIN` clamps older
/// production dates to `NaiveDate::MIN`.
#[derive(Debug, Clone)]
pub struct RecordSource<R: Rng> {
    rng: R,
    catalog: Catalog,
    today: NaiveDate,
    max_age_months: u32,
    price_range: Range<u32>,
}

impl<R: Rng> RecordSource<R> {
    pub fn new(rng: R, catalog: Catalog, today: NaiveDate) -> Self {
        Self {
            rng,
            catalog,
            today,
            max_age_months: DEFAULT_MAX_AGE_MONTHS,
            price_range: DEFAULT_PRICE_RANGE,
        }
    }

    /// Limit production dates to the last `months` months (exclusive)
    pub fn with_max_age_months(mut self, months: u32) -> Result<Self> {
        if months == 0 {
            return Err(Error::InvalidParameter(
                "max age must be at least one month".to_string(),
            ));
        }
        if self.today.checked_sub_months(Months::new(months - 1)).is_none() {
            return Err(Error::InvalidParameter(format!(
                "{months} months before {} is not a representable date",
                self.today
            )));
        }
        self.max_age_months = months;
        Ok(self)
    }

    /// Draw prices from `range` (upper bound exclusive)
    pub fn with_price_range(mut self, range: Range<u32>) -> Result<Self> {
        if range.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "price range {}..{} is empty",
                range.start, range.end
            )));
        }
        self.price_range = range;
        Ok(self)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn pick<'a>(rng: &mut R, values: &'a [String]) -> &'a str {
        &values[rng.gen_range(0..values.len())]
    }

    fn generate(&mut self) -> VehicleRecord {
        let brand = Self::pick(&mut self.rng, &self.catalog.brands).to_owned();
        let model = Self::pick(&mut self.rng, &self.catalog.models).to_owned();
        let category = Self::pick(&mut self.rng, &self.catalog.categories).to_owned();

        let age = self.rng.gen_range(0..self.max_age_months);
        let production_date = self
            .today
            .checked_sub_months(Months::new(age))
            .unwrap_or(NaiveDate::MIN);

        let price = self.rng.gen_range(self.price_range.clone());

        VehicleRecord {
            brand,
            model,
            category,
            production_date,
            price,
        }
    }
}

impl RecordSource<ChaCha8Rng> {
    /// Deterministic source over the default catalog
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), Catalog::default(), today)
    }

    /// Source seeded from OS entropy over the default catalog
    pub fn from_entropy(today: NaiveDate) -> Self {
        Self::new(ChaCha8Rng::from_entropy(), Catalog::default(), today)
    }
}

impl<R: Rng> Iterator for RecordSource<R> {
    type Item = VehicleRecord;

    fn next(&mut self) -> Option<VehicleRecord> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
