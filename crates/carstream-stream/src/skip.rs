//! Stateful skip-N-of-brand filtering
//!
//! [`SkipFilter`] is the state object: it owns the remaining skip budget and
//! answers one keep/drop question per record. [`SkipBrand`] drives it from any
//! upstream iterator, pulling lazily so an infinite source followed by
//! `.take(n)` terminates.

use carstream_core::VehicleRecord;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Outcome of offering one record to a [`SkipFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Drop,
}

/// Drops the first `count` records whose brand equals `brand`
///
/// The budget is private to one instance and one pass. Not meant to be shared
/// between consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipFilter {
    brand: String,
    remaining: usize,
}

impl SkipFilter {
    pub fn new(brand: impl Into<String>, count: usize) -> Self {
        Self {
            brand: brand.into(),
            remaining: count,
        }
    }

    /// Decide whether `record` is emitted, spending budget on a drop
    pub fn admit(&mut self, record: &VehicleRecord) -> Decision {
        if self.remaining > 0 && record.brand == self.brand {
            self.remaining -= 1;
            trace!(brand = %self.brand, remaining = self.remaining, "dropped record");
            if self.remaining == 0 {
                debug!(brand = %self.brand, "skip budget exhausted");
            }
            Decision::Drop
        } else {
            Decision::Keep
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Drops still available
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Once exhausted the filter passes everything through
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Iterator adapter applying a [`SkipFilter`] to its upstream
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct SkipBrand<I> {
    inner: I,
    filter: SkipFilter,
}

impl<I> SkipBrand<I> {
    pub fn new(inner: I, filter: SkipFilter) -> Self {
        Self { inner, filter }
    }

    pub fn skip_filter(&self) -> &SkipFilter {
        &self.filter
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for SkipBrand<I>
where
    I: Iterator<Item = VehicleRecord>,
{
    type Item = VehicleRecord;

    fn next(&mut self) -> Option<VehicleRecord> {
        if self.filter.is_exhausted() {
            return self.inner.next();
        }
        loop {
            let record = self.inner.next()?;
            if self.filter.admit(&record) == Decision::Keep {
                return Some(record);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (lower.saturating_sub(self.filter.remaining()), upper)
    }
}

impl<I> FusedIterator for SkipBrand<I> where I: FusedIterator<Item = VehicleRecord> {}

/// Extension trait adding [`skip_brand`](SkipBrandExt::skip_brand) to record iterators
pub trait SkipBrandExt: Iterator<Item = VehicleRecord> + Sized {
    /// Drop the first `count` records of `brand`, passing everything else through
    fn skip_brand(self, brand: impl Into<String>, count: usize) -> SkipBrand<Self> {
        SkipBrand::new(self, SkipFilter::new(brand, count))
    }
}

impl<I: Iterator<Item = VehicleRecord>> SkipBrandExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(brand: &str, price: u32) -> VehicleRecord {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        VehicleRecord::new(brand, "Model", "Sedan", date, price)
    }

    fn prices(records: &[VehicleRecord]) -> Vec<u32> {
        records.iter().map(|r| r.price).collect()
    }

    #[test]
    fn test_drops_first_occurrences_only() {
        let input = vec![
            record("Mazda", 1),
            record("Nissan", 2),
            record("Mazda", 3),
            record("Mazda", 4),
            record("Hyundai", 5),
            record("Mazda", 6),
        ];
        let out: Vec<_> = input.into_iter().skip_brand("Mazda", 2).collect();
        assert_eq!(prices(&out), vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_zero_budget_is_pass_through() {
        let input = vec![record("Mazda", 1), record("Mazda", 2)];
        let out: Vec<_> = input.clone().into_iter().skip_brand("Mazda", 0).collect();
        assert_eq!(out, input);
    }

    #[test]
    fn test_absent_brand_is_pass_through() {
        let input = vec![record("Mazda", 1), record("Nissan", 2)];
        let out: Vec<_> = input.clone().into_iter().skip_brand("Toyota", 10).collect();
        assert_eq!(out, input);
    }

    #[test]
    fn test_budget_larger_than_occurrences() {
        let input = vec![record("Mazda", 1), record("Nissan", 2), record("Mazda", 3)];
        let mut adapter = input.into_iter().skip_brand("Mazda", 10);
        let out: Vec<_> = adapter.by_ref().collect();
        assert_eq!(prices(&out), vec![2]);
        assert_eq!(adapter.skip_filter().remaining(), 8);
    }

    #[test]
    fn test_brand_match_is_exact() {
        let input = vec![record("mazda", 1), record("Mazda ", 2), record("Mazda", 3)];
        let out: Vec<_> = input.into_iter().skip_brand("Mazda", 5).collect();
        assert_eq!(prices(&out), vec![1, 2]);
    }

    #[test]
    fn test_admit_decisions() {
        let mut filter = SkipFilter::new("Golf", 1);
        assert_eq!(filter.admit(&record("Nissan", 1)), Decision::Keep);
        assert_eq!(filter.admit(&record("Golf", 2)), Decision::Drop);
        assert!(filter.is_exhausted());
        assert_eq!(filter.admit(&record("Golf", 3)), Decision::Keep);
    }

    #[test]
    fn test_lazy_over_infinite_upstream() {
        let brands = ["Mazda", "Nissan"];
        let upstream = (0u32..).map(|i| record(brands[(i % 2) as usize], i));
        let out: Vec<_> = upstream.skip_brand("Mazda", 3).take(5).collect();
        // Mazda at 0, 2, 4 dropped; Nissan at 1, 3, 5 kept; Mazda at 6 kept
        assert_eq!(prices(&out), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_size_hint_accounts_for_budget() {
        let input = vec![record("Mazda", 1), record("Mazda", 2), record("Nissan", 3)];
        let adapter = input.into_iter().skip_brand("Mazda", 2);
        assert_eq!(adapter.size_hint(), (1, Some(3)));
    }
}
