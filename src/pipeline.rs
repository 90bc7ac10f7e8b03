//! End-to-end pipeline wiring
//!
//! generate -> skip filter -> take N -> materialise, then three views over the
//! materialised list:
//!
//! - grouping by category over the records produced after the recent cutoff
//! - price statistics over the whole skip-filtered list
//! - outlier counts over the whole skip-filtered list
//!
//! The date filter only applies to grouping; statistics and outliers see every
//! materialised record.

use crate::config::PipelineConfig;
use carstream_core::{Result, VehicleRecord};
use carstream_stats::{summarize, CarStatistics, OutlierClassifier, OutlierReport};
use carstream_stream::{RecordSource, SkipBrandExt};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Everything one run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Skip-filtered, bounded record list
    pub records: Vec<VehicleRecord>,
    /// Records produced after `cutoff`, keyed by category
    pub groups: BTreeMap<String, Vec<VehicleRecord>>,
    pub cutoff: NaiveDate,
    pub statistics: CarStatistics,
    pub outliers: OutlierReport,
}

impl PipelineReport {
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        self.groups
            .iter()
            .map(|(category, records)| (category.as_str(), records.len()))
            .collect()
    }
}

/// A configured pipeline anchored at a fixed "today"
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    today: NaiveDate,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, today: NaiveDate) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, today })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Grouping keeps records produced strictly after this date
    pub fn recent_cutoff(&self) -> NaiveDate {
        self.today
            .checked_sub_months(Months::new(self.config.recent_months))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Run over the configured record generator
    #[instrument(skip(self), fields(seed = ?self.config.seed))]
    pub fn run(&self) -> Result<PipelineReport> {
        let source = match self.config.seed {
            Some(seed) => RecordSource::seeded(seed, self.today),
            None => RecordSource::from_entropy(self.today),
        }
        .with_max_age_months(self.config.max_age_months)?
        .with_price_range(self.config.min_price..self.config.max_price)?;

        self.run_with_source(source)
    }

    /// Run over any record stream; it is only pulled as far as needed
    pub fn run_with_source<I>(&self, source: I) -> Result<PipelineReport>
    where
        I: Iterator<Item = VehicleRecord>,
    {
        let records: Vec<VehicleRecord> = source
            .skip_brand(&self.config.skip_brand, self.config.skip_count)
            .take(self.config.take)
            .collect();
        info!(
            records = records.len(),
            skip_brand = %self.config.skip_brand,
            skip_count = self.config.skip_count,
            "materialised records"
        );

        let cutoff = self.recent_cutoff();
        let groups = group_by_category(&records, cutoff);
        debug!(%cutoff, categories = groups.len(), "grouped recent records");

        let statistics = summarize(&records);
        debug!(%statistics, "computed price statistics");

        let classifier = OutlierClassifier::new(self.config.outlier_multiplier)?;
        let outliers = classifier.analyze(&records);
        info!(data = outliers.data, outliers = outliers.outliers, "classified prices");

        Ok(PipelineReport {
            records,
            groups,
            cutoff,
            statistics,
            outliers,
        })
    }
}

/// Group records produced strictly after `cutoff` by category
pub fn group_by_category(
    records: &[VehicleRecord],
    cutoff: NaiveDate,
) -> BTreeMap<String, Vec<VehicleRecord>> {
    let mut groups: BTreeMap<String, Vec<VehicleRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_produced_after(cutoff)) {
        groups
            .entry(record.category.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(brand: &str, category: &str, produced: NaiveDate, price: u32) -> VehicleRecord {
        VehicleRecord::new(brand, "Model", category, produced, price)
    }

    #[test]
    fn test_group_by_category_applies_cutoff() {
        let cutoff = date(2021, 10, 17);
        let records = vec![
            record("Mazda", "Sedan", date(2024, 1, 1), 1),
            record("Mazda", "Coupe", date(2021, 10, 17), 2),
            record("Nissan", "Sedan", date(2021, 10, 18), 3),
            record("Nissan", "Coupe", date(2010, 5, 5), 4),
        ];

        let groups = group_by_category(&records, cutoff);
        assert_eq!(groups.len(), 1);
        let prices: Vec<u32> = groups["Sedan"].iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![1, 3]);
    }

    #[test]
    fn test_cutoff_uses_calendar_months() {
        let config = PipelineConfig::default();
        let pipeline = Pipeline::new(config, date(2026, 10, 17)).unwrap();
        assert_eq!(pipeline.recent_cutoff(), date(2021, 10, 17));
    }

    #[test]
    fn test_statistics_ignore_date_filter() {
        let today = date(2026, 10, 17);
        let config = PipelineConfig {
            skip_brand: "Mazda".to_string(),
            skip_count: 1,
            take: 3,
            ..Default::default()
        };
        let pipeline = Pipeline::new(config, today).unwrap();

        let source = vec![
            record("Mazda", "Sedan", date(2026, 1, 1), 999),
            record("Nissan", "Sedan", date(2026, 1, 1), 100),
            record("Mazda", "Coupe", date(2000, 1, 1), 200),
            record("Hyundai", "Coupe", date(2001, 1, 1), 300),
            record("Hyundai", "Coupe", date(2026, 1, 1), 400),
        ];
        let report = pipeline.run_with_source(source.into_iter()).unwrap();

        let prices: Vec<u32> = report.records.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![100, 200, 300]);

        // Only the Nissan is recent, but all three feed the statistics
        assert_eq!(report.category_counts(), BTreeMap::from([("Sedan", 1)]));
        assert_eq!(report.statistics.minimum_price, 100);
        assert_eq!(report.statistics.maximum_price, 300);
        assert_eq!(report.statistics.average_price, 200.0);
        assert_eq!(report.outliers.total(), 3);
    }

    #[test]
    fn test_short_source_yields_fewer_records() {
        let pipeline = Pipeline::new(PipelineConfig::default(), date(2026, 10, 17)).unwrap();
        let report = pipeline.run_with_source(std::iter::empty()).unwrap();
        assert!(report.records.is_empty());
        assert!(report.groups.is_empty());
        assert_eq!(report.statistics, CarStatistics::default());
        assert_eq!(report.outliers, OutlierReport::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig {
            take: 0,
            ..Default::default()
        };
        assert!(Pipeline::new(config, date(2026, 10, 17)).is_err());
    }
}
