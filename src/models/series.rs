//! Daily price/volume series

use chrono::NaiveDate;

/// One day's price and volume, in the reference currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
}

impl Sample {
    pub fn new(date: NaiveDate, price: f64, volume: f64) -> Self {
        Self { date, price, volume }
    }
}

/// Chronologically ordered samples, at most one per date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series from samples, sorting by date and keeping the first sample seen for each date
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.date);
        samples.dedup_by_key(|s| s.date);
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.samples.iter().map(|s| s.date).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.volume).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
    }

    #[test]
    fn test_series_is_sorted_and_unique() {
        let series = Series::new(vec![
            Sample::new(day(3), 30.0, 3.0),
            Sample::new(day(1), 10.0, 1.0),
            Sample::new(day(3), 99.0, 9.0),
            Sample::new(day(2), 20.0, 2.0),
        ]);

        assert_eq!(series.dates(), vec![day(1), day(2), day(3)]);
        assert_eq!(series.prices(), vec![10.0, 20.0, 30.0]);
        assert_eq!(series.volumes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = Series::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }
}
