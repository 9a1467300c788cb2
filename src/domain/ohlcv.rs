//! Daily OHLCV bar representation.

use chrono::NaiveDate;

/// One trading day of a single instrument. Within a cleaned series, dates
/// are strictly increasing and unique. Volume may be absent for some rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fields() {
        let bar = PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: Some(50_000.0),
        };
        assert_eq!(bar.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!((bar.close - 105.0).abs() < f64::EPSILON);
        assert_eq!(bar.volume, Some(50_000.0));
    }

    #[test]
    fn volume_can_be_absent() {
        let bar = PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            open: 100.0,
            high: 100.0,
            low: 100.0,
            close: 100.0,
            volume: None,
        };
        assert!(bar.volume.is_none());
    }
}
