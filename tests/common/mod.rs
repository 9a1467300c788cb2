#![allow(dead_code)]

use chrono::{Days, NaiveDate, NaiveTime};
use smacross::domain::error::SmacrossError;
use smacross::domain::execution::ExecutionConfig;
pub use smacross::domain::ohlcv::PriceBar;
use smacross::ports::data_port::DataPort;

pub struct MockDataPort {
    pub bars: Vec<PriceBar>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            bars: Vec::new(),
            error: None,
        }
    }

    pub fn with_bars(mut self, bars: Vec<PriceBar>) -> Self {
        self.bars = bars;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_series(&self) -> Result<Vec<PriceBar>, SmacrossError> {
        if let Some(reason) = &self.error {
            return Err(SmacrossError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.bars.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(date_str: &str, open: f64, close: f64) -> PriceBar {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap();
    PriceBar {
        date,
        open,
        high: open.max(close),
        low: open.min(close),
        close,
        volume: Some(1000.0),
    }
}

/// Bars on consecutive calendar days starting at `start`, open == close.
pub fn bars_from_closes(start: &str, closes: &[f64]) -> Vec<PriceBar> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: start + Days::new(i as u64),
            open: close,
            high: close,
            low: close,
            close,
            volume: Some(1000.0),
        })
        .collect()
}

pub fn exec_config(quantity: i64) -> ExecutionConfig {
    ExecutionConfig {
        quantity,
        timezone: "Asia/Kolkata".parse().unwrap(),
        time: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
    }
}
