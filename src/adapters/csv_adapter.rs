//! CSV price data adapter.
//!
//! Loads a raw daily OHLCV file and cleans it: exact header check, rows
//! with unparseable OHLC fields dropped, sort ascending by date, duplicate
//! dates dropped keeping the first occurrence. Volume may be empty.

use crate::domain::error::SmacrossError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

const REQUIRED_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DataPort for CsvAdapter {
    fn fetch_series(&self) -> Result<Vec<PriceBar>, SmacrossError> {
        let content = fs::read_to_string(&self.path).map_err(|e| SmacrossError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());

        let headers = rdr.headers().map_err(|e| SmacrossError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;
        let found: Vec<&str> = headers.iter().map(str::trim).collect();
        if found != REQUIRED_COLUMNS {
            return Err(SmacrossError::Data {
                reason: format!(
                    "columns mismatch: found [{}], required [{}]",
                    found.join(","),
                    REQUIRED_COLUMNS.join(","),
                ),
            });
        }

        let mut bars = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| SmacrossError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| SmacrossError::Data {
                reason: "missing date field".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                SmacrossError::Data {
                    reason: format!("invalid date {:?}: {}", date_str, e),
                }
            })?;

            // a row with a broken OHLC field is dropped, not fatal
            let ohlc = (
                parse_field(&record, 1),
                parse_field(&record, 2),
                parse_field(&record, 3),
                parse_field(&record, 4),
            );
            let (open, high, low, close) = match ohlc {
                (Some(open), Some(high), Some(low), Some(close)) => (open, high, low, close),
                _ => continue,
            };

            let volume = parse_field(&record, 5);

            bars.push(PriceBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Ok(bars)
    }
}

fn parse_field(record: &csv::StringRecord, index: usize) -> Option<f64> {
    let value: f64 = record.get(index)?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
