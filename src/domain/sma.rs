//! Trailing simple moving average over closing price.
//!
//! O(n) sliding window: running sum, subtract the bar leaving the window.
//! Warmup: first (n-1) bars are invalid.

use crate::domain::ohlcv::PriceBar;
use chrono::NaiveDate;

/// A single point of an average series. `value` is meaningless while
/// `valid` is false; consumers must gate on the flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmaPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

pub fn calculate_sma(bars: &[PriceBar], period: usize) -> Vec<SmaPoint> {
    if period == 0 || bars.is_empty() {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(bars.len());
    let mut window_sum: f64 = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        window_sum += bar.close;
        if i >= period {
            window_sum -= bars[i - period].close;
        }

        let valid = i >= period - 1;
        let sma = if valid { window_sum / period as f64 } else { 0.0 };

        values.push(SmaPoint {
            date: bar.date,
            valid,
            value: sma,
        });
    }

    values
}
