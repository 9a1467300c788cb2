//! Open position state and the output ledger record.

use chrono::DateTime;
use chrono_tz::Tz;

/// The simulator's in-flight position. At most one exists at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPosition {
    pub entry_dt: DateTime<Tz>,
    pub entry_price: f64,
    pub quantity: i64,
}

/// One row of the order ledger. Exit fields are absent while the trade is
/// still open when the series ends.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub entry_dt: DateTime<Tz>,
    pub entry_price: f64,
    pub quantity: i64,
    pub exit_dt: Option<DateTime<Tz>>,
    pub exit_price: Option<f64>,
    pub pnl: Option<f64>,
    pub days_held: Option<i64>,
}

impl TradeRecord {
    pub fn is_open(&self) -> bool {
        self.exit_dt.is_none()
    }
}
