//! Order ledger CSV adapter.
//!
//! Writes the simulated trade ledger with a fixed column order. Timestamps
//! render as the local wall clock with the timezone suffix stripped; exit
//! fields of a still-open trade render as empty strings.

use crate::domain::error::SmacrossError;
use crate::domain::position::TradeRecord;
use crate::ports::ledger_port::LedgerPort;
use chrono::DateTime;
use chrono_tz::Tz;
use std::fs;
use std::path::Path;

const OUTPUT_COLUMNS: [&str; 7] = [
    "entry_dt",
    "entry_price",
    "qty",
    "exit_dt",
    "exit_price",
    "pnl",
    "days_held",
];

pub struct CsvLedgerAdapter;

impl CsvLedgerAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvLedgerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_timestamp(dt: &DateTime<Tz>) -> String {
    dt.naive_local().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl LedgerPort for CsvLedgerAdapter {
    fn write(&self, trades: &[TradeRecord], output_path: &Path) -> Result<(), SmacrossError> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut wtr = csv::Writer::from_path(output_path).map_err(|e| SmacrossError::Data {
            reason: format!("failed to open {}: {}", output_path.display(), e),
        })?;

        wtr.write_record(OUTPUT_COLUMNS)
            .map_err(|e| SmacrossError::Data {
                reason: format!("failed to write ledger header: {}", e),
            })?;

        for trade in trades {
            wtr.write_record([
                format_timestamp(&trade.entry_dt),
                trade.entry_price.to_string(),
                trade.quantity.to_string(),
                trade
                    .exit_dt
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_default(),
                trade.exit_price.map(|v| v.to_string()).unwrap_or_default(),
                trade.pnl.map(|v| v.to_string()).unwrap_or_default(),
                trade.days_held.map(|v| v.to_string()).unwrap_or_default(),
            ])
            .map_err(|e| SmacrossError::Data {
                reason: format!("failed to write ledger row: {}", e),
            })?;
        }

        wtr.flush()?;
        Ok(())
    }
}
