//! Ledger statistics for the console summary.

use crate::domain::position::TradeRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub closed_trades: usize,
    pub open_trades: usize,
    pub trades_won: usize,
    pub trades_lost: usize,
    pub trades_breakeven: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_days_held: f64,
}

impl LedgerSummary {
    /// Pure reduction over the ledger. An empty or all-open ledger yields
    /// zeros, not errors.
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let mut closed_trades = 0usize;
        let mut open_trades = 0usize;
        let mut trades_won = 0usize;
        let mut trades_lost = 0usize;
        let mut trades_breakeven = 0usize;
        let mut total_pnl = 0.0_f64;
        let mut total_days = 0i64;

        for trade in trades {
            match (trade.pnl, trade.days_held) {
                (Some(pnl), Some(days)) => {
                    closed_trades += 1;
                    total_pnl += pnl;
                    total_days += days;
                    if pnl > 0.0 {
                        trades_won += 1;
                    } else if pnl < 0.0 {
                        trades_lost += 1;
                    } else {
                        trades_breakeven += 1;
                    }
                }
                _ => open_trades += 1,
            }
        }

        let win_rate = if closed_trades > 0 {
            trades_won as f64 / closed_trades as f64
        } else {
            0.0
        };

        let avg_days_held = if closed_trades > 0 {
            total_days as f64 / closed_trades as f64
        } else {
            0.0
        };

        LedgerSummary {
            closed_trades,
            open_trades,
            trades_won,
            trades_lost,
            trades_breakeven,
            win_rate,
            total_pnl,
            avg_days_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::execution::{execution_timestamp, ExecutionConfig};
    use chrono::{DateTime, NaiveDate, NaiveTime};
    use chrono_tz::Tz;

    fn stamp(day: u32) -> DateTime<Tz> {
        let config = ExecutionConfig {
            quantity: 10,
            timezone: "Asia/Kolkata".parse().unwrap(),
            time: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        };
        execution_timestamp(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), &config)
    }

    fn closed(entry_day: u32, exit_day: u32, pnl: f64) -> TradeRecord {
        TradeRecord {
            entry_dt: stamp(entry_day),
            entry_price: 100.0,
            quantity: 10,
            exit_dt: Some(stamp(exit_day)),
            exit_price: Some(100.0 + pnl / 10.0),
            pnl: Some(pnl),
            days_held: Some((exit_day - entry_day) as i64),
        }
    }

    fn open(entry_day: u32) -> TradeRecord {
        TradeRecord {
            entry_dt: stamp(entry_day),
            entry_price: 100.0,
            quantity: 10,
            exit_dt: None,
            exit_price: None,
            pnl: None,
            days_held: None,
        }
    }

    #[test]
    fn empty_ledger_is_all_zeros() {
        let summary = LedgerSummary::compute(&[]);
        assert_eq!(summary.closed_trades, 0);
        assert_eq!(summary.open_trades, 0);
        assert!((summary.win_rate - 0.0).abs() < f64::EPSILON);
        assert!((summary.total_pnl - 0.0).abs() < f64::EPSILON);
        assert!((summary.avg_days_held - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_ledger() {
        let trades = vec![
            closed(2, 4, 50.0),
            closed(6, 10, -20.0),
            closed(12, 14, 0.0),
            open(16),
        ];
        let summary = LedgerSummary::compute(&trades);

        assert_eq!(summary.closed_trades, 3);
        assert_eq!(summary.open_trades, 1);
        assert_eq!(summary.trades_won, 1);
        assert_eq!(summary.trades_lost, 1);
        assert_eq!(summary.trades_breakeven, 1);
        assert!((summary.total_pnl - 30.0).abs() < f64::EPSILON);
        assert!((summary.win_rate - 1.0 / 3.0).abs() < 1e-12);
        // durations 2, 4, 2
        assert!((summary.avg_days_held - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn open_only_ledger() {
        let summary = LedgerSummary::compute(&[open(2)]);
        assert_eq!(summary.closed_trades, 0);
        assert_eq!(summary.open_trades, 1);
        assert!((summary.win_rate - 0.0).abs() < f64::EPSILON);
    }
}
