//! Signal-to-order simulation: the entry/exit state machine.
//!
//! Walks the signal sequence, detecting transitions between consecutive
//! bars, and materializes trades with deferred execution: a transition
//! seen at bar i fills at bar i+1's open. The scan covers indices 0..n-1
//! so a lookahead bar always exists; a signal change on the final bar can
//! never fill. Bar 0's previous signal counts as Flat, so the first bar
//! alone never triggers an entry.

use crate::domain::execution::{days_between, execution_timestamp, ExecutionConfig};
use crate::domain::position::{OpenPosition, TradeRecord};
use crate::domain::signal::{Signal, SignalBar};

/// Run the simulation over a signal-complete sequence.
///
/// Returns the ledger in entry order. A position still open after the
/// last bar is flushed as a record with exit fields absent.
pub fn simulate(signals: &[SignalBar], config: &ExecutionConfig) -> Vec<TradeRecord> {
    let mut trades = Vec::new();
    let mut open: Option<OpenPosition> = None;

    for idx in 0..signals.len().saturating_sub(1) {
        let prev = if idx == 0 {
            Signal::Flat
        } else {
            signals[idx - 1].signal
        };
        let curr = signals[idx].signal;
        let next = &signals[idx + 1];

        // entry on a Flat->Long flip; a repeat flip while holding is a no-op
        if prev == Signal::Flat && curr == Signal::Long && open.is_none() {
            open = Some(OpenPosition {
                entry_dt: execution_timestamp(next.bar.date, config),
                entry_price: next.bar.open,
                quantity: config.quantity,
            });
        }

        // exit on a Long->Flat flip; nothing to close means nothing happens
        if prev == Signal::Long && curr == Signal::Flat {
            if let Some(position) = open.take() {
                let exit_dt = execution_timestamp(next.bar.date, config);
                let exit_price = next.bar.open;
                let pnl = (exit_price - position.entry_price) * position.quantity as f64;
                let days_held = days_between(&position.entry_dt, &exit_dt);

                trades.push(TradeRecord {
                    entry_dt: position.entry_dt,
                    entry_price: position.entry_price,
                    quantity: position.quantity,
                    exit_dt: Some(exit_dt),
                    exit_price: Some(exit_price),
                    pnl: Some(pnl),
                    days_held: Some(days_held),
                });
            }
        }
    }

    if let Some(position) = open {
        trades.push(TradeRecord {
            entry_dt: position.entry_dt,
            entry_price: position.entry_price,
            quantity: position.quantity,
            exit_dt: None,
            exit_price: None,
            pnl: None,
            days_held: None,
        });
    }

    trades
}
