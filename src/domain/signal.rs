//! Trend signal derivation from the moving-average crossover.

use crate::domain::ohlcv::PriceBar;
use crate::domain::sma::{calculate_sma, SmaPoint};
use crate::domain::strategy::StrategyParams;

/// Binary trend state per bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Flat,
    Long,
}

impl Signal {
    pub fn is_long(&self) -> bool {
        matches!(self, Signal::Long)
    }
}

/// A price bar extended with both averages and the derived signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBar {
    pub bar: PriceBar,
    pub fast: SmaPoint,
    pub slow: SmaPoint,
    pub signal: Signal,
}

/// Derive the signal sequence for a price series.
///
/// Signal is `Long` iff both averages are valid and fast > slow strictly.
/// Warmup bars and exact ties are `Flat` — an invalid average never
/// compares as greater.
pub fn compute_signals(bars: &[PriceBar], params: &StrategyParams) -> Vec<SignalBar> {
    let fast = calculate_sma(bars, params.fast);
    let slow = calculate_sma(bars, params.slow);

    bars.iter()
        .zip(fast)
        .zip(slow)
        .map(|((bar, fast), slow)| {
            let signal = if fast.valid && slow.valid && fast.value > slow.value {
                Signal::Long
            } else {
                Signal::Flat
            };
            SignalBar {
                bar: bar.clone(),
                fast,
                slow,
                signal,
            }
        })
        .collect()
}
