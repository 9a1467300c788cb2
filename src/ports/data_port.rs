//! Price data access port trait.

use crate::domain::error::SmacrossError;
use crate::domain::ohlcv::PriceBar;

/// Supplies a cleaned price series: ascending by date, duplicate dates
/// removed, numeric fields coerced. The simulator never validates input
/// itself.
pub trait DataPort {
    fn fetch_series(&self) -> Result<Vec<PriceBar>, SmacrossError>;
}
