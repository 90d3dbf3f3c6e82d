//! Bar-data acquisition port trait.

use crate::domain::bar::IntradayBar;
use crate::domain::error::TrendbenchError;

/// Supplies the ordered intraday bar sequence for one symbol. Implementations
/// must return bars sorted by timestamp ascending.
pub trait BarDataPort {
    fn fetch_bars(&self, symbol: &str) -> Result<Vec<IntradayBar>, TrendbenchError>;
}
