//! Intraday price bar representation.

use serde::{Deserialize, Serialize};

/// One OHLCV observation for a fixed intraday interval, as delivered by the
/// data-acquisition boundary. Sequences are ordered by `timestamp` ascending
/// and immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayBar {
    pub timestamp: i64,
    #[serde(rename = "gmtoffset")]
    pub gmt_offset: i64,
    pub datetime: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Whether the sequence is sorted by timestamp ascending.
pub fn is_ordered(bars: &[IntradayBar]) -> bool {
    bars.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}
