//! JSON intraday fixture adapter.
//!
//! Reads `<base_path>/<symbol>.json`, an array of bar objects in the
//! acquisition collaborator's wire format, optionally filtered to regular
//! market hours.

use std::fs;
use std::path::PathBuf;

use crate::adapters::market_hours::filter_market_hours;
use crate::domain::bar::{is_ordered, IntradayBar};
use crate::domain::error::TrendbenchError;
use crate::ports::data_port::BarDataPort;

pub struct IntradayJsonAdapter {
    base_path: PathBuf,
    filter_market_hours: bool,
}

impl IntradayJsonAdapter {
    pub fn new(base_path: PathBuf, filter_market_hours: bool) -> Self {
        Self {
            base_path,
            filter_market_hours,
        }
    }

    fn fixture_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", symbol))
    }
}

impl BarDataPort for IntradayJsonAdapter {
    fn fetch_bars(&self, symbol: &str) -> Result<Vec<IntradayBar>, TrendbenchError> {
        let path = self.fixture_path(symbol);
        let content = fs::read_to_string(&path).map_err(|_| TrendbenchError::NoData {
            symbol: symbol.to_string(),
        })?;

        let mut bars: Vec<IntradayBar> =
            serde_json::from_str(&content).map_err(|e| TrendbenchError::Data {
                reason: format!("failed to parse {}: {}", path.display(), e),
            })?;

        if !is_ordered(&bars) {
            bars.sort_by_key(|b| b.timestamp);
        }

        if self.filter_market_hours {
            bars = filter_market_hours(bars);
        }

        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, symbol: &str, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(format!("{}.json", symbol))).unwrap();
        write!(file, "{}", content).unwrap();
    }

    fn bar_json(timestamp: i64, close: f64) -> String {
        format!(
            r#"{{"timestamp": {timestamp}, "gmtoffset": 0, "datetime": "2024-09-19 12:00:00",
                "open": {close}, "high": {close}, "low": {close}, "close": {close}, "volume": 1000}}"#
        )
    }

    #[test]
    fn fetches_and_sorts_bars() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "[{}, {}]",
            bar_json(1_726_747_200, 101.0),
            bar_json(1_726_747_140, 100.0)
        );
        write_fixture(&dir, "AAPL", &content);

        let adapter = IntradayJsonAdapter::new(dir.path().to_path_buf(), false);
        let bars = adapter.fetch_bars("AAPL").unwrap();

        assert_eq!(bars.len(), 2);
        assert!(bars[0].timestamp < bars[1].timestamp);
        assert_eq!(bars[0].close, 100.0);
    }

    #[test]
    fn missing_fixture_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = IntradayJsonAdapter::new(dir.path().to_path_buf(), false);
        let err = adapter.fetch_bars("MSFT").unwrap_err();
        assert!(matches!(err, TrendbenchError::NoData { symbol } if symbol == "MSFT"));
    }

    #[test]
    fn malformed_json_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(&dir, "AAPL", "{not json");

        let adapter = IntradayJsonAdapter::new(dir.path().to_path_buf(), false);
        let err = adapter.fetch_bars("AAPL").unwrap_err();
        assert!(matches!(err, TrendbenchError::Data { .. }));
    }

    #[test]
    fn empty_array_yields_no_bars() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(&dir, "AAPL", "[]");

        let adapter = IntradayJsonAdapter::new(dir.path().to_path_buf(), false);
        assert!(adapter.fetch_bars("AAPL").unwrap().is_empty());
    }

    #[test]
    fn market_hours_filter_drops_after_hours_bars() {
        let dir = tempfile::tempdir().unwrap();
        // 12:00 UTC is inside the window, 02:00 UTC is not (offset 0).
        let content = format!(
            "[{}, {}]",
            bar_json(1_726_747_200, 100.0), // 2024-09-19 12:00:00 UTC
            bar_json(1_726_711_200, 99.0)   // 2024-09-19 02:00:00 UTC
        );
        write_fixture(&dir, "AAPL", &content);

        let adapter = IntradayJsonAdapter::new(dir.path().to_path_buf(), true);
        let bars = adapter.fetch_bars("AAPL").unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, 100.0);
    }
}
