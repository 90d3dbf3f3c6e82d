//! CSV bar-file adapter.
//!
//! Reads `<base_path>/<symbol>.csv` with a header row of
//! `timestamp,gmtoffset,datetime,open,high,low,close,volume`.

use std::fs;
use std::path::PathBuf;

use crate::adapters::market_hours::filter_market_hours;
use crate::domain::bar::{is_ordered, IntradayBar};
use crate::domain::error::TrendbenchError;
use crate::ports::data_port::BarDataPort;

pub struct CsvBarsAdapter {
    base_path: PathBuf,
    filter_market_hours: bool,
}

impl CsvBarsAdapter {
    pub fn new(base_path: PathBuf, filter_market_hours: bool) -> Self {
        Self {
            base_path,
            filter_market_hours,
        }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<T, TrendbenchError>
where
    T::Err: std::fmt::Display,
{
    record
        .get(index)
        .ok_or_else(|| TrendbenchError::Data {
            reason: format!("missing {} column", name),
        })?
        .trim()
        .parse()
        .map_err(|e| TrendbenchError::Data {
            reason: format!("invalid {} value: {}", name, e),
        })
}

impl BarDataPort for CsvBarsAdapter {
    fn fetch_bars(&self, symbol: &str) -> Result<Vec<IntradayBar>, TrendbenchError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|_| TrendbenchError::NoData {
            symbol: symbol.to_string(),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| TrendbenchError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            bars.push(IntradayBar {
                timestamp: parse_field(&record, 0, "timestamp")?,
                gmt_offset: parse_field(&record, 1, "gmtoffset")?,
                datetime: record
                    .get(2)
                    .ok_or_else(|| TrendbenchError::Data {
                        reason: "missing datetime column".into(),
                    })?
                    .to_string(),
                open: parse_field(&record, 3, "open")?,
                high: parse_field(&record, 4, "high")?,
                low: parse_field(&record, 5, "low")?,
                close: parse_field(&record, 6, "close")?,
                volume: parse_field(&record, 7, "volume")?,
            });
        }

        if !is_ordered(&bars) {
            bars.sort_by_key(|b| b.timestamp);
        }

        if self.filter_market_hours {
            bars = filter_market_hours(bars);
        }

        Ok(bars)
    }
}
