//! Regular-market-hours filtering for intraday bars.
//!
//! Exchange-local wall-clock time is reconstructed from `timestamp +
//! gmt_offset`; bars outside 09:30–16:00 (pre/after market) are dropped.
//! Bars with a timestamp chrono cannot represent are dropped as well.

use chrono::{DateTime, Duration, Timelike};

use crate::domain::bar::IntradayBar;

const OPEN_HOUR: u32 = 9;
const OPEN_MINUTE: u32 = 30;
const CLOSE_HOUR: u32 = 16;

pub fn filter_market_hours(bars: Vec<IntradayBar>) -> Vec<IntradayBar> {
    bars.into_iter()
        .filter(|bar| {
            local_hour_minute(bar).is_some_and(|(hour, minute)| {
                (hour > OPEN_HOUR || (hour == OPEN_HOUR && minute >= OPEN_MINUTE))
                    && hour < CLOSE_HOUR
            })
        })
        .collect()
}

fn local_hour_minute(bar: &IntradayBar) -> Option<(u32, u32)> {
    let utc = DateTime::from_timestamp(bar.timestamp, 0)?;
    let local = utc.checked_add_signed(Duration::seconds(bar.gmt_offset))?;
    Some((local.hour(), local.minute()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bar whose exchange-local time is the given hour/minute on 2024-09-19,
    /// with a -4h offset (US Eastern daylight time).
    fn bar_at(hour: u32, minute: u32) -> IntradayBar {
        let offset = -4 * 3600;
        // 2024-09-19 00:00:00 UTC
        let midnight_utc = 1_726_704_000;
        let local_seconds = (hour * 3600 + minute * 60) as i64;
        IntradayBar {
            timestamp: midnight_utc + local_seconds - offset,
            gmt_offset: offset,
            datetime: format!("2024-09-19 {:02}:{:02}:00", hour, minute),
            open: 100.0,
            high: 100.0,
            low: 100.0,
            close: 100.0,
            volume: 1_000,
        }
    }

    #[test]
    fn keeps_bars_inside_market_hours() {
        let kept = filter_market_hours(vec![bar_at(9, 30), bar_at(12, 0), bar_at(15, 59)]);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn drops_premarket_bars() {
        let kept = filter_market_hours(vec![bar_at(4, 0), bar_at(9, 0), bar_at(9, 29)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn drops_bars_at_and_after_close() {
        let kept = filter_market_hours(vec![bar_at(16, 0), bar_at(17, 30), bar_at(20, 0)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn open_boundary_is_inclusive_close_exclusive() {
        let kept = filter_market_hours(vec![bar_at(9, 30), bar_at(15, 59), bar_at(16, 0)]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].datetime, "2024-09-19 09:30:00");
        assert_eq!(kept[1].datetime, "2024-09-19 15:59:00");
    }

    #[test]
    fn offset_is_applied_before_the_window_check() {
        // Same instant, zero offset: local time is 13:30 UTC -> kept;
        // with a -8h offset the local time is 05:30 -> dropped.
        let mut bar = bar_at(13, 30);
        bar.gmt_offset = 0;
        bar.timestamp = 1_726_704_000 + 13 * 3600 + 30 * 60;
        assert_eq!(filter_market_hours(vec![bar.clone()]).len(), 1);

        bar.gmt_offset = -8 * 3600;
        assert!(filter_market_hours(vec![bar]).is_empty());
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_market_hours(vec![]).is_empty());
    }
}
