//! Relative Strength Index.
//!
//! Uses Wilder's smoothing for average gain/loss:
//! - First average: simple mean of gains/losses over the first n changes
//! - Subsequent: avg = (prev_avg * (n-1) + current) / n
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss)), 100 if avg_loss == 0.
//! Warmup: first n indices are NaN (n price changes are needed).

use crate::domain::bar::IntradayBar;

pub fn compute(bars: &[IntradayBar], period: usize) -> Vec<f64> {
    if period == 0 || bars.len() < 2 {
        return vec![f64::NAN; bars.len()];
    }

    let mut values = vec![f64::NAN; bars.len().min(period)];
    if bars.len() <= period {
        return values;
    }

    let changes: Vec<f64> = bars.windows(2).map(|w| w[1].close - w[0].close).collect();

    let mut avg_gain = changes[..period]
        .iter()
        .map(|&c| if c > 0.0 { c } else { 0.0 })
        .sum::<f64>()
        / period as f64;
    let mut avg_loss = changes[..period]
        .iter()
        .map(|&c| if c < 0.0 { -c } else { 0.0 })
        .sum::<f64>()
        / period as f64;
    values.push(rsi_from_averages(avg_gain, avg_loss));

    for &change in &changes[period..] {
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        values.push(rsi_from_averages(avg_gain, avg_loss));
    }

    values
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bar::IntradayBar;

    fn make_bars(closes: &[f64]) -> Vec<IntradayBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| IntradayBar {
                timestamp: 1_700_000_000 + i as i64 * 60,
                gmt_offset: 0,
                datetime: format!("2024-01-02 10:{:02}:00", i),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1_000,
            })
            .collect()
    }

    #[test]
    fn rsi_empty_bars() {
        assert!(compute(&[], 14).is_empty());
    }

    #[test]
    fn rsi_single_bar_is_nan() {
        let series = compute(&make_bars(&[100.0]), 14);
        assert_eq!(series.len(), 1);
        assert!(series[0].is_nan());
    }

    #[test]
    fn rsi_warmup_is_nan() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + (i % 5) as f64).collect();
        let series = compute(&make_bars(&closes), 14);

        assert_eq!(series.len(), 15);
        for v in &series[..14] {
            assert!(v.is_nan());
        }
        assert!(!series[14].is_nan());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let series = compute(&make_bars(&closes), 14);
        assert!((series[14] - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let series = compute(&make_bars(&closes), 14);
        assert!((series[14] - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_stays_in_range() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 2.0)
            .collect();
        let series = compute(&make_bars(&closes), 14);

        for v in series.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(v), "RSI {} out of range", v);
        }
    }

    #[test]
    fn rsi_constant_prices_is_100() {
        // No losses at all: avg_loss stays 0.
        let series = compute(&make_bars(&[100.0; 16]), 14);
        assert!((series[14] - 100.0).abs() < f64::EPSILON);
        assert!((series[15] - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_period_0_is_all_nan() {
        let series = compute(&make_bars(&[100.0, 101.0]), 0);
        assert!(series.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_wilder_smoothing_carries_forward() {
        // 3-period RSI over a gain-then-loss sequence stays strictly inside
        // (0, 100) once both averages are non-zero.
        let series = compute(&make_bars(&[10.0, 11.0, 12.0, 13.0, 12.0, 13.0]), 3);
        assert!(series[4] > 0.0 && series[4] < 100.0);
        assert!(series[5] > series[4]);
    }
}
