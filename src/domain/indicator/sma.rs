//! Simple Moving Average.
//!
//! SMA(n) at index i = mean of the last n closes ending at i.
//! Warmup: first (n-1) indices are NaN. O(n) sliding-sum implementation.

use crate::domain::bar::IntradayBar;

pub fn compute(bars: &[IntradayBar], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; bars.len()];
    }

    let mut values = Vec::with_capacity(bars.len());
    let mut window_sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        window_sum += bar.close;
        if i >= period {
            window_sum -= bars[i - period].close;
        }

        if i >= period - 1 {
            values.push(window_sum / period as f64);
        } else {
            values.push(f64::NAN);
        }
    }

    values
}
