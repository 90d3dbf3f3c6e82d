//! Williams %R range oscillator.
//!
//! %R(n) at index i = (highest_high - close) / (highest_high - lowest_low) * -100
//! over the trailing n bars ending at i. Range -100..0.
//! Warmup: first (n-1) indices are NaN. A flat window (high == low) yields 0.

use crate::domain::bar::IntradayBar;

pub fn compute(bars: &[IntradayBar], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; bars.len()];
    }

    let mut values = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if i + 1 < period {
            values.push(f64::NAN);
            continue;
        }

        let window = &bars[i + 1 - period..=i];
        let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);

        let range = highest - lowest;
        if range == 0.0 {
            values.push(0.0);
        } else {
            values.push((highest - bar.close) / range * -100.0);
        }
    }

    values
}
