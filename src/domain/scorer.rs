//! Trend scoring: reduces a trade log to one comparable number.
//!
//! The score is a weighted sum of four sub-metrics over the finalized trade
//! log, rounded to 3 decimal places. No upper normalization is applied:
//! scores above 1 are possible and signal an exceptionally strong strategy.

use serde::Serialize;

use crate::domain::transaction::Transaction;

const OCCURRENCE_WEIGHT: f64 = 0.15;
const PROFITABILITY_WEIGHT: f64 = 0.45;
const CONSISTENCY_WEIGHT: f64 = 0.25;
const VARIANCE_WEIGHT: f64 = 0.15;

/// Assumed maximum trade count for occurrence normalization.
const MAX_TRADES_REFERENCE: f64 = 100.0;
/// Fixed notional reference for profitability normalization.
const NOTIONAL_REFERENCE: f64 = 1_000_000.0;

/// Composite score with its sub-metric breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendScore {
    /// Trade count / 100, unbounded above.
    pub occurrence: f64,
    /// Total signed profit / 1,000,000.
    pub profitability: f64,
    /// Win rate; 0 for an empty trade log.
    pub consistency: f64,
    /// 1 - |mean - median| of per-trade percentage profit, floored at 0.
    pub variance: f64,
    /// Weighted sum, rounded to 3 decimals.
    pub score: f64,
}

impl TrendScore {
    /// Score a finalized trade log. Every sub-metric of an empty log is the
    /// neutral value 0; no division is attempted.
    pub fn compute(transactions: &[Transaction]) -> Self {
        if transactions.is_empty() {
            return TrendScore {
                occurrence: 0.0,
                profitability: 0.0,
                consistency: 0.0,
                variance: 0.0,
                score: 0.0,
            };
        }

        let count = transactions.len() as f64;
        let occurrence = count / MAX_TRADES_REFERENCE;

        let total_profit: f64 = transactions.iter().map(Transaction::profit).sum();
        let profitability = total_profit / NOTIONAL_REFERENCE;

        let wins = transactions.iter().filter(|t| t.is_win()).count() as f64;
        let consistency = wins / count;

        let pct_profits: Vec<f64> = transactions.iter().map(Transaction::pct_profit).collect();
        let skew = (mean(&pct_profits) - median(&pct_profits)).abs();
        let variance = (1.0 - skew).max(0.0);

        let score = round3(
            occurrence * OCCURRENCE_WEIGHT
                + profitability * PROFITABILITY_WEIGHT
                + consistency * CONSISTENCY_WEIGHT
                + variance * VARIANCE_WEIGHT,
        );

        TrendScore {
            occurrence,
            profitability,
            consistency,
            variance,
            score,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
