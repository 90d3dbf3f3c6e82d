//! Technical indicator identities, dispatch, and the per-scenario cache.
//!
//! An indicator is identified by `(kind, period)`. One [`IndicatorCache`] is
//! built per scenario evaluation from the identities its conditions reference,
//! computing each identity at most once. Warm-up indices (and any index with
//! insufficient history) hold `f64::NAN`, which fails every relation and so
//! can never produce a signal.

pub mod sma;
pub mod rsi;
pub mod willr;

use std::collections::HashMap;
use std::fmt;

use crate::domain::bar::IntradayBar;
use crate::domain::scenario::{ScenarioConfig, SellCondition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma,
    Rsi,
    WillR,
    /// The unmodified close-price series (period is irrelevant, fixed at 0).
    RawPrice,
}

impl IndicatorKind {
    /// Resolve a wire-format indicator name. Returns `None` for names outside
    /// the supported set; callers at the parsing boundary turn that into a
    /// configuration error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SMA" => Some(IndicatorKind::Sma),
            "RSI" => Some(IndicatorKind::Rsi),
            "WILLR" => Some(IndicatorKind::WillR),
            "DATA" => Some(IndicatorKind::RawPrice),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::WillR => "WILLR",
            IndicatorKind::RawPrice => "DATA",
        }
    }
}

/// Cache identity of one indicator series: `(kind, period)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorKey {
    pub kind: IndicatorKind,
    pub period: usize,
}

impl IndicatorKey {
    pub fn new(kind: IndicatorKind, period: usize) -> Self {
        Self { kind, period }
    }

    /// The raw close-price series identity.
    pub fn raw_price() -> Self {
        Self {
            kind: IndicatorKind::RawPrice,
            period: 0,
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IndicatorKind::RawPrice => write!(f, "DATA"),
            kind => write!(f, "{}({})", kind.name(), self.period),
        }
    }
}

fn compute(key: IndicatorKey, bars: &[IntradayBar]) -> Vec<f64> {
    match key.kind {
        IndicatorKind::Sma => sma::compute(bars, key.period),
        IndicatorKind::Rsi => rsi::compute(bars, key.period),
        IndicatorKind::WillR => willr::compute(bars, key.period),
        IndicatorKind::RawPrice => bars.iter().map(|b| b.close).collect(),
    }
}

/// Indicator series cache scoped to one scenario evaluation. Never shared
/// across scenario runs; concurrent runs over the same bars each build their
/// own.
#[derive(Debug, Default)]
pub struct IndicatorCache {
    series: HashMap<IndicatorKey, Vec<f64>>,
}

impl IndicatorCache {
    /// Compute every identity referenced by the scenario's buy and sell
    /// conditions (sources and targets), each exactly once.
    pub fn build(bars: &[IntradayBar], scenario: &ScenarioConfig) -> Self {
        let mut cache = IndicatorCache::default();

        for cond in &scenario.buy.conditions {
            cache.insert(cond.source, bars);
            cache.insert(cond.target, bars);
        }
        for cond in &scenario.sell.conditions {
            if let SellCondition::Indicator { source, target, .. } = cond {
                cache.insert(*source, bars);
                cache.insert(*target, bars);
            }
        }

        cache
    }

    fn insert(&mut self, key: IndicatorKey, bars: &[IntradayBar]) {
        self.series
            .entry(key)
            .or_insert_with(|| compute(key, bars));
    }

    pub fn get(&self, key: IndicatorKey) -> Option<&[f64]> {
        self.series.get(&key).map(Vec::as_slice)
    }

    /// Series value at one index. NaN for an unknown identity or an index
    /// outside the series; both degrade to "no signal" in the evaluator.
    pub fn value(&self, key: IndicatorKey, index: usize) -> f64 {
        match self.series.get(&key) {
            Some(series) => series.get(index).copied().unwrap_or(f64::NAN),
            None => f64::NAN,
        }
    }

    /// Number of distinct cached series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}
