#![allow(dead_code)]

use std::cell::RefCell;

use trendbench::domain::bar::IntradayBar;
use trendbench::domain::error::TrendbenchError;
use trendbench::domain::indicator::{IndicatorKey, IndicatorKind};
use trendbench::domain::pipeline::TrendScoreResult;
use trendbench::domain::scenario::{
    BuyCondition, BuyScenario, Relation, ScenarioConfig, SellCondition, SellScenario,
};
use trendbench::ports::store_port::ScoreStorePort;

/// In-memory stand-in for the persistence collaborator.
pub struct MemoryStore {
    pub saved: RefCell<Vec<(String, Vec<TrendScoreResult>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            saved: RefCell::new(Vec::new()),
        }
    }
}

impl ScoreStorePort for MemoryStore {
    fn save_results(
        &self,
        symbol: &str,
        results: &[TrendScoreResult],
    ) -> Result<(), TrendbenchError> {
        self.saved
            .borrow_mut()
            .push((symbol.to_string(), results.to_vec()));
        Ok(())
    }
}

/// One-minute bars with the given closes, flat high/low around the close.
pub fn make_bars(closes: &[f64]) -> Vec<IntradayBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let hour = 10 + i / 60;
            let minute = i % 60;
            IntradayBar {
                timestamp: 1_726_747_200 + i as i64 * 60,
                gmt_offset: 0,
                datetime: format!("2024-09-19 {:02}:{:02}:00", hour, minute),
                open: close,
                high: close + 0.5,
                low: close - 0.5,
                close,
                volume: 1_000,
            }
        })
        .collect()
}

/// Buy when the close is under SMA(period); sell on a percentage band.
pub fn close_under_sma_scenario(
    name: &str,
    period: usize,
    profit_threshold: f64,
    loss_threshold: f64,
) -> ScenarioConfig {
    ScenarioConfig {
        name: name.into(),
        buy: BuyScenario {
            conditions: vec![BuyCondition {
                source: IndicatorKey::raw_price(),
                relation: Relation::Under,
                target: IndicatorKey::new(IndicatorKind::Sma, period),
            }],
        },
        sell: SellScenario {
            conditions: vec![SellCondition::PercentageBand {
                profit_threshold,
                loss_threshold,
            }],
        },
    }
}

/// Linearly decreasing closes: start, start-step, ...
pub fn decreasing_closes(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start - step * i as f64).collect()
}
