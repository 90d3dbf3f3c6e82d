//! Backtest simulator: a two-state walk over the bar sequence.
//!
//! States are Flat (no open position) and InPosition (one open position
//! awaiting exit). The walk starts at index 1: cross relations need a
//! previous bar, so index 0 is never evaluated and sequences shorter than
//! two bars produce an empty trade log.

use crate::domain::bar::IntradayBar;
use crate::domain::indicator::IndicatorCache;
use crate::domain::scenario::ScenarioConfig;
use crate::domain::scenario_eval::{evaluate_buy, evaluate_sell};
use crate::domain::transaction::{IdAllocator, Transaction, TrendId};

pub const DEFAULT_TRADE_CAPITAL: f64 = 100_000.0;

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorParams {
    /// Fixed notional allocated per trade; volume = floor(trade_capital / price).
    pub trade_capital: f64,
}

impl Default for SimulatorParams {
    fn default() -> Self {
        SimulatorParams {
            trade_capital: DEFAULT_TRADE_CAPITAL,
        }
    }
}

struct OpenPosition {
    date_bought: String,
    price_bought: f64,
    volume: i64,
}

/// Walk the bars once under one scenario, producing the ordered trade log.
///
/// A position is opened only when every buy condition holds, and closed by
/// the first qualifying sell evaluated on a later bar. A position still open
/// after the last bar is discarded.
pub fn run_simulation(
    bars: &[IntradayBar],
    scenario: &ScenarioConfig,
    cache: &IndicatorCache,
    trend_id: TrendId,
    params: &SimulatorParams,
    ids: &mut IdAllocator,
) -> Vec<Transaction> {
    let mut log = Vec::new();
    let mut open: Option<OpenPosition> = None;

    for (i, bar) in bars.iter().enumerate().skip(1) {
        match open {
            None => {
                if evaluate_buy(&scenario.buy, cache, i) {
                    let volume = (params.trade_capital / bar.close).floor() as i64;
                    if volume > 0 {
                        open = Some(OpenPosition {
                            date_bought: bar.datetime.clone(),
                            price_bought: bar.close,
                            volume,
                        });
                    }
                }
            }
            Some(ref position) => {
                if evaluate_sell(&scenario.sell, position.price_bought, bar.close) {
                    log.push(Transaction {
                        id: ids.transaction_id(),
                        trend_id,
                        date_bought: position.date_bought.clone(),
                        price_bought: position.price_bought,
                        date_sold: bar.datetime.clone(),
                        price_sold: bar.close,
                        volume: position.volume,
                    });
                    open = None;
                }
            }
        }
    }

    log
}
