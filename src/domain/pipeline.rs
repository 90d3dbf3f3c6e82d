//! Scenario scoring pipeline.
//!
//! Evaluates a list of scenarios strictly sequentially against one immutable
//! bar sequence. Each scenario gets its own indicator cache; caches are
//! never shared across scenario runs.

use serde::Serialize;

use crate::domain::bar::IntradayBar;
use crate::domain::indicator::IndicatorCache;
use crate::domain::scenario::ScenarioConfig;
use crate::domain::scorer::TrendScore;
use crate::domain::simulator::{run_simulation, SimulatorParams};
use crate::domain::transaction::{IdAllocator, Transaction, TrendId};

/// Output unit per scenario per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendScoreResult {
    pub trend_id: TrendId,
    pub scenario_name: String,
    pub score: f64,
    pub breakdown: TrendScore,
    pub transactions: Vec<Transaction>,
}

/// Run every scenario over the bars and score its trade log.
pub fn score_scenarios(
    bars: &[IntradayBar],
    scenarios: &[ScenarioConfig],
    params: &SimulatorParams,
) -> Vec<TrendScoreResult> {
    let mut ids = IdAllocator::new();

    scenarios
        .iter()
        .map(|scenario| {
            let trend_id = ids.trend_id();
            let cache = IndicatorCache::build(bars, scenario);
            let transactions =
                run_simulation(bars, scenario, &cache, trend_id, params, &mut ids);
            let breakdown = TrendScore::compute(&transactions);

            TrendScoreResult {
                trend_id,
                scenario_name: scenario.name.clone(),
                score: breakdown.score,
                breakdown,
                transactions,
            }
        })
        .collect()
}
