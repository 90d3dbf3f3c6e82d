//! Scenario evaluation against cached indicator series.
//!
//! # Evaluation semantics
//!
//! - Buy: AND over conditions, short-circuits on first `false`
//! - Sell: OR over conditions, short-circuits on first `true`
//! - `CrossUp`/`CrossDown`: require `index >= 1`, return `false` at index 0
//! - NaN operands (warm-up indices, unknown identities) fail every relation

use crate::domain::indicator::{IndicatorCache, IndicatorKey};
use crate::domain::scenario::{BuyScenario, Relation, SellCondition, SellScenario};

/// True only if every buy condition holds at `index`.
pub fn evaluate_buy(scenario: &BuyScenario, cache: &IndicatorCache, index: usize) -> bool {
    if scenario.conditions.is_empty() {
        return false;
    }

    scenario.conditions.iter().all(|cond| {
        relation_holds(cache, cond.source, cond.relation, cond.target, index)
    })
}

fn relation_holds(
    cache: &IndicatorCache,
    source: IndicatorKey,
    relation: Relation,
    target: IndicatorKey,
    index: usize,
) -> bool {
    match relation {
        Relation::Over => cache.value(source, index) > cache.value(target, index),
        Relation::Under => cache.value(source, index) < cache.value(target, index),
        Relation::CrossUp => {
            if index == 0 {
                return false;
            }
            cache.value(source, index - 1) < cache.value(target, index - 1)
                && cache.value(source, index) >= cache.value(target, index)
        }
        Relation::CrossDown => {
            if index == 0 {
                return false;
            }
            cache.value(source, index - 1) > cache.value(target, index - 1)
                && cache.value(source, index) <= cache.value(target, index)
        }
    }
}

/// True if any sell condition is satisfied for a position opened at
/// `entry_price` with the current close at `current_price`.
pub fn evaluate_sell(scenario: &SellScenario, entry_price: f64, current_price: f64) -> bool {
    scenario.conditions.iter().any(|cond| match cond {
        SellCondition::PercentageBand {
            profit_threshold,
            loss_threshold,
        } => {
            current_price >= entry_price * profit_threshold
                || current_price <= entry_price * loss_threshold
        }
        // Placeholder: indicator exits are not implemented and always
        // consider the position eligible to sell.
        SellCondition::Indicator { .. } => true,
    })
}
