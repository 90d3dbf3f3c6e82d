//! Scenario model: declarative buy/sell rule sets.
//!
//! A scenario names one strategy variant: a buy scenario (conjunction of
//! entry conditions) and a sell scenario (disjunction of exit conditions).

use crate::domain::indicator::{IndicatorKey, IndicatorKind};

/// How a source series relates to a target series at one bar index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Over,
    Under,
    CrossUp,
    CrossDown,
}

impl Relation {
    /// Resolve a wire-format relation code (1-4).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Relation::Over),
            2 => Some(Relation::Under),
            3 => Some(Relation::CrossUp),
            4 => Some(Relation::CrossDown),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Relation::Over => 1,
            Relation::Under => 2,
            Relation::CrossUp => 3,
            Relation::CrossDown => 4,
        }
    }
}

/// One entry condition: source series vs target series under a relation.
/// The target may be the raw close-price series ([`IndicatorKey::raw_price`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyCondition {
    pub source: IndicatorKey,
    pub relation: Relation,
    pub target: IndicatorKey,
}

/// Conjunction of entry conditions: all must hold for a buy signal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuyScenario {
    pub conditions: Vec<BuyCondition>,
}

/// One exit condition. Any satisfied condition triggers a sell.
#[derive(Debug, Clone, PartialEq)]
pub enum SellCondition {
    /// Exit when the price leaves a band anchored at the entry price.
    /// Thresholds are multipliers: 1.07 sells at +7%, 0.96 at -4%.
    PercentageBand {
        profit_threshold: f64,
        loss_threshold: f64,
    },
    /// Indicator-relation exit. Not functionally implemented: evaluates as
    /// always eligible to sell. Scenario validation flags any use.
    Indicator {
        source: IndicatorKey,
        relation: Relation,
        target: IndicatorKey,
    },
}

/// Disjunction of exit conditions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SellScenario {
    pub conditions: Vec<SellCondition>,
}

/// One named strategy definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    pub buy: BuyScenario,
    pub sell: SellScenario,
}

impl ScenarioConfig {
    /// Whether any sell condition relies on the unimplemented indicator exit.
    pub fn uses_indicator_sells(&self) -> bool {
        self.sell
            .conditions
            .iter()
            .any(|c| matches!(c, SellCondition::Indicator { .. }))
    }
}

/// Built-in single-trend scenarios used when no scenario document is given.
pub fn predefined_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            name: "SMA_14_Under".into(),
            buy: BuyScenario {
                conditions: vec![BuyCondition {
                    source: IndicatorKey::new(IndicatorKind::Sma, 14),
                    relation: Relation::Under,
                    target: IndicatorKey::raw_price(),
                }],
            },
            sell: SellScenario {
                conditions: vec![SellCondition::PercentageBand {
                    profit_threshold: 1.07,
                    loss_threshold: 0.96,
                }],
            },
        },
        ScenarioConfig {
            name: "SMA_20_Under".into(),
            buy: BuyScenario {
                conditions: vec![BuyCondition {
                    source: IndicatorKey::new(IndicatorKind::Sma, 20),
                    relation: Relation::Under,
                    target: IndicatorKey::raw_price(),
                }],
            },
            sell: SellScenario {
                conditions: vec![SellCondition::PercentageBand {
                    profit_threshold: 1.05,
                    loss_threshold: 0.97,
                }],
            },
        },
    ]
}
