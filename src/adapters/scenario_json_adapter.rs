//! Scenario-document adapter.
//!
//! Parses the JSON scenario list supplied by the configuration collaborator
//! into domain scenarios. Relation and sell-condition kinds arrive as the
//! wire format's numeric codes; indicator names outside the supported set
//! are rejected here rather than degrading silently inside the core.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::error::TrendbenchError;
use crate::domain::indicator::{IndicatorKey, IndicatorKind};
use crate::domain::scenario::{
    BuyCondition, BuyScenario, Relation, ScenarioConfig, SellCondition, SellScenario,
};

const SELL_PERCENTAGE: i64 = 1;
const SELL_INDICATOR: i64 = 2;

#[derive(Debug, Deserialize)]
struct ScenarioDoc {
    name: String,
    #[serde(default)]
    indicator_buy_scenario: BuyScenarioDoc,
    #[serde(default)]
    indicator_sell_scenario: SellScenarioDoc,
}

#[derive(Debug, Default, Deserialize)]
struct BuyScenarioDoc {
    #[serde(default)]
    conditions: Vec<BuyConditionDoc>,
}

#[derive(Debug, Deserialize)]
struct BuyConditionDoc {
    indicator_name: String,
    indicator_type: i64,
    #[serde(default)]
    indicator_period: usize,
    #[serde(default)]
    indicator_check_value: CheckValueDoc,
}

#[derive(Debug, Default, Deserialize)]
struct SellScenarioDoc {
    #[serde(default)]
    conditions: Vec<SellConditionDoc>,
}

#[derive(Debug, Deserialize)]
struct SellConditionDoc {
    condition_type: i64,
    #[serde(default)]
    profit_threshold: f64,
    #[serde(default)]
    loss_threshold: f64,
    #[serde(default)]
    indicator_name: String,
    #[serde(default)]
    indicator_type: i64,
    #[serde(default)]
    indicator_period: usize,
    #[serde(default)]
    indicator_check_value: CheckValueDoc,
}

/// The comparison target of a condition: either a bare series name ("data"
/// for the raw close series) or a full indicator reference.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CheckValueDoc {
    Name(String),
    Indicator {
        indicator_name: String,
        indicator_period: usize,
    },
}

impl Default for CheckValueDoc {
    fn default() -> Self {
        CheckValueDoc::Name("data".to_string())
    }
}

pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, TrendbenchError> {
    let content = fs::read_to_string(path)?;
    parse_scenarios(&content)
}

pub fn parse_scenarios(content: &str) -> Result<Vec<ScenarioConfig>, TrendbenchError> {
    let docs: Vec<ScenarioDoc> = serde_json::from_str(content)?;
    docs.into_iter().map(scenario_from_doc).collect()
}

fn scenario_from_doc(doc: ScenarioDoc) -> Result<ScenarioConfig, TrendbenchError> {
    let buy_conditions = doc
        .indicator_buy_scenario
        .conditions
        .into_iter()
        .map(|cond| buy_condition_from_doc(&doc.name, cond))
        .collect::<Result<Vec<_>, _>>()?;

    let sell_conditions = doc
        .indicator_sell_scenario
        .conditions
        .into_iter()
        .map(|cond| sell_condition_from_doc(&doc.name, cond))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScenarioConfig {
        name: doc.name,
        buy: BuyScenario {
            conditions: buy_conditions,
        },
        sell: SellScenario {
            conditions: sell_conditions,
        },
    })
}

fn buy_condition_from_doc(
    scenario: &str,
    doc: BuyConditionDoc,
) -> Result<BuyCondition, TrendbenchError> {
    Ok(BuyCondition {
        source: indicator_key(scenario, &doc.indicator_name, doc.indicator_period)?,
        relation: relation_from_code(scenario, doc.indicator_type)?,
        target: target_key(scenario, &doc.indicator_check_value)?,
    })
}

fn sell_condition_from_doc(
    scenario: &str,
    doc: SellConditionDoc,
) -> Result<SellCondition, TrendbenchError> {
    match doc.condition_type {
        SELL_PERCENTAGE => Ok(SellCondition::PercentageBand {
            profit_threshold: doc.profit_threshold,
            loss_threshold: doc.loss_threshold,
        }),
        SELL_INDICATOR => Ok(SellCondition::Indicator {
            source: indicator_key(scenario, &doc.indicator_name, doc.indicator_period)?,
            relation: relation_from_code(scenario, doc.indicator_type)?,
            target: target_key(scenario, &doc.indicator_check_value)?,
        }),
        other => Err(TrendbenchError::ScenarioInvalid {
            reason: format!(
                "scenario '{}': unknown sell condition type {}",
                scenario, other
            ),
        }),
    }
}

fn indicator_key(
    scenario: &str,
    name: &str,
    period: usize,
) -> Result<IndicatorKey, TrendbenchError> {
    let kind = IndicatorKind::from_name(name).ok_or_else(|| TrendbenchError::ScenarioInvalid {
        reason: format!("scenario '{}': unknown indicator '{}'", scenario, name),
    })?;

    if kind == IndicatorKind::RawPrice {
        return Ok(IndicatorKey::raw_price());
    }
    if period == 0 {
        return Err(TrendbenchError::ScenarioInvalid {
            reason: format!(
                "scenario '{}': indicator '{}' requires a positive period",
                scenario, name
            ),
        });
    }
    Ok(IndicatorKey::new(kind, period))
}

fn target_key(scenario: &str, check: &CheckValueDoc) -> Result<IndicatorKey, TrendbenchError> {
    match check {
        CheckValueDoc::Name(name) if name.is_empty() || name.eq_ignore_ascii_case("data") => {
            Ok(IndicatorKey::raw_price())
        }
        CheckValueDoc::Name(name) => Err(TrendbenchError::ScenarioInvalid {
            reason: format!(
                "scenario '{}': check value '{}' needs a period; use an object \
                 with indicator_name and indicator_period",
                scenario, name
            ),
        }),
        CheckValueDoc::Indicator {
            indicator_name,
            indicator_period,
        } => indicator_key(scenario, indicator_name, *indicator_period),
    }
}

fn relation_from_code(scenario: &str, code: i64) -> Result<Relation, TrendbenchError> {
    Relation::from_code(code).ok_or_else(|| TrendbenchError::ScenarioInvalid {
        reason: format!("scenario '{}': unknown relation code {}", scenario, code),
    })
}
