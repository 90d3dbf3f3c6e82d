//! Pre-run validation of runtime configuration and scenario definitions.

use crate::domain::error::TrendbenchError;
use crate::domain::scenario::{ScenarioConfig, SellCondition};
use crate::domain::simulator::DEFAULT_TRADE_CAPITAL;
use crate::ports::config_port::ConfigPort;

pub fn validate_run_config(config: &dyn ConfigPort) -> Result<(), TrendbenchError> {
    validate_base_path(config)?;
    validate_format(config)?;
    validate_trade_capital(config)?;
    Ok(())
}

fn validate_base_path(config: &dyn ConfigPort) -> Result<(), TrendbenchError> {
    match config.get_string("data", "base_path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(TrendbenchError::ConfigInvalid {
            section: "data".to_string(),
            key: "base_path".to_string(),
            reason: "base_path must not be empty".to_string(),
        }),
        None => Err(TrendbenchError::ConfigMissing {
            section: "data".to_string(),
            key: "base_path".to_string(),
        }),
    }
}

fn validate_format(config: &dyn ConfigPort) -> Result<(), TrendbenchError> {
    let format = config
        .get_string("data", "format")
        .unwrap_or_else(|| "json".to_string());
    match format.to_lowercase().as_str() {
        "json" | "csv" => Ok(()),
        other => Err(TrendbenchError::ConfigInvalid {
            section: "data".to_string(),
            key: "format".to_string(),
            reason: format!("unsupported format '{}', expected json or csv", other),
        }),
    }
}

fn validate_trade_capital(config: &dyn ConfigPort) -> Result<(), TrendbenchError> {
    let value = config.get_double("simulator", "trade_capital", DEFAULT_TRADE_CAPITAL);
    if value <= 0.0 {
        return Err(TrendbenchError::ConfigInvalid {
            section: "simulator".to_string(),
            key: "trade_capital".to_string(),
            reason: "trade_capital must be positive".to_string(),
        });
    }
    Ok(())
}

pub fn validate_scenarios(scenarios: &[ScenarioConfig]) -> Result<(), TrendbenchError> {
    if scenarios.is_empty() {
        return Err(TrendbenchError::ScenarioInvalid {
            reason: "scenario list is empty".to_string(),
        });
    }

    for scenario in scenarios {
        if scenario.name.trim().is_empty() {
            return Err(TrendbenchError::ScenarioInvalid {
                reason: "scenario name must not be empty".to_string(),
            });
        }
        if scenario.buy.conditions.is_empty() {
            return Err(TrendbenchError::ScenarioInvalid {
                reason: format!("scenario '{}' has no buy conditions", scenario.name),
            });
        }
        if scenario.sell.conditions.is_empty() {
            return Err(TrendbenchError::ScenarioInvalid {
                reason: format!("scenario '{}' has no sell conditions", scenario.name),
            });
        }

        for cond in &scenario.sell.conditions {
            if let SellCondition::PercentageBand {
                profit_threshold,
                loss_threshold,
            } = cond
            {
                if *profit_threshold <= 0.0 || *loss_threshold < 0.0 {
                    return Err(TrendbenchError::ScenarioInvalid {
                        reason: format!(
                            "scenario '{}' has non-positive sell thresholds",
                            scenario.name
                        ),
                    });
                }
                if profit_threshold <= loss_threshold {
                    return Err(TrendbenchError::ScenarioInvalid {
                        reason: format!(
                            "scenario '{}': profit threshold {} must exceed loss threshold {}",
                            scenario.name, profit_threshold, loss_threshold
                        ),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Non-fatal findings: scenarios relying on placeholder behavior.
pub fn scenario_warnings(scenarios: &[ScenarioConfig]) -> Vec<String> {
    scenarios
        .iter()
        .filter(|s| s.uses_indicator_sells())
        .map(|s| {
            format!(
                "scenario '{}' uses indicator sell conditions, which are not \
                 production-ready and always consider the position eligible to sell",
                s.name
            )
        })
        .collect()
}
