//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_bars_adapter::CsvBarsAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::intraday_json_adapter::IntradayJsonAdapter;
use crate::adapters::json_store_adapter::JsonStoreAdapter;
use crate::adapters::scenario_json_adapter;
use crate::domain::config_validation::{
    scenario_warnings, validate_run_config, validate_scenarios,
};
use crate::domain::error::TrendbenchError;
use crate::domain::pipeline::score_scenarios;
use crate::domain::scenario::{predefined_scenarios, ScenarioConfig};
use crate::domain::simulator::{SimulatorParams, DEFAULT_TRADE_CAPITAL};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::BarDataPort;
use crate::ports::store_port::ScoreStorePort;

#[derive(Parser, Debug)]
#[command(name = "trendbench", about = "Trading-scenario backtest scorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score scenarios against a symbol's intraday data
    Score {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        symbol: String,
        /// Scenario document; the built-in scenarios are used when omitted
        #[arg(long)]
        scenarios: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a scenario document
    Validate {
        #[arg(long)]
        scenarios: PathBuf,
    },
    /// Show the data range for a symbol
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        symbol: String,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Score {
            config,
            symbol,
            scenarios,
            output,
        } => run_score(&config, &symbol, scenarios.as_ref(), output.as_ref()),
        Command::Validate { scenarios } => run_validate(&scenarios),
        Command::Info { config, symbol } => run_info(&config, &symbol),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TrendbenchError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn build_data_port(adapter: &FileConfigAdapter) -> Box<dyn BarDataPort> {
    let base_path = PathBuf::from(
        adapter
            .get_string("data", "base_path")
            .unwrap_or_else(|| ".".to_string()),
    );
    let filter = adapter.get_bool("data", "filter_market_hours", false);
    let format = adapter
        .get_string("data", "format")
        .unwrap_or_else(|| "json".to_string());

    match format.to_lowercase().as_str() {
        "csv" => Box::new(CsvBarsAdapter::new(base_path, filter)),
        _ => Box::new(IntradayJsonAdapter::new(base_path, filter)),
    }
}

fn load_scenario_list(path: Option<&PathBuf>) -> Result<Vec<ScenarioConfig>, TrendbenchError> {
    match path {
        Some(path) => {
            eprintln!("Loading scenarios from {}", path.display());
            scenario_json_adapter::load_scenarios(path)
        }
        None => {
            eprintln!("Using built-in scenarios");
            Ok(predefined_scenarios())
        }
    }
}

fn run_score(
    config_path: &PathBuf,
    symbol: &str,
    scenarios_path: Option<&PathBuf>,
    output_override: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let scenarios = match load_scenario_list(scenarios_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Err(e) = validate_scenarios(&scenarios) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    for warning in scenario_warnings(&scenarios) {
        eprintln!("warning: {warning}");
    }

    let data_port = build_data_port(&adapter);
    eprintln!("Fetching intraday data for {symbol}");
    let bars = match data_port.fetch_bars(symbol) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} bars", bars.len());

    let params = SimulatorParams {
        trade_capital: adapter.get_double("simulator", "trade_capital", DEFAULT_TRADE_CAPITAL),
    };

    eprintln!("Scoring {} scenarios", scenarios.len());
    let results = score_scenarios(&bars, &scenarios, &params);

    println!("{:<24} {:>8} {:>8}", "scenario", "score", "trades");
    for result in &results {
        println!(
            "{:<24} {:>8.3} {:>8}",
            result.scenario_name,
            result.score,
            result.transactions.len()
        );
    }

    let output_path = output_override
        .cloned()
        .or_else(|| adapter.get_string("output", "path").map(PathBuf::from));

    if let Some(path) = output_path {
        let store = JsonStoreAdapter::new(path.clone());
        if let Err(e) = store.save_results(symbol, &results) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Results written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_validate(scenarios_path: &PathBuf) -> ExitCode {
    eprintln!("Validating {}", scenarios_path.display());

    let scenarios = match scenario_json_adapter::load_scenarios(scenarios_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Err(e) = validate_scenarios(&scenarios) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    for warning in scenario_warnings(&scenarios) {
        eprintln!("warning: {warning}");
    }

    println!("{} scenarios OK", scenarios.len());
    ExitCode::SUCCESS
}

fn run_info(config_path: &PathBuf, symbol: &str) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let data_port = build_data_port(&adapter);
    let bars = match data_port.fetch_bars(symbol) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => {
            println!(
                "{}: {} bars, {} .. {}",
                symbol,
                bars.len(),
                first.datetime,
                last.datetime
            );
        }
        _ => println!("{}: no bars", symbol),
    }

    ExitCode::SUCCESS
}
