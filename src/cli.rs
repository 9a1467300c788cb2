//! CLI definition and dispatch.

use chrono::NaiveTime;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_ledger_adapter::CsvLedgerAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::validate_run_config;
use crate::domain::error::SmacrossError;
use crate::domain::execution::ExecutionConfig;
use crate::domain::metrics::LedgerSummary;
use crate::domain::signal::compute_signals;
use crate::domain::simulator::simulate;
use crate::domain::strategy::StrategyParams;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::ledger_port::LedgerPort;

pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
pub const DEFAULT_EXECUTION_TIME: &str = "09:15";

#[derive(Parser, Debug)]
#[command(name = "smacross", about = "SMA crossover order simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the signal and order simulation pipeline
    Run {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the date range of the configured price data
    Info {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run { config, output } => run_simulation(&config, output.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::Info { config } => run_info(&config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SmacrossError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_strategy_params(config: &dyn ConfigPort) -> Result<StrategyParams, SmacrossError> {
    Ok(StrategyParams {
        fast: require_window(config, "fast")?,
        slow: require_window(config, "slow")?,
    })
}

fn require_window(config: &dyn ConfigPort, key: &str) -> Result<usize, SmacrossError> {
    let raw = config
        .get_string("strategy", key)
        .ok_or_else(|| SmacrossError::ConfigMissing {
            section: "strategy".into(),
            key: key.into(),
        })?;

    match raw.trim().parse::<usize>() {
        Ok(window) if window >= 1 => Ok(window),
        _ => Err(SmacrossError::ConfigInvalid {
            section: "strategy".into(),
            key: key.into(),
            reason: "must be a positive integer".into(),
        }),
    }
}

pub fn build_execution_config(config: &dyn ConfigPort) -> Result<ExecutionConfig, SmacrossError> {
    let quantity_raw = config.get_string("execution", "quantity").ok_or_else(|| {
        SmacrossError::ConfigMissing {
            section: "execution".into(),
            key: "quantity".into(),
        }
    })?;
    let quantity = match quantity_raw.trim().parse::<i64>() {
        Ok(quantity) if quantity >= 1 => quantity,
        _ => {
            return Err(SmacrossError::ConfigInvalid {
                section: "execution".into(),
                key: "quantity".into(),
                reason: "must be a positive integer".into(),
            })
        }
    };

    let tz_raw = config
        .get_string("execution", "timezone")
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    let timezone: Tz = tz_raw
        .trim()
        .parse()
        .map_err(|_| SmacrossError::ConfigInvalid {
            section: "execution".into(),
            key: "timezone".into(),
            reason: format!("unknown timezone {:?}", tz_raw.trim()),
        })?;

    let time_raw = config
        .get_string("execution", "time")
        .unwrap_or_else(|| DEFAULT_EXECUTION_TIME.to_string());
    let time = NaiveTime::parse_from_str(time_raw.trim(), "%H:%M").map_err(|_| {
        SmacrossError::ConfigInvalid {
            section: "execution".into(),
            key: "time".into(),
            reason: "invalid time format (expected HH:MM)".into(),
        }
    })?;

    Ok(ExecutionConfig {
        quantity,
        timezone,
        time,
    })
}

pub fn resolve_data_file(config: &dyn ConfigPort) -> Result<PathBuf, SmacrossError> {
    match config.get_string("data", "file") {
        Some(s) if !s.trim().is_empty() => Ok(PathBuf::from(s.trim())),
        _ => Err(SmacrossError::ConfigMissing {
            section: "data".into(),
            key: "file".into(),
        }),
    }
}

fn run_simulation(config_path: &Path, output_path: Option<&Path>) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let params = match build_strategy_params(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let exec = match build_execution_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let data_file = match resolve_data_file(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvAdapter::new(data_file);
    let ledger_port = CsvLedgerAdapter::new();
    let output = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("orders.csv"));

    run_pipeline(&data_port, &ledger_port, &params, &exec, &output)
}

pub fn run_pipeline(
    data_port: &dyn DataPort,
    ledger_port: &dyn LedgerPort,
    params: &StrategyParams,
    exec: &ExecutionConfig,
    output_path: &Path,
) -> ExitCode {
    let bars = match data_port.fetch_series() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => {
            eprintln!("Loaded {} bars, {} to {}", bars.len(), first.date, last.date)
        }
        _ => eprintln!("Loaded 0 bars"),
    }

    if bars.len() < params.min_bars() {
        eprintln!(
            "warning: only {} bars for a {}-bar window; signal stays flat",
            bars.len(),
            params.min_bars(),
        );
    }

    let signals = compute_signals(&bars, params);
    let trades = simulate(&signals, exec);

    if let Err(e) = ledger_port.write(&trades, output_path) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let summary = LedgerSummary::compute(&trades);
    eprintln!("\n=== Ledger Summary ===");
    eprintln!("Closed Trades:   {}", summary.closed_trades);
    eprintln!("Open Trades:     {}", summary.open_trades);
    eprintln!("Total P&L:       {:.2}", summary.total_pnl);
    eprintln!("Win Rate:        {:.1}%", summary.win_rate * 100.0);
    eprintln!("Avg Days Held:   {:.1}", summary.avg_days_held);

    eprintln!("\nLedger written to: {}", output_path.display());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let params = match build_strategy_params(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let exec = match build_execution_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let data_file = match resolve_data_file(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nResolved configuration:");
    eprintln!("  data file:      {}", data_file.display());
    eprintln!("  fast window:    {}", params.fast);
    eprintln!("  slow window:    {}", params.slow);
    eprintln!("  quantity:       {}", exec.quantity);
    eprintln!("  timezone:       {}", exec.timezone);
    eprintln!("  execution time: {}", exec.time.format("%H:%M"));

    if params.fast >= params.slow {
        eprintln!("warning: fast window is not shorter than slow window");
    }

    eprintln!("\nConfiguration is valid");
    ExitCode::SUCCESS
}

fn run_info(config_path: &Path) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let data_file = match resolve_data_file(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvAdapter::new(data_file.clone());
    let bars = match data_port.fetch_series() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => {
            println!(
                "{}: {} bars, {} to {}",
                data_file.display(),
                bars.len(),
                first.date,
                last.date,
            );
        }
        _ => eprintln!("{}: no data found", data_file.display()),
    }
    ExitCode::SUCCESS
}
