//! Configuration validation.
//!
//! Validates every config section before the pipeline runs, so bad
//! configuration is fatal at startup rather than mid-run.

use crate::domain::error::SmacrossError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveTime;
use chrono_tz::Tz;

pub fn validate_run_config(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    validate_data_file(config)?;
    validate_window(config, "fast")?;
    validate_window(config, "slow")?;
    validate_quantity(config)?;
    validate_timezone(config)?;
    validate_execution_time(config)?;
    Ok(())
}

fn validate_data_file(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    match config.get_string("data", "file") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(SmacrossError::ConfigMissing {
            section: "data".to_string(),
            key: "file".to_string(),
        }),
    }
}

fn validate_window(config: &dyn ConfigPort, key: &str) -> Result<(), SmacrossError> {
    let raw = config
        .get_string("strategy", key)
        .ok_or_else(|| SmacrossError::ConfigMissing {
            section: "strategy".to_string(),
            key: key.to_string(),
        })?;

    match raw.trim().parse::<usize>() {
        Ok(window) if window >= 1 => Ok(()),
        _ => Err(SmacrossError::ConfigInvalid {
            section: "strategy".to_string(),
            key: key.to_string(),
            reason: "must be a positive integer".to_string(),
        }),
    }
}

fn validate_quantity(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    let raw = config
        .get_string("execution", "quantity")
        .ok_or_else(|| SmacrossError::ConfigMissing {
            section: "execution".to_string(),
            key: "quantity".to_string(),
        })?;

    match raw.trim().parse::<i64>() {
        Ok(quantity) if quantity >= 1 => Ok(()),
        _ => Err(SmacrossError::ConfigInvalid {
            section: "execution".to_string(),
            key: "quantity".to_string(),
            reason: "must be a positive integer".to_string(),
        }),
    }
}

fn validate_timezone(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    // optional key; the default zone always parses
    match config.get_string("execution", "timezone") {
        None => Ok(()),
        Some(raw) => match raw.trim().parse::<Tz>() {
            Ok(_) => Ok(()),
            Err(_) => Err(SmacrossError::ConfigInvalid {
                section: "execution".to_string(),
                key: "timezone".to_string(),
                reason: format!("unknown timezone {:?}", raw.trim()),
            }),
        },
    }
}

fn validate_execution_time(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    match config.get_string("execution", "time") {
        None => Ok(()),
        Some(raw) => match NaiveTime::parse_from_str(raw.trim(), "%H:%M") {
            Ok(_) => Ok(()),
            Err(_) => Err(SmacrossError::ConfigInvalid {
                section: "execution".to_string(),
                key: "time".to_string(),
                reason: "invalid time format (expected HH:MM)".to_string(),
            }),
        },
    }
}
