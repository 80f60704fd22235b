//! Configuration validation.
//!
//! Checks the optional `[input]` and `[output]` keys before a batch runs.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::StockroomError;
use crate::ports::config_port::ConfigPort;

/// On-disk layout of a transaction batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Whitespace-separated command log.
    #[default]
    Log,
    /// CSV rows `code,name,arg1,arg2`.
    Csv,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(InputFormat::Log),
            "csv" => Ok(InputFormat::Csv),
            other => Err(format!("unknown input format '{}' (expected log or csv)", other)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Log => write!(f, "log"),
            InputFormat::Csv => write!(f, "csv"),
        }
    }
}

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), StockroomError> {
    validate_input_format(config)?;
    validate_path(config, "input")?;
    validate_path(config, "output")?;
    Ok(())
}

/// Reads `[input] format`, defaulting to the command-log layout.
pub fn input_format(config: &dyn ConfigPort) -> Result<InputFormat, StockroomError> {
    match config.get_string("input", "format") {
        None => Ok(InputFormat::default()),
        Some(raw) => raw
            .parse()
            .map_err(|reason| StockroomError::ConfigInvalid {
                section: "input".to_string(),
                key: "format".to_string(),
                reason,
            }),
    }
}

fn validate_input_format(config: &dyn ConfigPort) -> Result<(), StockroomError> {
    input_format(config).map(|_| ())
}

fn validate_path(config: &dyn ConfigPort, section: &str) -> Result<(), StockroomError> {
    match config.get_string(section, "path") {
        Some(p) if p.trim().is_empty() => Err(StockroomError::ConfigInvalid {
            section: section.to_string(),
            key: "path".to_string(),
            reason: "path must not be empty".to_string(),
        }),
        _ => Ok(()),
    }
}
