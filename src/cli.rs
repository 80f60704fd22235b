//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::log_file_adapter::LogFileAdapter;
use crate::adapters::output_adapter::{FileOutputAdapter, StdoutOutputAdapter};
use crate::domain::config_validation::{input_format, validate_config, InputFormat};
use crate::domain::engine::InventoryControl;
use crate::domain::error::StockroomError;
use crate::domain::transaction::Batch;
use crate::ports::config_port::ConfigPort;
use crate::ports::output_port::OutputPort;
use crate::ports::transaction_source::TransactionSource;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Inventory transaction processor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a transaction batch and print the outcome of each record
    Process {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a transaction batch without applying it
    Check {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Process {
            input,
            format,
            config,
            output,
        } => run_process(input.as_ref(), format, config.as_ref(), output.as_ref()),
        Command::Check { input, format } => {
            telemetry::init(telemetry::DEFAULT_FILTER, false);
            run_check(&input, format.unwrap_or_default())
        }
    }
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, StockroomError> {
    match path {
        Some(p) => FileConfigAdapter::from_file(p),
        None => Ok(FileConfigAdapter::empty()),
    }
}

/// Flag value first, then `[input] path`.
pub fn resolve_input(
    input_override: Option<&PathBuf>,
    config: &dyn ConfigPort,
) -> Result<PathBuf, StockroomError> {
    if let Some(p) = input_override {
        return Ok(p.clone());
    }
    config
        .get_string("input", "path")
        .map(PathBuf::from)
        .ok_or_else(|| StockroomError::ConfigMissing {
            section: "input".into(),
            key: "path".into(),
        })
}

/// Flag value first, then `[output] path`; `None` means stdout.
pub fn resolve_output(
    output_override: Option<&PathBuf>,
    config: &dyn ConfigPort,
) -> Option<PathBuf> {
    output_override
        .cloned()
        .or_else(|| config.get_string("output", "path").map(PathBuf::from))
}

pub fn transaction_source(path: &Path, format: InputFormat) -> Box<dyn TransactionSource> {
    match format {
        InputFormat::Log => Box::new(LogFileAdapter::new(path.to_path_buf())),
        InputFormat::Csv => Box::new(CsvAdapter::new(path.to_path_buf())),
    }
}

pub fn load_batch(source: &dyn TransactionSource) -> Result<Batch, StockroomError> {
    let batch = source.load()?;
    if !batch.terminated {
        warn!(
            source = %source.describe(),
            "no '*' terminator; treating end of input as end of batch"
        );
    }
    Ok(batch)
}

/// Apply a batch against a fresh engine and return the joined output.
pub fn process_batch(batch: &Batch) -> String {
    let mut engine = InventoryControl::new();
    engine.process(&batch.transactions)
}

fn run_process(
    input: Option<&PathBuf>,
    format: Option<InputFormat>,
    config_path: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            telemetry::init(telemetry::DEFAULT_FILTER, false);
            error!("{e}");
            return (&e).into();
        }
    };

    let filter = config
        .get_string("logging", "filter")
        .unwrap_or_else(|| telemetry::DEFAULT_FILTER.to_string());
    telemetry::init(&filter, config.get_bool("logging", "json", false));

    match process_with_config(input, format, &config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}

pub fn process_with_config(
    input: Option<&PathBuf>,
    format: Option<InputFormat>,
    config: &dyn ConfigPort,
    output: Option<&PathBuf>,
) -> Result<(), StockroomError> {
    validate_config(config)?;

    let input_path = resolve_input(input, config)?;
    let format = match format {
        Some(f) => f,
        None => input_format(config)?,
    };

    let source = transaction_source(&input_path, format);
    info!(source = %source.describe(), %format, "loading transactions");
    let batch = load_batch(source.as_ref())?;

    let result = process_batch(&batch);

    let sink: Box<dyn OutputPort> = match resolve_output(output, config) {
        Some(path) => {
            info!(path = %path.display(), "writing output");
            Box::new(FileOutputAdapter::new(path))
        }
        None => Box::new(StdoutOutputAdapter),
    };
    sink.write(&result)
}

pub fn run_check(input: &Path, format: InputFormat) -> ExitCode {
    let source = transaction_source(input, format);
    match load_batch(source.as_ref()) {
        Ok(batch) => {
            eprintln!("{}: {} transactions", source.describe(), batch.len());
            for (code, count) in batch.tally() {
                eprintln!("  {:<7} {}", code, count);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}
