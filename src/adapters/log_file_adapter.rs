//! Command-log file adapter.

use crate::domain::error::StockroomError;
use crate::domain::transaction::Batch;
use crate::domain::transaction_parser::parse_log;
use crate::ports::transaction_source::TransactionSource;
use std::fs;
use std::path::PathBuf;
use tracing::error;

pub struct LogFileAdapter {
    path: PathBuf,
}

impl LogFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TransactionSource for LogFileAdapter {
    fn load(&self) -> Result<Batch, StockroomError> {
        let content = fs::read_to_string(&self.path)?;
        parse_log(&content).map_err(|e| {
            error!(
                file = %self.path.display(),
                "malformed command log:\n{}",
                e.display_with_context(&content)
            );
            StockroomError::from(e)
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
