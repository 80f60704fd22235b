//! CSV transaction adapter.
//!
//! Expects a header row followed by `code,name,arg1,arg2` records. Rows may
//! be short (`report`, `*`) or padded with empty fields.

use crate::domain::error::StockroomError;
use crate::domain::transaction::Batch;
use crate::domain::transaction_parser::{parse_fields, Record};
use crate::ports::transaction_source::TransactionSource;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn parse(content: &str) -> Result<Batch, StockroomError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut batch = Batch::default();

        for result in rdr.records() {
            let record = result.map_err(|e| StockroomError::Csv {
                reason: format!("CSV parse error: {}", e),
            })?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
            let fields: Vec<&str> = record.iter().collect();

            match parse_fields(&fields, line)? {
                Record::Transaction(tx) => batch.transactions.push(tx),
                Record::Terminator => {
                    batch.terminated = true;
                    break;
                }
            }
        }

        Ok(batch)
    }
}

impl TransactionSource for CsvAdapter {
    fn load(&self) -> Result<Batch, StockroomError> {
        let content = fs::read_to_string(&self.path).map_err(|e| StockroomError::Csv {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        Self::parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
