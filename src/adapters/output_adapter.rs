//! Output sinks for processed batches.

use crate::domain::error::StockroomError;
use crate::ports::output_port::OutputPort;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes the output to a file, with a trailing newline.
pub struct FileOutputAdapter {
    path: PathBuf,
}

impl FileOutputAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputPort for FileOutputAdapter {
    fn write(&self, output: &str) -> Result<(), StockroomError> {
        fs::write(&self.path, format!("{}\n", output))?;
        Ok(())
    }
}

/// Writes the output to stdout.
pub struct StdoutOutputAdapter;

impl OutputPort for StdoutOutputAdapter {
    fn write(&self, output: &str) -> Result<(), StockroomError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }
}
