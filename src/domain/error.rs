//! Domain error types.

/// A command-log parse error with line/column information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset into the line.
    pub column: usize,
}

impl ParseError {
    /// Format the error with the offending line and a caret under the column.
    pub fn display_with_context(&self, input: &str) -> String {
        let source_line = input.lines().nth(self.line.saturating_sub(1)).unwrap_or("");
        let caret = " ".repeat(self.column) + "^";
        format!(
            "{source_line}\n{caret}\n{err}",
            source_line = source_line,
            caret = caret,
            err = self
        )
    }
}

/// A rejected transaction. Never fatal: the engine reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("{name} already in inventory")]
    DuplicateProduct { name: String },

    #[error("{name} not in inventory")]
    UnknownProduct { name: String },

    #[error("{quantity} exceeds units of {name} in inventory")]
    InsufficientStock { name: String, quantity: u32 },

    #[error("{quantity} units of {name} would exceed stock capacity")]
    StockOverflow { name: String, quantity: u32 },
}

/// Top-level error type for stockroom.
#[derive(Debug, thiserror::Error)]
pub enum StockroomError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    TransactionParse(#[from] ParseError),

    #[error("csv error: {reason}")]
    Csv { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StockroomError> for std::process::ExitCode {
    fn from(err: &StockroomError) -> Self {
        let code: u8 = match err {
            StockroomError::Io(_) => 1,
            StockroomError::ConfigParse { .. }
            | StockroomError::ConfigMissing { .. }
            | StockroomError::ConfigInvalid { .. } => 2,
            StockroomError::TransactionParse(_) | StockroomError::Csv { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
