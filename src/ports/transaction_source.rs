//! Transaction input port trait.

use crate::domain::error::StockroomError;
use crate::domain::transaction::Batch;

/// A source of already-parsed transaction batches.
pub trait TransactionSource {
    fn load(&self) -> Result<Batch, StockroomError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
