//! Result output port trait.

use crate::domain::error::StockroomError;

/// Port for delivering the processed batch output.
pub trait OutputPort {
    fn write(&self, output: &str) -> Result<(), StockroomError>;
}
