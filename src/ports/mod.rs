//! Port traits implemented by [`crate::adapters`].

pub mod config_port;
pub mod output_port;
pub mod transaction_source;
