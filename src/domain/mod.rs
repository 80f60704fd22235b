//! Core domain types and logic.

pub mod ledger;
pub mod product;
pub mod transaction;
pub mod transaction_parser;
pub mod engine;
pub mod config_validation;
pub mod error;
