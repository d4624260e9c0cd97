//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when an amount is not a positive number.
//! - [`KeyNotFound`] returned when an earning id is not in the ledger.
//! - [`ExistingKey`] returned when inserting an id that is already present.
//! - [`InvalidPageSize`] returned for a page size outside 5, 10 and 20.
//! - [`TotalOverflow`] returned when a change would push the ledger total out
//!   of range.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidPageSize`]: EngineError::InvalidPageSize
//!  [`TotalOverflow`]: EngineError::TotalOverflow
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),
    #[error("Total out of range: {0}")]
    TotalOverflow(String),
}
