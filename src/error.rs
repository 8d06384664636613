//! Errors raised by task store operations.

use thiserror::Error;

use crate::task::TaskId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was empty or whitespace-only
    #[error("{0}")]
    Validation(String),

    /// No task carries the given id
    #[error("Task #{0} not found")]
    NotFound(TaskId),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
