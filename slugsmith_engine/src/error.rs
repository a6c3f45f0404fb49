use thiserror::Error;

use crate::utf8::Utf8Error;

/// Ways a single conversion can fail. Every variant is terminal for the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("input is not well-formed UTF-8: {0}")]
    InvalidInput(#[from] Utf8Error),
    #[error("separator byte 0x{0:02X} must be a space or ASCII punctuation without a table entry")]
    InvalidSeparator(u8),
    #[error("output needs {needed} bytes but the buffer holds {capacity}")]
    BufferExceeded { needed: usize, capacity: usize },
    #[error("input produced an empty slug")]
    EmptyResult,
    #[error("could not allocate the output buffer")]
    AllocationFailure,
}

impl SlugError {
    /// Coarse category, matching the four failure classes callers branch on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SlugError::InvalidInput(_) | SlugError::InvalidSeparator(_) => ErrorKind::InvalidInput,
            SlugError::BufferExceeded { .. } => ErrorKind::BufferExceeded,
            SlugError::EmptyResult => ErrorKind::EmptyResult,
            SlugError::AllocationFailure => ErrorKind::AllocationFailure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    BufferExceeded,
    EmptyResult,
    AllocationFailure,
}
