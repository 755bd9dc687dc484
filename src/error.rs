//! Error types for the ds collections.
//!
//! Mirrors the exception taxonomy of the PHP extension:
//! `UnderflowException` for access on an empty collection and
//! `OutOfRangeException` for an invalid offset, with plain `Error` for
//! offset operations a structure refuses to support.

use std::fmt;

/// Errors raised by collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DsError {
    /// Removal or read on an empty collection
    Underflow { operation: &'static str },
    /// Offset outside the bounds of the sequence
    OutOfRange { offset: usize, len: usize },
    /// Offset-based access on a structure that forbids it
    UnsupportedOperation { operation: &'static str },
}

impl fmt::Display for DsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DsError::Underflow { operation } => {
                write!(f, "Underflow during {}: the collection is empty", operation)
            }
            DsError::OutOfRange { offset, len } => {
                write!(f, "Offset {} out of range for length {}", offset, len)
            }
            DsError::UnsupportedOperation { operation } => {
                write!(f, "Operation {} is not supported by this structure", operation)
            }
        }
    }
}

impl std::error::Error for DsError {}
