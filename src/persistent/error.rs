//! Error type for reads and pops on empty persistent structures.
//!
//! Every fallible operation in [`crate::persistent`] fails for one reason only:
//! the structure holds nothing to read or remove. That condition is reported as
//! [`EmptyStructureError`] rather than a sentinel value.

use std::fmt;

use thiserror::Error;

/// Result type for operations on persistent structures.
pub type StructureResult<T> = Result<T, EmptyStructureError>;

/// The structure an [`EmptyStructureError`] was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    /// A [`PersistentStack`](super::PersistentStack).
    Stack,
    /// A [`PersistentDeque`](super::PersistentDeque).
    Deque,
}

impl fmt::Display for Structure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack => write!(formatter, "stack"),
            Self::Deque => write!(formatter, "deque"),
        }
    }
}

/// Raised when an element is read or removed from an empty structure.
///
/// This signals a broken precondition on the caller's side. It is never
/// produced for a structure that holds at least one element.
///
/// # Examples
///
/// ```rust
/// use stackdeque::persistent::{EmptyStructureError, PersistentStack, Structure};
///
/// let stack: PersistentStack<i32> = PersistentStack::new();
/// let error = stack.top().unwrap_err();
/// assert_eq!(error, EmptyStructureError::new(Structure::Stack, "top"));
/// assert_eq!(error.to_string(), "top called on an empty stack");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{operation} called on an empty {structure}")]
pub struct EmptyStructureError {
    /// The kind of structure that was empty.
    pub structure: Structure,
    /// The name of the operation that failed.
    pub operation: &'static str,
}

impl EmptyStructureError {
    /// Creates an error for `operation` on an empty `structure`.
    #[inline]
    #[must_use]
    pub const fn new(structure: Structure, operation: &'static str) -> Self {
        Self {
            structure,
            operation,
        }
    }

    pub(crate) const fn stack(operation: &'static str) -> Self {
        Self::new(Structure::Stack, operation)
    }

    pub(crate) const fn deque(operation: &'static str) -> Self {
        Self::new(Structure::Deque, operation)
    }
}
