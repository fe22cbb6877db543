//! Persistent (immutable) stack and deque.
//!
//! This module provides two immutable data structures that use structural
//! sharing instead of copying:
//!
//! - [`PersistentStack`]: Persistent singly-linked stack
//! - [`PersistentDeque`]: Persistent double-ended queue made of two stacks
//!
//! Reading or removing from an empty structure yields an
//! [`EmptyStructureError`].
//!
//! # Structural Sharing
//!
//! Every push or pop returns a new version. Older versions stay valid and
//! keep sharing the nodes they have in common with newer ones.
//!
//! # Examples
//!
//! ## `PersistentStack`
//!
//! ```rust
//! use stackdeque::persistent::PersistentStack;
//!
//! let stack = PersistentStack::new().push(1).push(2);
//! assert_eq!(stack.top(), Ok(&2));
//!
//! let popped = stack.pop().unwrap();
//! assert_eq!(stack.len(), 2);  // Original unchanged
//! assert_eq!(popped.len(), 1); // New version
//! ```
//!
//! ## `PersistentDeque`
//!
//! ```rust
//! use stackdeque::persistent::PersistentDeque;
//!
//! let deque = PersistentDeque::new().push_back(2).push_front(1).push_back(3);
//! assert_eq!(deque.front(), Ok(&1));
//! assert_eq!(deque.back(), Ok(&3));
//!
//! let popped = deque.pop_back().unwrap();
//! assert_eq!(deque.len(), 3);  // Original unchanged
//! assert_eq!(popped.back(), Ok(&2));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type shared by every node.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod deque;
mod error;
mod stack;

pub use deque::PersistentDeque;
pub use deque::PersistentDequeIntoIterator;
pub use deque::PersistentDequeIterator;
pub use error::EmptyStructureError;
pub use error::StructureResult;
pub use error::Structure;
pub use stack::PersistentStack;
pub use stack::PersistentStackIntoIterator;
pub use stack::PersistentStackIterator;

// =============================================================================
// Tests
// =============================================================================
