//! # stackdeque
//!
//! Persistent (immutable) stack and double-ended queue for Rust.
//!
//! ## Overview
//!
//! - [`PersistentStack`](persistent::PersistentStack): a singly-linked stack
//!   whose versions share their common tail
//! - [`PersistentDeque`](persistent::PersistentDeque): a deque built from two
//!   such stacks, rebalanced on demand for amortized O(1) access at both ends
//!
//! Every operation returns a new version and leaves older versions valid.
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes through `Arc` instead of `Rc`, making both structures
//!   `Send + Sync` when their elements are
//!
//! ## Diagnostics
//!
//! Rebalancing emits `trace`-level events through [`tracing`]. Install a
//! subscriber in the application to see them.
//!
//! ## Example
//!
//! ```rust
//! use stackdeque::prelude::*;
//!
//! let deque = PersistentDeque::new().push_back(10).push_back(5);
//! assert_eq!(deque.front(), Ok(&10));
//!
//! let empty: PersistentDeque<i32> = PersistentDeque::new();
//! let error: EmptyStructureError = empty.back().unwrap_err();
//! assert_eq!(error.to_string(), "back called on an empty deque");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use stackdeque::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
