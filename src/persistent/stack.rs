//! Persistent (immutable) singly-linked stack.
//!
//! This module provides [`PersistentStack`], an immutable LIFO stack whose
//! versions share their common tail.
//!
//! # Overview
//!
//! - O(1) `push`
//! - O(1) `top`
//! - O(1) `pop`
//! - O(1) `len` and `bottom`
//! - O(n) `reverse`
//!
//! `push` never touches the receiver: it allocates one node whose link points
//! at the receiver's head. `pop` hands back that link, so popping a freshly
//! pushed stack yields the very version it was pushed onto.
//!
//! # Examples
//!
//! ```rust
//! use stackdeque::persistent::PersistentStack;
//!
//! let empty = PersistentStack::new();
//! let with_ten = empty.push(10);
//! let with_five = with_ten.push(5);
//! let popped = with_five.pop().unwrap();
//!
//! assert!(empty.is_empty());
//! assert_eq!(with_ten.top(), Ok(&10));
//! assert_eq!(with_five.top(), Ok(&5));
//! assert_eq!(popped.top(), Ok(&10));
//! assert!(popped.ptr_eq(&with_ten));
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! with_ten:  10 -> nil
//! with_five: 5 -> [10 -> nil]   // shares the node of with_ten
//! popped:    [10 -> nil]        // the node of with_ten itself
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use super::error::{EmptyStructureError, StructureResult};

struct Node<T> {
    element: T,
    /// Head of the version this node was pushed onto.
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) stack.
///
/// Cloning a stack is O(1): the clone shares every node with the original.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `push`    | O(1)       |
/// | `top`     | O(1)       |
/// | `pop`     | O(1)       |
/// | `len`     | O(1)       |
/// | `bottom`  | O(1)       |
/// | `reverse` | O(n)       |
pub struct PersistentStack<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    /// The first node ever pushed; shared by every non-empty version above it.
    bottom: Option<ReferenceCounter<Node<T>>>,
    /// Cached at construction.
    length: usize,
}

impl<T> PersistentStack<T> {
    /// Creates a new empty stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let stack: PersistentStack<i32> = PersistentStack::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            bottom: None,
            length: 0,
        }
    }

    /// Creates a stack holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push(element)
    }

    /// Returns a new stack with `element` on top of this one.
    ///
    /// The receiver is left untouched and stays valid; the new stack links
    /// to it rather than copying it.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let base = PersistentStack::new().push(1);
    /// let pushed = base.push(2);
    /// assert_eq!(base.top(), Ok(&1));
    /// assert_eq!(pushed.top(), Ok(&2));
    /// assert_eq!(pushed.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn push(&self, element: T) -> Self {
        let head = ReferenceCounter::new(Node {
            element,
            next: self.head.clone(),
        });
        let bottom = self.bottom.clone().unwrap_or_else(|| head.clone());
        Self {
            head: Some(head),
            bottom: Some(bottom),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2);
    /// assert_eq!(stack.top(), Ok(&2));
    ///
    /// let empty: PersistentStack<i32> = PersistentStack::new();
    /// assert!(empty.top().is_err());
    /// ```
    #[inline]
    pub fn top(&self) -> StructureResult<&T> {
        self.head
            .as_ref()
            .map(|node| &node.element)
            .ok_or(EmptyStructureError::stack("top"))
    }

    /// Returns the version of the stack below the top element.
    ///
    /// The result shares its head with the version the top element was
    /// pushed onto, so `stack.push(x).pop()` is [`ptr_eq`](Self::ptr_eq)
    /// to `stack`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let base = PersistentStack::new().push(1);
    /// let popped = base.push(2).pop().unwrap();
    /// assert!(popped.ptr_eq(&base));
    /// ```
    #[inline]
    pub fn pop(&self) -> StructureResult<Self> {
        self.head
            .as_ref()
            .map(|node| match &node.next {
                Some(_) => Self {
                    head: node.next.clone(),
                    bottom: self.bottom.clone(),
                    length: self.length - 1,
                },
                None => Self::new(),
            })
            .ok_or(EmptyStructureError::stack("pop"))
    }

    /// Returns the bottom element, the one pushed first.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the stack is empty.
    ///
    /// # Complexity
    ///
    /// O(1) - the bottom node is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2).push(3);
    /// assert_eq!(stack.bottom(), Ok(&1));
    /// assert_eq!(stack.pop().unwrap().pop().unwrap().bottom(), Ok(&1));
    /// ```
    #[inline]
    pub fn bottom(&self) -> StructureResult<&T> {
        self.bottom
            .as_ref()
            .map(|node| &node.element)
            .ok_or(EmptyStructureError::stack("bottom"))
    }

    /// Returns the number of elements in the stack.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if both stacks are the same version.
    ///
    /// Two stacks are the same version when their top nodes are the same
    /// allocation. All empty stacks are the same version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let first = PersistentStack::new().push(1);
    /// let second = PersistentStack::new().push(1);
    /// assert!(first.ptr_eq(&first.clone()));
    /// assert!(!first.ptr_eq(&second));
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns an iterator over the elements from top to bottom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2).push(3);
    /// let collected: Vec<&i32> = stack.iter().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentStackIterator<'_, T> {
        PersistentStackIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> PersistentStack<T> {
    /// Returns a new stack with the elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentStack;
    ///
    /// let stack: PersistentStack<i32> = (1..=3).collect();
    /// assert_eq!(stack.top(), Ok(&3));
    /// assert_eq!(stack.reverse().top(), Ok(&1));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`PersistentStack`],
/// from top to bottom.
pub struct PersistentStackIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentStackIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentStackIterator<'_, T> {}

/// An owning iterator over the elements of a [`PersistentStack`], from top
/// to bottom.
pub struct PersistentStackIntoIterator<T> {
    stack: PersistentStack<T>,
}

impl<T: Clone> Iterator for PersistentStackIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.top().ok()?.clone();
        self.stack = self.stack.pop().ok()?;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.length, Some(self.stack.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentStackIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentStack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            bottom: self.bottom.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Releases uniquely owned nodes one at a time so that dropping a long stack
/// does not recurse once per node.
impl<T> Drop for PersistentStack<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => current = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Pushes each element in turn, so the last element ends up on top.
impl<T> FromIterator<T> for PersistentStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |stack, element| stack.push(element))
    }
}

impl<T: Clone> IntoIterator for PersistentStack<T> {
    type Item = T;
    type IntoIter = PersistentStackIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentStackIntoIterator { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = PersistentStackIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentStack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.ptr_eq(other) || self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentStack<T> {}

impl<T: Hash> Hash for PersistentStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Thread Safety Tests (arc feature only)
// =============================================================================

#[cfg(all(test, feature = "arc"))]
mod send_sync_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_stack_is_send_sync() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<PersistentStack<i32>>();
        is_send_sync::<PersistentStack<String>>();
    }
}
