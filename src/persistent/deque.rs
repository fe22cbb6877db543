//! Persistent (immutable) double-ended queue built from two stacks.
//!
//! This module provides [`PersistentDeque`], a deque made of a pair of
//! [`PersistentStack`]s:
//!
//! - `front` holds the elements nearest the front, the frontmost on top
//! - `back` holds the elements nearest the back, the backmost on top
//!
//! Reading front to back visits `front` from top to bottom, then `back` from
//! bottom to top.
//!
//! # Overview
//!
//! - O(1) `push_front` and `push_back`
//! - amortized O(1) `pop_front` and `pop_back`
//! - O(1) `front` and `back`
//! - O(1) `len` and `is_empty`
//!
//! All operations return new deques without modifying the original.
//!
//! # Rebalancing
//!
//! Popping from an end whose stack is empty would otherwise require walking
//! the whole opposite stack every time. Instead the deque is rebalanced once:
//! the non-empty stack (the donor) keeps the half of its elements nearest its
//! own end and hands the other half, re-oriented, to the empty side.
//!
//! ```text
//! logical order:  10  5  7  3
//! before:         front = []        back = [3, 7, 5, 10]   (top first)
//! after:          front = [10, 5]   back = [3, 7]
//! ```
//!
//! For an odd count the donor keeps the extra element. Both sides are
//! non-empty afterwards whenever the deque holds at least two elements.
//!
//! # Examples
//!
//! ```rust
//! use stackdeque::persistent::PersistentDeque;
//!
//! let deque = PersistentDeque::new()
//!     .push_back(10)
//!     .push_back(5)
//!     .push_back(7)
//!     .push_back(3);
//!
//! assert_eq!(deque.front(), Ok(&10));
//! assert_eq!(deque.back(), Ok(&3));
//!
//! let popped = deque.pop_front().unwrap();
//! assert_eq!(popped.front(), Ok(&5));
//! assert_eq!(deque.len(), 4); // Original unchanged
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::error::{EmptyStructureError, StructureResult};
use super::stack::{PersistentStack, PersistentStackIterator};

/// A persistent (immutable) double-ended queue.
///
/// # Time Complexity
///
/// | Operation    | Complexity     |
/// |--------------|----------------|
/// | `new`        | O(1)           |
/// | `push_front` | O(1)           |
/// | `push_back`  | O(1)           |
/// | `pop_front`  | O(1) amortized |
/// | `pop_back`   | O(1) amortized |
/// | `front`      | O(1)           |
/// | `back`       | O(1)           |
/// | `rebalance`  | O(n)           |
/// | `len`        | O(1)           |
pub struct PersistentDeque<T> {
    front: PersistentStack<T>,
    back: PersistentStack<T>,
}

impl<T> PersistentDeque<T> {
    /// Creates a new empty deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentDeque;
    ///
    /// let deque: PersistentDeque<i32> = PersistentDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: PersistentStack::new(),
            back: PersistentStack::new(),
        }
    }

    /// Creates a deque holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push_back(element)
    }

    /// Creates a deque from its two halves.
    ///
    /// `front` carries the frontmost element on top and `back` carries the
    /// backmost element on top. Neither stack is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::{PersistentDeque, PersistentStack};
    ///
    /// let front = PersistentStack::new().push(2).push(1);
    /// let back = PersistentStack::new().push(3).push(4);
    /// let deque = PersistentDeque::from_stacks(front, back);
    ///
    /// let collected: Vec<i32> = deque.iter().copied().collect();
    /// assert_eq!(collected, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_stacks(front: PersistentStack<T>, back: PersistentStack<T>) -> Self {
        Self { front, back }
    }

    /// Returns the stack holding the front half, frontmost element on top.
    #[inline]
    #[must_use]
    pub const fn front_stack(&self) -> &PersistentStack<T> {
        &self.front
    }

    /// Returns the stack holding the back half, backmost element on top.
    #[inline]
    #[must_use]
    pub const fn back_stack(&self) -> &PersistentStack<T> {
        &self.back
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a new deque with `element` at the front.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn push_front(&self, element: T) -> Self {
        Self {
            front: self.front.push(element),
            back: self.back.clone(),
        }
    }

    /// Returns a new deque with `element` at the back.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.push(element),
        }
    }

    /// Returns a reference to the front element.
    ///
    /// When the front stack is empty this reads the element a rebalance would
    /// move to its top, the bottom of the back stack.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentDeque;
    ///
    /// let deque = PersistentDeque::new().push_back(1).push_back(2);
    /// assert_eq!(deque.front(), Ok(&1));
    ///
    /// let empty: PersistentDeque<i32> = PersistentDeque::new();
    /// assert!(empty.front().is_err());
    /// ```
    pub fn front(&self) -> StructureResult<&T> {
        self.front
            .top()
            .or_else(|_| self.back.bottom())
            .map_err(|_| EmptyStructureError::deque("front"))
    }

    /// Returns a reference to the back element.
    ///
    /// When the back stack is empty this reads the bottom of the front stack.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the deque is empty.
    pub fn back(&self) -> StructureResult<&T> {
        self.back
            .top()
            .or_else(|_| self.front.bottom())
            .map_err(|_| EmptyStructureError::deque("back"))
    }

    /// Returns an iterator over the elements from front to back.
    ///
    /// Each stack is walked lazily from its top. The back stack is read from
    /// its bottom, so its references are buffered once when iteration first
    /// reaches it; the front stack is buffered the same way only when
    /// iterating from the back reaches it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentDeque;
    ///
    /// let deque = PersistentDeque::new().push_back(2).push_front(1).push_back(3);
    /// let collected: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    ///
    /// let reversed: Vec<&i32> = deque.iter().rev().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentDequeIterator<'_, T> {
        PersistentDequeIterator {
            front: StackCursor::Linked(self.front.iter()),
            back: StackCursor::Linked(self.back.iter()),
        }
    }
}

impl<T: Clone> PersistentDeque<T> {
    /// Returns the deque without its front element.
    ///
    /// If the front stack is empty and the back stack holds two or more
    /// elements, the deque is rebalanced first.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentDeque;
    ///
    /// let deque: PersistentDeque<i32> = (1..=3).collect();
    /// let popped = deque.pop_front().unwrap();
    /// assert_eq!(popped.front(), Ok(&2));
    /// assert_eq!(popped.len(), 2);
    /// ```
    pub fn pop_front(&self) -> StructureResult<Self> {
        let Self { front, back } = if self.front.is_empty() {
            self.rebalance()
        } else {
            self.clone()
        };
        match front.pop() {
            Ok(front) => Ok(Self { front, back }),
            Err(_) => back
                .pop()
                .map(|back| Self { front, back })
                .map_err(|_| EmptyStructureError::deque("pop_front")),
        }
    }

    /// Returns the deque without its back element.
    ///
    /// If the back stack is empty and the front stack holds two or more
    /// elements, the deque is rebalanced first.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the deque is empty.
    pub fn pop_back(&self) -> StructureResult<Self> {
        let Self { front, back } = if self.back.is_empty() {
            self.rebalance()
        } else {
            self.clone()
        };
        match back.pop() {
            Ok(back) => Ok(Self { front, back }),
            Err(_) => front
                .pop()
                .map(|front| Self { front, back })
                .map_err(|_| EmptyStructureError::deque("pop_back")),
        }
    }

    /// Returns a deque with the same elements split evenly between the two
    /// stacks.
    ///
    /// A split happens only when one stack is empty and the other holds at
    /// least two elements; otherwise an equivalent deque is returned. The
    /// receiver is never modified.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackdeque::persistent::PersistentDeque;
    ///
    /// let deque: PersistentDeque<i32> = (1..=5).collect();
    /// assert!(deque.front_stack().is_empty());
    ///
    /// let rebalanced = deque.rebalance();
    /// assert_eq!(rebalanced.front_stack().len(), 2);
    /// assert_eq!(rebalanced.back_stack().len(), 3);
    /// assert_eq!(rebalanced, deque);
    /// ```
    #[must_use]
    pub fn rebalance(&self) -> Self {
        match (self.front.len(), self.back.len()) {
            (0, donor) if donor >= 2 => {
                let (back, front) = split_donor(&self.back);
                tracing::trace!(
                    donor = "back",
                    moved = front.len(),
                    kept = back.len(),
                    "rebalanced deque"
                );
                Self { front, back }
            }
            (donor, 0) if donor >= 2 => {
                let (front, back) = split_donor(&self.front);
                tracing::trace!(
                    donor = "front",
                    moved = back.len(),
                    kept = front.len(),
                    "rebalanced deque"
                );
                Self { front, back }
            }
            _ => self.clone(),
        }
    }

    /// Returns a new deque with every element of `iter` pushed onto the back,
    /// in order.
    #[must_use]
    pub fn extend_back<I: IntoIterator<Item = T>>(&self, iter: I) -> Self {
        iter.into_iter()
            .fold(self.clone(), |deque, element| deque.push_back(element))
    }
}

/// Splits `donor` into `(kept, moved)`.
///
/// `kept` holds the `⌈n/2⌉` elements nearest the donor's top, in the donor's
/// orientation. `moved` holds the remaining `⌊n/2⌋` elements re-oriented for
/// the opposite side: the element deepest in `donor` ends up on top of
/// `moved`.
fn split_donor<T: Clone>(donor: &PersistentStack<T>) -> (PersistentStack<T>, PersistentStack<T>) {
    let keep = donor.len().div_ceil(2);
    let staging: PersistentStack<T> = donor.iter().take(keep).cloned().collect();
    let kept: PersistentStack<T> = staging.iter().cloned().collect();
    let moved: PersistentStack<T> = donor.iter().skip(keep).cloned().collect();
    (kept, moved)
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Remaining elements of one stack, readable from its top or its bottom.
enum StackCursor<'a, T> {
    /// Untouched from the bottom; walks the linked nodes.
    Linked(PersistentStackIterator<'a, T>),
    /// Top-to-bottom references, once the bottom has been asked for.
    Buffered(std::vec::IntoIter<&'a T>),
}

impl<'a, T> StackCursor<'a, T> {
    fn next_from_top(&mut self) -> Option<&'a T> {
        match self {
            Self::Linked(iter) => iter.next(),
            Self::Buffered(iter) => iter.next(),
        }
    }

    fn next_from_bottom(&mut self) -> Option<&'a T> {
        if let Self::Linked(iter) = self {
            let buffered: Vec<&'a T> = iter.collect();
            *self = Self::Buffered(buffered.into_iter());
        }
        match self {
            Self::Buffered(iter) => iter.next_back(),
            Self::Linked(_) => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Linked(iter) => iter.len(),
            Self::Buffered(iter) => iter.len(),
        }
    }
}

/// An iterator over references to the elements of a [`PersistentDeque`],
/// from front to back.
pub struct PersistentDequeIterator<'a, T> {
    front: StackCursor<'a, T>,
    back: StackCursor<'a, T>,
}

impl<'a, T> Iterator for PersistentDequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.front
            .next_from_top()
            .or_else(|| self.back.next_from_bottom())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.back.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for PersistentDequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back
            .next_from_top()
            .or_else(|| self.front.next_from_bottom())
    }
}

impl<T> ExactSizeIterator for PersistentDequeIterator<'_, T> {}

/// An owning iterator over the elements of a [`PersistentDeque`].
///
/// Draining from either end goes through `pop_front`/`pop_back`, so the
/// underlying deque is rebalanced as it empties.
pub struct PersistentDequeIntoIterator<T> {
    deque: PersistentDeque<T>,
}

impl<T: Clone> Iterator for PersistentDequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.deque.front().ok()?.clone();
        self.deque = self.deque.pop_front().ok()?;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T: Clone> DoubleEndedIterator for PersistentDequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.deque.back().ok()?.clone();
        self.deque = self.deque.pop_back().ok()?;
        Some(element)
    }
}

impl<T: Clone> ExactSizeIterator for PersistentDequeIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentDeque<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T> Default for PersistentDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes each element onto the back, so iteration order is preserved.
impl<T> FromIterator<T> for PersistentDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_stacks(PersistentStack::new(), iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for PersistentDeque<T> {
    type Item = T;
    type IntoIter = PersistentDequeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentDequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentDeque<T> {
    type Item = &'a T;
    type IntoIter = PersistentDequeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compares elements in front-to-back order, regardless of how they are
/// split between the two stacks.
impl<T: PartialEq> PartialEq for PersistentDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentDeque<T> {}

impl<T: Hash> Hash for PersistentDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|element| element.hash(state));
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
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
    fn test_deque_is_send_sync() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<PersistentDeque<i32>>();
        is_send_sync::<PersistentDeque<String>>();
    }
}
