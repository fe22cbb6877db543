//! Property-based tests for PersistentStack.
//!
//! These tests verify the persistence and structural sharing guarantees of
//! the stack.

use proptest::prelude::*;
use stackdeque::persistent::{EmptyStructureError, PersistentStack, Structure};

// =============================================================================
// Strategy for generating PersistentStack
// =============================================================================

/// Generates a `PersistentStack<i32>` with up to `max_size` elements.
fn persistent_stack_strategy(max_size: usize) -> impl Strategy<Value = PersistentStack<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

fn small_stack() -> impl Strategy<Value = PersistentStack<i32>> {
    persistent_stack_strategy(20)
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(stack in small_stack()) {
        prop_assert_eq!(stack.len(), stack.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(stack in small_stack()) {
        prop_assert_eq!(stack.is_empty(), stack.len() == 0);
    }

    #[test]
    fn prop_push_is_non_empty_with_value_on_top(stack in small_stack(), element: i32) {
        let pushed = stack.push(element);
        prop_assert!(!pushed.is_empty());
        prop_assert_eq!(pushed.top(), Ok(&element));
        prop_assert_eq!(pushed.len(), stack.len() + 1);
    }

    // =========================================================================
    // Structural Sharing Properties
    // =========================================================================

    #[test]
    fn prop_push_then_pop_is_same_version(stack in small_stack(), element: i32) {
        let popped = stack.push(element).pop().unwrap();
        prop_assert!(popped.ptr_eq(&stack));
        prop_assert_eq!(popped.len(), stack.len());
    }

    #[test]
    fn prop_push_leaves_receiver_unchanged(elements in prop::collection::vec(any::<i32>(), 0..20), element: i32) {
        let stack: PersistentStack<i32> = elements.iter().copied().collect();
        let _pushed = stack.push(element);
        let remaining: Vec<i32> = stack.iter().copied().collect();
        let expected: Vec<i32> = elements.iter().rev().copied().collect();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn prop_pop_leaves_receiver_unchanged(stack in small_stack().prop_filter("non-empty", |stack| !stack.is_empty())) {
        let top = *stack.top().unwrap();
        let _popped = stack.pop().unwrap();
        prop_assert_eq!(stack.top(), Ok(&top));
    }

    // =========================================================================
    // Reverse Properties
    // =========================================================================

    #[test]
    fn prop_reverse_reverse_is_identity(stack in small_stack()) {
        prop_assert_eq!(stack.reverse().reverse(), stack);
    }

    #[test]
    fn prop_reverse_swaps_top_and_bottom(stack in small_stack()) {
        let reversed = stack.reverse();
        prop_assert_eq!(reversed.top().ok(), stack.bottom().ok());
        prop_assert_eq!(reversed.bottom().ok(), stack.top().ok());
    }
}

// =============================================================================
// Version Independence
// =============================================================================

#[test]
fn test_versions_are_independent() {
    let empty = PersistentStack::new();
    let with_ten = empty.push(10);
    let with_five = with_ten.push(5);
    let popped = with_five.pop().unwrap();

    assert!(empty.is_empty());
    assert_eq!(with_ten.top(), Ok(&10));
    assert_eq!(with_five.top(), Ok(&5));
    assert_eq!(popped.top(), Ok(&10));
    assert!(popped.ptr_eq(&with_ten));
}

#[test]
fn test_empty_stack_reports_structure_and_operation() {
    let empty: PersistentStack<i32> = PersistentStack::new();
    assert_eq!(
        empty.top(),
        Err(EmptyStructureError::new(Structure::Stack, "top"))
    );
    assert_eq!(
        empty.pop().unwrap_err(),
        EmptyStructureError::new(Structure::Stack, "pop")
    );
}
