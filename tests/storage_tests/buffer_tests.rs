//! SortedBuffer Tests
//!
//! Tests verify:
//! - Sorted insertion, including duplicates
//! - Capacity growth policy (lazy, seed 8, doubling)
//! - Erase by value and by index
//! - Contract violations return typed errors
//! - Bulk insertion from tokens

use statsarray::storage::{SortedBuffer, INITIAL_CAPACITY};
use statsarray::{ErrorKind, StatsError};

// =============================================================================
// Helper Functions
// =============================================================================

fn buffer_of(values: &[f64]) -> SortedBuffer {
    let mut buffer = SortedBuffer::new();
    for &v in values {
        buffer.insert(v).unwrap();
    }
    buffer
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_buffer_is_empty_and_unallocated() {
    let buffer = SortedBuffer::new();
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
    assert_eq!(buffer.data_address(), 0);
}

#[test]
fn test_insert_keeps_ascending_order() {
    let buffer = buffer_of(&[5.0, 3.0, 8.0, 3.0]);
    assert_eq!(buffer.as_slice(), &[3.0, 3.0, 5.0, 8.0]);
    assert_eq!(buffer.len(), 4);
}

#[test]
fn test_insert_returns_position() {
    let mut buffer = buffer_of(&[1.0, 2.0, 4.0]);
    assert_eq!(buffer.insert(3.0).unwrap(), 2);
    assert_eq!(buffer.insert(0.5).unwrap(), 0);
    assert_eq!(buffer.insert(10.0).unwrap(), 5);
}

#[test]
fn test_insert_duplicate_lands_before_equal_run() {
    let mut buffer = buffer_of(&[1.0, 2.0, 2.0, 3.0]);
    assert_eq!(buffer.insert(2.0).unwrap(), 1);
    assert_eq!(buffer.as_slice(), &[1.0, 2.0, 2.0, 2.0, 3.0]);
}

#[test]
fn test_insert_negative_and_fractional() {
    let buffer = buffer_of(&[0.25, -7.5, 3.0, -0.125]);
    assert_eq!(buffer.as_slice(), &[-7.5, -0.125, 0.25, 3.0]);
}

#[test]
fn test_get_is_bounds_checked() {
    let buffer = buffer_of(&[2.0, 1.0]);
    assert_eq!(buffer.get(0).unwrap(), 1.0);
    assert_eq!(buffer.get(1).unwrap(), 2.0);

    let err = buffer.get(2).unwrap_err();
    assert!(matches!(err, StatsError::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(err.kind(), ErrorKind::ContractViolation);
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_first_insert_allocates_seed_capacity() {
    let mut buffer = SortedBuffer::new();
    buffer.insert(1.0).unwrap();
    assert_eq!(buffer.capacity(), INITIAL_CAPACITY);
    assert_eq!(buffer.capacity(), 8);
    assert_ne!(buffer.data_address(), 0);
}

#[test]
fn test_capacity_doubles_when_full() {
    let mut buffer = SortedBuffer::new();
    for i in 0..8 {
        buffer.insert(i as f64).unwrap();
    }
    assert_eq!(buffer.capacity(), 8);

    buffer.insert(8.0).unwrap();
    assert_eq!(buffer.capacity(), 16);

    for i in 9..17 {
        buffer.insert(i as f64).unwrap();
    }
    assert_eq!(buffer.len(), 17);
    assert_eq!(buffer.capacity(), 32);
}

#[test]
fn test_with_capacity() {
    let buffer = SortedBuffer::with_capacity(20);
    assert_eq!(buffer.capacity(), 20);
    assert!(buffer.is_empty());

    let buffer = SortedBuffer::with_capacity(0);
    assert_eq!(buffer.capacity(), 8);
}

#[test]
fn test_with_capacity_grows_by_doubling() {
    let mut buffer = SortedBuffer::with_capacity(3);
    for x in [3.0, 1.0, 2.0, 0.0] {
        buffer.insert(x).unwrap();
    }
    assert_eq!(buffer.capacity(), 6);
    assert_eq!(buffer.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_clear_retains_capacity() {
    let mut buffer = buffer_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(buffer.capacity(), 16);

    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 16);
}

#[test]
fn test_clone_is_deep_and_keeps_capacity() {
    let original = buffer_of(&[1.0, 2.0, 3.0]);
    let mut copy = original.clone();

    copy.insert(0.0).unwrap();
    assert_eq!(original.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(copy.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(copy.capacity(), original.capacity());
}

// =============================================================================
// Erase Tests
// =============================================================================

#[test]
fn test_erase_value_single() {
    let mut buffer = buffer_of(&[3.0, 3.0, 5.0, 8.0]);
    assert_eq!(buffer.erase_value(3.0, 1).unwrap(), 1);
    assert_eq!(buffer.as_slice(), &[3.0, 5.0, 8.0]);
}

#[test]
fn test_erase_value_up_to_count() {
    let mut buffer = buffer_of(&[1.0, 2.0, 2.0, 2.0, 3.0]);
    assert_eq!(buffer.erase_value(2.0, 2).unwrap(), 2);
    assert_eq!(buffer.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_erase_value_all_occurrences() {
    let mut buffer = buffer_of(&[1.0, 2.0, 2.0, 2.0, 3.0]);
    assert_eq!(buffer.erase_value(2.0, usize::MAX).unwrap(), 3);
    assert_eq!(buffer.as_slice(), &[1.0, 3.0]);
}

#[test]
fn test_erase_value_absent() {
    let mut buffer = buffer_of(&[1.0, 3.0]);
    assert_eq!(buffer.erase_value(2.0, 5).unwrap(), 0);
    assert_eq!(buffer.erase_value(f64::NAN, 1).unwrap(), 0);
    assert_eq!(buffer.len(), 2);
}

#[test]
fn test_erase_value_zero_count_rejected() {
    let mut buffer = buffer_of(&[1.0]);
    let err = buffer.erase_value(1.0, 0).unwrap_err();
    assert!(matches!(err, StatsError::InvalidCount(0)));
    assert_eq!(buffer.len(), 1);
}

#[test]
fn test_erase_at() {
    let mut buffer = buffer_of(&[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(buffer.erase_at(1).unwrap(), 2.0);
    assert_eq!(buffer.as_slice(), &[1.0, 3.0, 4.0]);
    assert_eq!(buffer.erase_at(2).unwrap(), 4.0);
    assert_eq!(buffer.as_slice(), &[1.0, 3.0]);
}

#[test]
fn test_erase_at_out_of_range() {
    let mut buffer = buffer_of(&[1.0]);
    let err = buffer.erase_at(1).unwrap_err();
    assert!(matches!(err, StatsError::IndexOutOfRange { index: 1, len: 1 }));

    let mut empty = SortedBuffer::new();
    assert!(empty.erase_at(0).is_err());
}

#[test]
fn test_erase_keeps_capacity() {
    let mut buffer = buffer_of(&[1.0, 2.0, 3.0]);
    buffer.erase_at(0).unwrap();
    buffer.erase_value(2.0, 1).unwrap();
    assert_eq!(buffer.capacity(), 8);
}

// =============================================================================
// Contract Violation Tests
// =============================================================================

#[test]
fn test_insert_rejects_non_finite() {
    let mut buffer = SortedBuffer::new();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = buffer.insert(bad).unwrap_err();
        assert!(matches!(err, StatsError::NonFiniteValue(_)));
        assert_eq!(err.kind(), ErrorKind::ContractViolation);
    }

    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 0);
}

// =============================================================================
// Bulk Insertion Tests
// =============================================================================

#[test]
fn test_extend_from_tokens_skips_bad_tokens() {
    let mut buffer = SortedBuffer::new();
    let text = "4 2.5 abc -1 7e1 12kg NaN inf 1e999 0";

    let inserted = buffer.extend_from_tokens(text.split_whitespace());

    assert_eq!(inserted, 5);
    assert_eq!(buffer.as_slice(), &[-1.0, 0.0, 2.5, 4.0, 70.0]);
}

#[test]
fn test_extend_from_tokens_empty_source() {
    let mut buffer = SortedBuffer::new();
    assert_eq!(buffer.extend_from_tokens(Vec::<&str>::new()), 0);
    assert_eq!(buffer.capacity(), 0);
}
