//! Tests for the IndexVec module.

use super::*;

define_idx!(TestId);

// ============================================================================
// BASIC OPERATIONS
// ============================================================================

#[test]
fn test_new_is_empty() {
    let vec: IndexVec<TestId, i32> = IndexVec::new();
    assert_eq!(vec.get(TestId(0)), None);
    assert_eq!(format!("{:?}", vec), "[]");
}

#[test]
fn test_push_and_index() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::with_capacity(3);
    let idx1 = vec.push(10);
    let idx2 = vec.push(20);
    let idx3 = vec.push(30);

    assert_eq!((idx1, idx2, idx3), (TestId(0), TestId(1), TestId(2)));
    assert_eq!(vec[idx1], 10);
    assert_eq!(vec[idx2], 20);
    assert_eq!(vec[idx3], 30);
}

#[test]
fn test_get_out_of_bounds() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::new();
    vec.push(1);
    assert_eq!(vec.get(TestId(0)), Some(&1));
    assert_eq!(vec.get(TestId(1)), None);
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_panics() {
    let vec: IndexVec<TestId, i32> = IndexVec::default();
    let _ = vec[TestId(0)];
}

// ============================================================================
// LINKED ACCESS
// ============================================================================

#[test]
fn test_index_mut_links_neighbours() {
    let mut vec: IndexVec<TestId, (char, Option<TestId>)> = IndexVec::new();
    let a = vec.push(('a', None));
    let b = vec.push(('b', None));
    vec[a].1 = Some(b);
    vec[b].0 = 'c';

    let next = vec[a].1.and_then(|id| vec.get(id));
    assert_eq!(next, Some(&('c', None)));
}
