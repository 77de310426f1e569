use super::*;

#[test]
fn test_from_pairs_sorts_indices() {
    let v = SparseVector::from_pairs(10, vec![(7, 3.0), (2, 1.0), (5, 2.0)]).expect("should succeed");
    let pairs: Vec<_> = v.iter().collect();
    assert_eq!(pairs, vec![(2, 1.0), (5, 2.0), (7, 3.0)]);
}

#[test]
fn test_from_pairs_sums_duplicates() {
    let v = SparseVector::from_pairs(4, vec![(1, 2.0), (1, 3.0)]).expect("should succeed");
    assert_eq!(v.nnz(), 1);
    assert_eq!(v.get(1), 5.0);
}

#[test]
fn test_from_pairs_drops_zeros() {
    let v = SparseVector::from_pairs(4, vec![(0, 0.0), (2, 1.0), (3, -1.0), (3, 1.0)])
        .expect("should succeed");
    assert_eq!(v.nnz(), 1);
    assert_eq!(v.get(2), 1.0);
}

#[test]
fn test_from_pairs_index_out_of_range() {
    let result = SparseVector::from_pairs(3, vec![(3, 1.0)]);
    assert!(result.is_err());
}

#[test]
fn test_dot_two_pointer_merge() {
    let a = SparseVector::from_pairs(6, vec![(0, 1.0), (2, 2.0), (5, 3.0)]).expect("should succeed");
    let b = SparseVector::from_pairs(6, vec![(1, 4.0), (2, 5.0), (5, 6.0)]).expect("should succeed");
    let dot = a.dot(&b).expect("same dimension");
    assert!((dot - (2.0 * 5.0 + 3.0 * 6.0)).abs() < 1e-12);
}

#[test]
fn test_dot_dimension_mismatch() {
    let a = SparseVector::zeros(3);
    let b = SparseVector::zeros(4);
    assert!(a.dot(&b).is_err());
}

#[test]
fn test_norm() {
    let v = SparseVector::from_pairs(5, vec![(0, 3.0), (4, 4.0)]).expect("should succeed");
    assert!((v.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_normalized_has_unit_norm() {
    let v = SparseVector::from_pairs(5, vec![(1, 2.0), (3, 7.0)]).expect("should succeed");
    let unit = v.normalized();
    assert!((unit.norm() - 1.0).abs() < 1e-12);
    assert_eq!(unit.dim(), 5);
}

#[test]
fn test_normalized_zero_vector_unchanged() {
    let v = SparseVector::zeros(5);
    let unit = v.normalized();
    assert!(unit.is_zero());
    assert_eq!(unit, v);
}

#[test]
fn test_get_missing_index_is_zero() {
    let v = SparseVector::from_pairs(5, vec![(2, 1.5)]).expect("should succeed");
    assert_eq!(v.get(0), 0.0);
    assert_eq!(v.get(2), 1.5);
}

#[test]
fn test_serde_round_trip() {
    let v = SparseVector::from_pairs(8, vec![(1, 0.5), (6, 2.5)]).expect("should succeed");
    let json = serde_json::to_string(&v).expect("serialize");
    let back: SparseVector = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, v);
}
