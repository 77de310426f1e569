use super::*;

fn fixture_vectors() -> Vec<SparseVector> {
    vec![
        SparseVector::from_pairs(4, vec![(0, 0.4), (1, 1.1)]).expect("valid"),
        SparseVector::from_pairs(4, vec![(0, 0.4), (2, 1.1)]).expect("valid"),
        SparseVector::from_pairs(4, vec![(3, 1.1)]).expect("valid"),
        SparseVector::zeros(4),
    ]
}

fn dense_index() -> SimilarityIndex {
    SimilarityIndex::build(fixture_vectors(), &IndexOptions::default()).expect("build")
}

fn on_demand_index(row_cache: usize) -> SimilarityIndex {
    let options = IndexOptions::default()
        .with_dense_limit(0)
        .with_row_cache(row_cache);
    SimilarityIndex::build(fixture_vectors(), &options).expect("build")
}

#[test]
fn test_self_similarity_is_exactly_one() {
    let index = dense_index();
    for i in 0..3 {
        assert_eq!(index.similarity(i, i).expect("in range"), 1.0);
    }
}

#[test]
fn test_degenerate_self_similarity_is_zero() {
    let index = dense_index();
    assert_eq!(index.similarity(3, 3).expect("in range"), 0.0);
    assert_eq!(index.degenerate_count(), 1);
}

#[test]
fn test_symmetry() {
    let index = dense_index();
    for i in 0..4 {
        for j in 0..4 {
            let ij = index.similarity(i, j).expect("in range");
            let ji = index.similarity(j, i).expect("in range");
            assert!((ij - ji).abs() < 1e-12, "asymmetry at ({i}, {j})");
        }
    }
}

#[test]
fn test_scores_within_unit_interval() {
    let index = dense_index();
    for i in 0..4 {
        for j in 0..4 {
            let sim = index.similarity(i, j).expect("in range");
            assert!((0.0..=1.0).contains(&sim), "out of range at ({i}, {j}): {sim}");
        }
    }
}

#[test]
fn test_zero_vector_scores_zero_against_everything() {
    let index = dense_index();
    for j in 0..4 {
        assert_eq!(index.similarity(3, j).expect("in range"), 0.0);
    }
}

#[test]
fn test_neighbors_excludes_query_item() {
    let index = dense_index();
    for i in 0..4 {
        let neighbors = index.neighbors(i, 4).expect("in range");
        assert!(neighbors.iter().all(|&(j, _)| j != i));
    }
}

#[test]
fn test_neighbors_length_clamped() {
    let index = dense_index();
    assert_eq!(index.neighbors(0, 0).expect("in range").len(), 0);
    assert_eq!(index.neighbors(0, 2).expect("in range").len(), 2);
    assert_eq!(index.neighbors(0, 100).expect("in range").len(), 3);
}

#[test]
fn test_neighbors_sorted_descending_with_index_tiebreak() {
    let index = dense_index();
    let neighbors = index.neighbors(0, 3).expect("in range");
    // Item 1 shares a term; items 2 and 3 both score zero and must
    // appear in ascending catalog order.
    assert_eq!(neighbors[0].0, 1);
    assert!(neighbors[0].1 > 0.0);
    assert_eq!(neighbors[1], (2, 0.0));
    assert_eq!(neighbors[2], (3, 0.0));
}

#[test]
fn test_neighbors_out_of_range_index() {
    let index = dense_index();
    assert!(index.neighbors(4, 1).is_err());
    assert!(index.similarity(0, 4).is_err());
}

#[test]
fn test_dense_and_on_demand_agree() {
    let dense = dense_index();
    let on_demand = on_demand_index(2);
    for i in 0..4 {
        let a = dense.neighbors(i, 4).expect("in range");
        let b = on_demand.neighbors(i, 4).expect("in range");
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.0, y.0);
            assert!((x.1 - y.1).abs() < 1e-12);
        }
    }
}

#[test]
fn test_on_demand_without_cache() {
    let index = on_demand_index(0);
    let neighbors = index.neighbors(0, 3).expect("in range");
    assert_eq!(neighbors[0].0, 1);
}

#[test]
fn test_row_cache_eviction_keeps_results_correct() {
    let index = on_demand_index(1);
    // Alternate rows so the single cache slot churns.
    for _ in 0..3 {
        let a = index.neighbors(0, 3).expect("in range");
        let b = index.neighbors(1, 3).expect("in range");
        assert_eq!(a[0].0, 1);
        assert_eq!(b[0].0, 0);
    }
}

#[test]
fn test_cancelled_token_aborts_dense_build() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = SimilarityIndex::build_with(fixture_vectors(), &IndexOptions::default(), &cancel);
    assert_eq!(result.err(), Some(SugerirError::Cancelled));
}

#[test]
fn test_cancelled_token_aborts_on_demand_build() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let options = IndexOptions::default().with_dense_limit(0);
    let result = SimilarityIndex::build_with(fixture_vectors(), &options, &cancel);
    assert_eq!(result.err(), Some(SugerirError::Cancelled));
}

#[test]
fn test_empty_index() {
    let index = SimilarityIndex::build(Vec::new(), &IndexOptions::default()).expect("build");
    assert!(index.is_empty());
    assert_eq!(index.degenerate_count(), 0);
    assert!(index.neighbors(0, 1).is_err());
}
