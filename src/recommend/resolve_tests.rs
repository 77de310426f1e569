use super::*;

fn fixture_resolver() -> TitleResolver {
    TitleResolver::new(["Alpha (2000)", "Beta (2001)", "Gamma (2002)"])
}

#[test]
fn test_exact_match_is_case_sensitive() {
    let resolver = fixture_resolver();
    let resolution = resolver.resolve("Beta (2001)").expect("resolves");
    assert_eq!(resolution.index, 1);
    assert_eq!(resolution.kind, MatchKind::Exact);
    assert_eq!(resolution.matched_title, "Beta (2001)");
}

#[test]
fn test_exact_match_never_falls_through_to_approximate() {
    // "ABCD" matches "abcd" perfectly under case-folding, but the
    // catalog also contains the exact title "ABCD" at a later index.
    let resolver = TitleResolver::new(["abcd", "ABCD"]);
    let resolution = resolver.resolve("ABCD").expect("resolves");
    assert_eq!(resolution.kind, MatchKind::Exact);
    assert_eq!(resolution.index, 1);
}

#[test]
fn test_wrong_case_falls_back_to_approximate() {
    let resolver = fixture_resolver();
    let resolution = resolver.resolve("alpha (2000)").expect("resolves");
    assert_eq!(resolution.index, 0);
    assert_eq!(resolution.matched_title, "Alpha (2000)");
    assert!(matches!(resolution.kind, MatchKind::Approximate { ratio } if ratio == 1.0));
}

#[test]
fn test_no_candidate_above_threshold() {
    let resolver = fixture_resolver();
    let err = resolver.resolve("Nonexistent Title XYZ").expect_err("must fail");
    match err {
        SugerirError::ItemNotFound { query, closest } => {
            assert_eq!(query, "Nonexistent Title XYZ");
            let (_, ratio) = closest.expect("diagnostic candidate present");
            assert!(ratio <= APPROX_THRESHOLD);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_exactly_threshold_ratio_is_rejected() {
    // "abcdef" vs "abcxyz": 3 of 6 positions match, ratio exactly 0.5.
    let resolver = TitleResolver::new(["abcxyz"]);
    assert!(resolver.resolve("abcdef").is_err());
}

#[test]
fn test_tie_keeps_first_candidate_in_catalog_order() {
    // Both candidates score identically against the query; only a
    // strictly greater ratio may replace the current best.
    let resolver = TitleResolver::new(["abcdX", "abcdY"]);
    let resolution = resolver.resolve("abcdZ").expect("resolves");
    assert_eq!(resolution.matched_title, "abcdX");
    assert_eq!(resolution.index, 0);
}

#[test]
fn test_duplicate_titles_last_write_wins() {
    let resolver = TitleResolver::new(["Twin", "Other", "Twin"]);
    let exact = resolver.resolve("Twin").expect("resolves");
    assert_eq!(exact.index, 2);

    // Approximate resolution routes through the same mapping.
    let approx = resolver.resolve("twin").expect("resolves");
    assert_eq!(approx.index, 2);
}

#[test]
fn test_empty_resolver_reports_no_candidates() {
    let resolver = TitleResolver::new(Vec::<String>::new());
    assert!(resolver.is_empty());
    let err = resolver.resolve("anything").expect_err("must fail");
    assert_eq!(
        err,
        SugerirError::ItemNotFound {
            query: "anything".to_string(),
            closest: None,
        }
    );
}

#[test]
fn test_positional_overlap_identical_after_casefold() {
    assert_eq!(positional_overlap("Alpha (2000)", "alpha (2000)"), 1.0);
}

#[test]
fn test_positional_overlap_counts_positions_not_characters() {
    // Same character multiset, shifted positions.
    assert!(positional_overlap("abc", "bca") < 1.0 / 3.0 + 1e-12);
}

#[test]
fn test_positional_overlap_divides_by_longer_length() {
    // 3 matching positions over max(3, 6) characters.
    assert!((positional_overlap("abc", "abcdef") - 0.5).abs() < 1e-12);
}

#[test]
fn test_positional_overlap_empty_strings() {
    assert_eq!(positional_overlap("", ""), 0.0);
    assert_eq!(positional_overlap("a", ""), 0.0);
}
