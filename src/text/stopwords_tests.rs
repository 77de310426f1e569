use super::*;

#[test]
fn test_english_filters_common_words() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["the", "cat", "is", "on", "a", "mat"];
    assert_eq!(filter.filter(&tokens), vec!["cat", "mat"]);
}

#[test]
fn test_matching_is_case_insensitive() {
    let filter = StopWordsFilter::english();
    assert!(filter.is_stop_word("THE"));
    assert!(filter.is_stop_word("The"));
}

#[test]
fn test_custom_words() {
    let filter = StopWordsFilter::new(["sample", "item"]);
    let tokens = vec!["Sample", "Item", "42"];
    assert_eq!(filter.filter(&tokens), vec!["42"]);
}

#[test]
fn test_non_stop_words_pass_through_in_order() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["space", "opera", "heist"];
    assert_eq!(filter.filter(&tokens), vec!["space", "opera", "heist"]);
}
