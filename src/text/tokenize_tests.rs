use super::*;

#[test]
fn test_delimiter_splits_on_pipe() {
    let tokenizer = DelimiterTokenizer::new('|');
    let tokens = tokenizer.tokenize("Action|Comedy|Drama").expect("should succeed");
    assert_eq!(tokens, vec!["Action", "Comedy", "Drama"]);
}

#[test]
fn test_delimiter_trims_and_drops_empty() {
    let tokenizer = DelimiterTokenizer::new('|');
    let tokens = tokenizer.tokenize(" Action | |Comedy|").expect("should succeed");
    assert_eq!(tokens, vec!["Action", "Comedy"]);
}

#[test]
fn test_delimiter_empty_text_yields_no_tokens() {
    let tokenizer = DelimiterTokenizer::default();
    let tokens = tokenizer.tokenize("").expect("should succeed");
    assert!(tokens.is_empty());
}

#[test]
fn test_delimiter_custom_char() {
    let tokenizer = DelimiterTokenizer::new(',');
    let tokens = tokenizer.tokenize("a,b,c").expect("should succeed");
    assert_eq!(tokens, vec!["a", "b", "c"]);
}

#[test]
fn test_whitespace_splits_on_any_whitespace() {
    let tokenizer = WhitespaceTokenizer::new();
    let tokens = tokenizer.tokenize("one\ttwo\nthree  four").expect("should succeed");
    assert_eq!(tokens, vec!["one", "two", "three", "four"]);
}

#[test]
fn test_whitespace_empty_text_yields_no_tokens() {
    let tokenizer = WhitespaceTokenizer::new();
    let tokens = tokenizer.tokenize("   ").expect("should succeed");
    assert!(tokens.is_empty());
}
