use super::{block_matches, matches_pattern};

fn patterns(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

#[test]
fn matches_pattern_supports_star_and_question() {
    assert!(matches_pattern("abc.example.com", "*.example.com"));
    assert!(matches_pattern("a1.example.com", "a?.example.com"));
    assert!(!matches_pattern("abc.example.com", "a?.example.com"));
    assert!(!matches_pattern("abc.example.org", "*.example.com"));
}

#[test]
fn matches_pattern_is_anchored_at_both_ends() {
    assert!(!matches_pattern("foo.example.com", "example.com"));
    assert!(!matches_pattern("example.com.org", "example.com"));
    assert!(matches_pattern("example.com", "example.com"));
}

#[test]
fn star_matches_the_empty_sequence() {
    assert!(matches_pattern("example.com", "*example.com"));
    assert!(matches_pattern("example.com", "example.com*"));
    assert!(matches_pattern("", "*"));
}

#[test]
fn question_requires_exactly_one_character() {
    assert!(!matches_pattern("", "?"));
    assert!(matches_pattern("a", "?"));
    assert!(!matches_pattern("ab", "?"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(matches_pattern("Foo.Example.COM", "foo.example.com"));
    assert!(matches_pattern("foo.example.com", "FOO.*.COM"));
}

#[test]
fn block_matches_any_positive_pattern() {
    let block = patterns(&["bastion", "*.example.com"]);
    assert!(block_matches(&block, "bastion"));
    assert!(block_matches(&block, "web.example.com"));
    assert!(!block_matches(&block, "web.example.org"));
}

#[test]
fn negated_pattern_excludes_even_when_a_positive_matches() {
    let block = patterns(&["*.example.com", "!foo.example.com"]);
    assert!(block_matches(&block, "bar.example.com"));
    assert!(!block_matches(&block, "foo.example.com"));
}

#[test]
fn negation_alone_never_matches() {
    let block = patterns(&["!foo.example.com"]);
    assert!(!block_matches(&block, "bar.example.com"));
    assert!(!block_matches(&block, "foo.example.com"));
}
