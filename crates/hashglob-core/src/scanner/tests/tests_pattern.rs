//! Tests for glob pattern parsing

#![allow(clippy::expect_used)]

use crate::scanner::{GlobError, GlobPattern};
use rstest::rstest;
use std::path::{Path, PathBuf};

fn parse(line: &str) -> GlobPattern {
    GlobPattern::parse(line, Path::new("/base"))
        .expect("Failed to parse pattern")
        .expect("Pattern should not be skipped")
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("# a comment")]
#[case("  # indented comment")]
fn test_blank_and_comment_lines_are_skipped(#[case] line: &str) {
    let parsed = GlobPattern::parse(line, Path::new("/base")).expect("Failed to parse");
    assert!(parsed.is_none());
}

#[rstest]
#[case("/repo/src/*.rs", "/repo/src")]
#[case("/repo/**/*.rs", "/repo")]
#[case("/repo/file.txt", "/repo/file.txt")]
#[case("src/*.rs", "/base/src")]
#[case("./src/lib.rs", "/base/src/lib.rs")]
#[case("*.rs", "/base")]
#[case("/repo/a?c/x", "/repo")]
#[case("/repo/[ab]/x", "/repo")]
fn test_search_root(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(parse(line).search_root(), Path::new(expected));
}

#[test]
fn test_matches_within_single_component() {
    let pattern = parse("/repo/*.rs");

    assert!(pattern.matches(Path::new("/repo/main.rs")));
    assert!(!pattern.matches(Path::new("/repo/main.py")));
}

#[test]
fn test_matches_descendants_of_a_match() {
    let pattern = parse("/repo/src");

    assert!(pattern.matches(Path::new("/repo/src")));
    assert!(pattern.matches(Path::new("/repo/src/lib.rs")));
    assert!(pattern.matches(Path::new("/repo/src/nested/mod.rs")));
    assert!(!pattern.matches(Path::new("/repo/srcs/lib.rs")));
    assert!(!pattern.matches(Path::new("/repo")));
}

#[test]
fn test_globstar_crosses_directories() {
    let pattern = parse("/repo/**/*.lock");

    assert!(pattern.matches(Path::new("/repo/Cargo.lock")));
    assert!(pattern.matches(Path::new("/repo/a/b/yarn.lock")));
}

#[test]
fn test_relative_pattern_is_anchored_at_base() {
    let pattern = parse("data/*.json");

    assert!(pattern.matches(Path::new("/base/data/a.json")));
    assert!(!pattern.matches(Path::new("/elsewhere/data/a.json")));
}

#[test]
fn test_literal_root_with_glob_characters_is_escaped() {
    let pattern = GlobPattern::parse("*.txt", Path::new("/base/[weird]"))
        .expect("Failed to parse")
        .expect("Pattern should not be skipped");

    assert_eq!(pattern.search_root(), PathBuf::from("/base/[weird]"));
    assert!(pattern.matches(Path::new("/base/[weird]/a.txt")));
    assert!(!pattern.matches(Path::new("/base/w/a.txt")));
}

#[test]
fn test_negation() {
    let pattern = parse("!/repo/*.log");
    assert!(pattern.is_negated());
    assert!(pattern.matches(Path::new("/repo/debug.log")));
    assert!(pattern.matches(Path::new("/repo/x.log/inner")));
    assert!(!pattern.matches(Path::new("/repo/x.txt/inner")));

    let pattern = parse("!!/repo/*.log");
    assert!(!pattern.is_negated());
    assert_eq!(pattern.as_str(), "!!/repo/*.log");
}

#[test]
fn test_empty_negation_is_an_error() {
    let err = GlobPattern::parse("!", Path::new("/base")).expect_err("Should fail");
    assert!(matches!(err, GlobError::EmptyNegation(_)));
}

#[test]
fn test_invalid_glob_is_an_error() {
    let err = GlobPattern::parse("/repo/a**b", Path::new("/base")).expect_err("Should fail");
    assert!(matches!(err, GlobError::Invalid { .. }));
}
