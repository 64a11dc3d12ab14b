//! Tests for key glob matching

use bomprops::core::services::{KeyPattern, matches};

#[test]
fn test_star_matches_any_run() {
    assert!(matches("*", "anything.at.all", true));
    assert!(matches("*.version", "junit.version", true));
    assert!(matches("junit.*", "junit.", true));
    assert!(!matches("*.version", "junit.versions", true));
}

#[test]
fn test_question_mark_matches_exactly_one() {
    assert!(matches("v?", "v1", true));
    assert!(!matches("v?", "v", true));
    assert!(!matches("v?", "v10", true));
    assert!(matches("??", "éa", true));
}

#[test]
fn test_backtracking_over_several_stars() {
    assert!(matches("a*b*c", "axbyzc", true));
    assert!(matches("*a*a*", "banana", true));
    assert!(!matches("*a*a*a*a*", "banana", true));
}

#[test]
fn test_no_path_segmentation() {
    assert!(matches("*", "a/b/c", true));
    assert!(matches("a?c", "a/c", true));
}

#[test]
fn test_case_folding() {
    assert!(matches("foo", "Foo", false));
    assert!(!matches("foo", "Foo", true));
    assert!(matches("STRASSE.*", "strasse.version", false));
    assert!(matches("ÉTÉ", "été", false));
}

#[test]
fn test_compiled_pattern_reuse() {
    let pattern = KeyPattern::new("*-SNAPSHOT", true).unwrap();
    for key in ["1.0-SNAPSHOT", "-SNAPSHOT", "x.y-SNAPSHOT"] {
        assert!(pattern.matches(key), "{key}");
    }
    assert!(!pattern.matches("1.0-snapshot"));
}
