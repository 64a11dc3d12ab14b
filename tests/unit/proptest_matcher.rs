//! Property-based tests for the matcher module
//!
//! Uses proptest to verify properties that should hold for all inputs.

use bomprops::core::services::matches;
use proptest::prelude::*;

proptest! {
    /// Wildcard "*" should match any key
    #[test]
    fn wildcard_matches_any_key(key in "\\PC*") {
        prop_assert!(matches("*", &key, true));
    }

    /// A key without wildcard characters matches itself
    #[test]
    fn literal_matches_self(key in "[a-zA-Z0-9._\\-\\[\\]()+$^|]{0,20}") {
        prop_assert!(matches(&key, &key, true));
    }

    /// A literal only matches an identical key
    #[test]
    fn literal_rejects_other_keys(a in "[a-z.]{1,10}", b in "[a-z.]{1,10}") {
        prop_assume!(a != b);
        prop_assert!(!matches(&a, &b, true));
    }

    /// One "?" per character matches any key of that length
    #[test]
    fn question_marks_match_length(key in "[a-z0-9.]{0,12}") {
        let pattern = "?".repeat(key.chars().count());
        prop_assert!(matches(&pattern, &key, true));
        let longer = format!("{pattern}?");
        prop_assert!(!matches(&longer, &key, true));
    }

    /// "prefix*" matches every key starting with prefix
    #[test]
    fn prefix_star_matches_extensions(prefix in "[a-z.]{0,8}", rest in "[a-z.]{0,8}") {
        let pattern = format!("{prefix}*");
        let key = format!("{prefix}{rest}");
        prop_assert!(matches(&pattern, &key, true));
    }

    /// Case-insensitive matching ignores ASCII case
    #[test]
    fn case_insensitive_ignores_case(key in "[a-zA-Z.]{1,12}") {
        prop_assert!(matches(&key.to_uppercase(), &key, false));
        prop_assert!(matches(&key.to_lowercase(), &key, false));
    }
}
