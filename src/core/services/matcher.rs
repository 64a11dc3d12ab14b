//! Key matcher service - matches property keys against glob patterns
//!
//! Patterns use filename-glob wildcards over the whole key, with no path
//! segmentation:
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//! - every other character matches itself
//!
//! Matching is pure; a compiled [`KeyPattern`] can be shared across threads.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Errors that can occur when compiling a key pattern
#[derive(Debug, Error)]
pub enum PatternError {
    /// The translated expression was rejected (e.g. too large)
    #[error("invalid pattern '{pattern}': {reason}")]
    Invalid {
        /// The glob as written
        pattern: String,
        /// Why it was rejected
        reason: String,
    },
}

/// A compiled key pattern
#[derive(Debug, Clone)]
pub struct KeyPattern {
    pattern: String,
    regex: Regex,
}

impl KeyPattern {
    /// Compile a glob pattern in the given case mode
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(&glob_to_regex(pattern))
            .case_insensitive(!case_sensitive)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| PatternError::Invalid {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The glob as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Check if the whole key matches this pattern
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

impl std::fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Check if a glob pattern matches a key
///
/// Convenience for one-off checks; the importer compiles patterns once per
/// BOM instead. A pattern that fails to compile matches nothing.
#[must_use]
pub fn matches(pattern: &str, key: &str, case_sensitive: bool) -> bool {
    KeyPattern::new(pattern, case_sensitive).is_ok_and(|p| p.matches(key))
}

/// Check if any of the patterns matches the key
#[must_use]
pub fn matches_any(patterns: &[KeyPattern], key: &str) -> bool {
    patterns.iter().any(|p| p.matches(key))
}

/// Translate a glob into an anchored regular expression
fn glob_to_regex(glob: &str) -> String {
    let mut regex = String::with_capacity(glob.len() * 2 + 2);
    regex.push('^');

    let mut previous_star = false;
    for c in glob.chars() {
        match c {
            // Runs of `*` are equivalent to a single one
            '*' if previous_star => {},
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            c => {
                let mut buf = [0; 4];
                regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            },
        }
        previous_star = c == '*';
    }

    regex.push('$');
    regex
}
