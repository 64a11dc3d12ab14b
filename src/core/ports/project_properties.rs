//! Project property map port
//!
//! Defines the one operation the importer performs on the project's
//! property map: insert.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Mutable property map owned by the surrounding build
///
/// Insertion is unconditional; an existing value for the key is replaced.
pub trait ProjectProperties {
    /// Insert a property, returning the value it replaced
    fn insert_property(&mut self, key: String, value: String) -> Option<String>;
}

impl<S: BuildHasher> ProjectProperties for HashMap<String, String, S> {
    fn insert_property(&mut self, key: String, value: String) -> Option<String> {
        self.insert(key, value)
    }
}

impl ProjectProperties for BTreeMap<String, String> {
    fn insert_property(&mut self, key: String, value: String) -> Option<String> {
        self.insert(key, value)
    }
}
