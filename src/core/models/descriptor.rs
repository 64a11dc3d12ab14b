//! Descriptor model
//!
//! The parts of an artifact descriptor (a POM) the importer cares about.

use std::collections::HashMap;

/// Flat `key -> value` property block of a descriptor
///
/// No ordering contract; consumers must not depend on visit order.
pub type PropertyTable = HashMap<String, String>;

/// A parsed artifact descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Declared group, if any (may be inherited from a parent instead)
    pub group_id: Option<String>,
    /// Declared artifact name
    pub artifact_id: Option<String>,
    /// Declared version, if any
    pub version: Option<String>,
    /// Declared packaging (`pom` for a BOM)
    pub packaging: Option<String>,
    /// The `<properties>` block, verbatim
    pub properties: PropertyTable,
}
