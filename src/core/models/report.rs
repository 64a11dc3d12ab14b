//! Import report
//!
//! What a run of the importer did, per BOM, in processing order.

use serde::Serialize;

/// Outcome for one imported BOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomImport {
    /// `groupId:artifactId:version`
    pub bom: String,
    /// Prefix the keys were published under
    pub prefix: String,
    /// Number of properties inserted into the project map
    pub count: usize,
}

/// Per-BOM counts for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Processed BOMs, in configuration order
    pub boms: Vec<BomImport>,
}

impl ImportReport {
    /// Total number of inserted properties across all BOMs
    #[must_use]
    pub fn total(&self) -> usize {
        self.boms.iter().map(|b| b.count).sum()
    }

    /// Whether no BOM was processed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boms.is_empty()
    }
}
