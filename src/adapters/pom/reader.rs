//! POM reader
//!
//! Implements the `DescriptorReader` port for Maven POM files. Only the
//! coordinates, the packaging and the `<properties>` block are read; every
//! other element is ignored.

use std::collections::HashMap;
use std::io::BufRead;

use serde::Deserialize;

use crate::core::models::ProjectDescriptor;
use crate::core::ports::{DescriptorError, DescriptorReader};

/// The subset of a `<project>` element we deserialize
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomProject {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    packaging: Option<String>,
    #[serde(default)]
    properties: HashMap<String, String>,
}

/// Reads POM XML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PomReader;

impl PomReader {
    /// Create a new reader
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a POM held in memory
    pub fn read_str(&self, content: &str) -> Result<ProjectDescriptor, DescriptorError> {
        let project: PomProject =
            quick_xml::de::from_str(content).map_err(|e| DescriptorError::Malformed(e.to_string()))?;
        Ok(project.into())
    }
}

impl DescriptorReader for PomReader {
    fn read(&self, input: &mut dyn BufRead) -> Result<ProjectDescriptor, DescriptorError> {
        let project: PomProject =
            quick_xml::de::from_reader(input).map_err(|e| DescriptorError::Malformed(e.to_string()))?;
        Ok(project.into())
    }
}

impl From<PomProject> for ProjectDescriptor {
    fn from(project: PomProject) -> Self {
        Self {
            group_id: project.group_id,
            artifact_id: project.artifact_id,
            version: project.version,
            packaging: project.packaging,
            properties: project.properties,
        }
    }
}
