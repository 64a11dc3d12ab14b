//! BOM configuration model
//!
//! A `BomSpec` says: "import these properties from that BOM, under this prefix."
//! It mirrors one `[[bom]]` table of `bomprops.toml`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Packaging of the descriptor file requested for every BOM
pub const POM_EXTENSION: &str = "pom";

/// One BOM to import, as configured by the user
///
/// Every field is optional at this level so that a missing key reaches the
/// validator instead of failing inside the TOML layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomSpec {
    /// Artifact group (e.g., "org.junit")
    #[serde(default)]
    pub group_id: Option<String>,

    /// Artifact name (e.g., "junit-bom")
    #[serde(default)]
    pub artifact_id: Option<String>,

    /// Artifact version (e.g., "5.10.0")
    #[serde(default)]
    pub version: Option<String>,

    /// Namespace prepended, with a `.`, to every imported key
    #[serde(default)]
    pub prefix: Option<String>,

    /// Glob patterns; a key must match at least one
    #[serde(default)]
    pub includes: Option<Vec<String>>,

    /// Glob patterns; a key matching any of them is dropped
    #[serde(default)]
    pub excludes: Option<Vec<String>>,

    /// Case mode for both include and exclude matching
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

const fn default_case_sensitive() -> bool {
    true
}

impl Default for BomSpec {
    fn default() -> Self {
        Self {
            group_id: None,
            artifact_id: None,
            version: None,
            prefix: None,
            includes: None,
            excludes: None,
            case_sensitive: default_case_sensitive(),
        }
    }
}

impl BomSpec {
    /// Create a spec for the given coordinates and prefix, including every key
    #[must_use]
    pub fn new(coordinates: &Coordinates, prefix: &str) -> Self {
        Self {
            group_id: Some(coordinates.group_id.clone()),
            artifact_id: Some(coordinates.artifact_id.clone()),
            version: Some(coordinates.version.clone()),
            prefix: Some(prefix.to_string()),
            includes: Some(vec!["*".to_string()]),
            ..Self::default()
        }
    }

    /// Replace the include patterns
    #[must_use]
    pub fn with_includes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the exclude patterns
    #[must_use]
    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the case mode
    #[must_use]
    pub const fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Fully-qualified id, `groupId:artifactId:version`
    ///
    /// Absent parts render as empty strings, so the id is usable in
    /// messages even for a spec that has not been validated yet.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }
}

/// Errors from parsing a `groupId:artifactId:version` string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatesError {
    /// Wrong number of `:`-separated parts
    #[error("expected groupId:artifactId:version, got '{0}'")]
    Malformed(String),

    /// One of the parts is blank
    #[error("blank {field} in '{raw}'")]
    Blank {
        /// Name of the blank part
        field: &'static str,
        /// The string that was parsed
        raw: String,
    },
}

/// The address of an artifact in a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Artifact group
    pub group_id: String,
    /// Artifact name
    pub artifact_id: String,
    /// Artifact version
    pub version: String,
}

impl Coordinates {
    /// Create coordinates from their three parts
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [group_id, artifact_id, version] = parts.as_slice() else {
            return Err(CoordinatesError::Malformed(s.to_string()));
        };

        for (field, value) in [("groupId", group_id), ("artifactId", artifact_id), ("version", version)] {
            if value.trim().is_empty() {
                return Err(CoordinatesError::Blank {
                    field,
                    raw: s.to_string(),
                });
            }
        }

        Ok(Self::new(*group_id, *artifact_id, *version))
    }
}

/// A request for one artifact file from a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// Which artifact
    pub coordinates: Coordinates,
    /// File extension of the requested artifact (the packaging kind)
    pub extension: String,
}

impl ArtifactRequest {
    /// Request the POM descriptor of an artifact
    #[must_use]
    pub fn pom(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            extension: POM_EXTENSION.to_string(),
        }
    }
}

impl std::fmt::Display for ArtifactRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.coordinates, self.extension)
    }
}
