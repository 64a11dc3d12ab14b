//! BOM validator service - checks a `BomSpec` before anything is loaded
//!
//! A spec that fails here never writes a single property.

use thiserror::Error;

use super::matcher::{KeyPattern, PatternError};
use crate::core::models::{ArtifactRequest, BomSpec, Coordinates};

/// Configuration errors in a single BOM spec
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required string field is absent or blank
    #[error("BOM {field} is required (bom: '{bom}')")]
    MissingField {
        /// Id of the offending BOM, as far as it is known
        bom: String,
        /// Configuration key that is missing
        field: &'static str,
    },

    /// `includes` is absent or empty
    #[error("BOM has no includes (bom: '{bom}')")]
    NoIncludes {
        /// Id of the offending BOM
        bom: String,
    },

    /// An include or exclude pattern failed to compile
    #[error("BOM has an invalid pattern (bom: '{bom}'): {source}")]
    InvalidPattern {
        /// Id of the offending BOM
        bom: String,
        /// The compile error
        #[source]
        source: PatternError,
    },
}

impl ValidationError {
    /// The configuration key this error is about
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } => *field,
            Self::NoIncludes { .. } => "includes",
            Self::InvalidPattern { .. } => "patterns",
        }
    }
}

/// A spec that passed validation, with its patterns compiled
#[derive(Debug, Clone)]
pub struct ValidBom {
    /// Where the descriptor lives
    pub coordinates: Coordinates,
    /// Namespace for imported keys
    pub prefix: String,
    /// At least one pattern
    pub includes: Vec<KeyPattern>,
    /// Possibly empty
    pub excludes: Vec<KeyPattern>,
}

impl ValidBom {
    /// `groupId:artifactId:version`
    #[must_use]
    pub fn id(&self) -> String {
        self.coordinates.to_string()
    }

    /// The POM request for this BOM
    #[must_use]
    pub fn request(&self) -> ArtifactRequest {
        ArtifactRequest::pom(self.coordinates.clone())
    }

    /// Whether `key` survives the include and exclude passes
    #[must_use]
    pub fn accepts(&self, key: &str) -> bool {
        super::matcher::matches_any(&self.includes, key)
            && !super::matcher::matches_any(&self.excludes, key)
    }

    /// The key as published in the project map
    #[must_use]
    pub fn prefixed(&self, key: &str) -> String {
        format!("{}.{key}", self.prefix)
    }
}

/// Validate a spec, reporting the first failed field
///
/// Fields are checked in the order `groupId`, `artifactId`, `version`,
/// `includes`, `prefix`.
pub fn validate(spec: &BomSpec) -> Result<ValidBom, ValidationError> {
    let bom = spec.id();

    let group_id = required(spec.group_id.as_deref(), "groupId", &bom)?;
    let artifact_id = required(spec.artifact_id.as_deref(), "artifactId", &bom)?;
    let version = required(spec.version.as_deref(), "version", &bom)?;

    let includes = match spec.includes.as_deref() {
        Some(patterns) if !patterns.is_empty() => patterns,
        _ => return Err(ValidationError::NoIncludes { bom }),
    };

    let prefix = required(spec.prefix.as_deref(), "prefix", &bom)?;

    let includes = compile(includes, spec.case_sensitive, &bom)?;
    let excludes = compile(spec.excludes.as_deref().unwrap_or_default(), spec.case_sensitive, &bom)?;

    Ok(ValidBom {
        coordinates: Coordinates::new(group_id, artifact_id, version),
        prefix: prefix.to_string(),
        includes,
        excludes,
    })
}

fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
    bom: &str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField {
            bom: bom.to_string(),
            field,
        }),
    }
}

fn compile(
    patterns: &[String],
    case_sensitive: bool,
    bom: &str,
) -> Result<Vec<KeyPattern>, ValidationError> {
    patterns
        .iter()
        .map(|p| {
            KeyPattern::new(p, case_sensitive).map_err(|source| ValidationError::InvalidPattern {
                bom: bom.to_string(),
                source,
            })
        })
        .collect()
}
