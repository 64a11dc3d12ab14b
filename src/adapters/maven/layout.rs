//! Maven repository layout
//!
//! Maps coordinates to the relative path an artifact file has inside a
//! repository using the default (Maven 2+) layout:
//!
//! ```text
//! <root>/
//! └── org/junit/                     # groupId, dots become directories
//!     └── junit-bom/                 # artifactId
//!         └── 5.10.0/                # version
//!             └── junit-bom-5.10.0.pom
//! ```

use std::path::PathBuf;

use crate::core::models::ArtifactRequest;

/// Relative path of the requested artifact file inside a repository
#[must_use]
pub fn artifact_path(request: &ArtifactRequest) -> PathBuf {
    let coordinates = &request.coordinates;

    let mut path: PathBuf = coordinates.group_id.split('.').collect();
    path.push(&coordinates.artifact_id);
    path.push(&coordinates.version);
    path.push(format!(
        "{}-{}.{}",
        coordinates.artifact_id, coordinates.version, request.extension
    ));
    path
}
