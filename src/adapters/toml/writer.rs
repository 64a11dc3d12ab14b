//! TOML writer for bomprops.toml files
//!
//! Produces the commented template written by `bomprops init`.

use std::fs;
use std::path::Path;

use super::parser::ConfigError;

/// Commented starting point for a project file
pub const TEMPLATE: &str = r#"# bomprops configuration
#
# Each [[bom]] imports the <properties> of one BOM into the project,
# publishing every kept key as "<prefix>.<key>".

# Extra repository roots, searched after the local repository
# [repository]
# paths = ["repo"]

# Properties the project starts with
# [properties]
# "project.name" = "demo"

# [[bom]]
# groupId = "org.junit"
# artifactId = "junit-bom"
# version = "5.10.0"
# prefix = "junit"
# includes = ["*.version"]    # at least one pattern must match
# excludes = ["*-SNAPSHOT"]   # any match drops the key
# caseSensitive = true
"#;

/// Write the template to `path`
///
/// Returns `false` without touching the file if it exists and `force` is
/// not set.
pub fn write_template(path: &Path, force: bool) -> Result<bool, ConfigError> {
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(path, TEMPLATE).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}
