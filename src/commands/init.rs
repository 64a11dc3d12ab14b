//! Create a bomprops.toml template

use bomprops::adapters::toml::write_template;
use bomprops::output::{OperationResult, OutputMode};
use bomprops::paths;

/// Write a commented bomprops.toml in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::project_file();

    let result = if write_template(&path, force)? {
        OperationResult {
            success: true,
            message: format!(
                "Created {}\n\nNext steps:\n  edit the [[bom]] entries\n  bomprops copy-properties",
                path.display()
            ),
        }
    } else {
        OperationResult {
            success: false,
            message: format!("Already initialized ({} exists). Use --force to overwrite.", path.display()),
        }
    };

    result.render(mode);
    Ok(())
}
