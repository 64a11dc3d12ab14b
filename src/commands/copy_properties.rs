//! Import properties from the configured BOMs

use std::path::{Path, PathBuf};

use anyhow::Context;

use bomprops::adapters::maven::RepositoryChain;
use bomprops::adapters::pom::PomReader;
use bomprops::adapters::properties::write_properties;
use bomprops::adapters::toml::{find_project_file, load_file};
use bomprops::config::GlobalConfig;
use bomprops::core::services::copy_properties as run_import;
use bomprops::output::{CopyResult, OutputMode};

/// Run the import described by a bomprops.toml
pub fn copy_properties(
    config: Option<&Path>,
    repos: &[PathBuf],
    output: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config_path = match config {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir()?;
            find_project_file(&cwd)
                .context("No bomprops.toml found. Run 'bomprops init' to create one")?
        },
    };

    let project = load_file(&config_path)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));

    let roots = GlobalConfig::load().repository_roots(repos, &project.repository_paths(base));
    log::debug!("Repository search order: {roots:?}");
    let resolver = RepositoryChain::from_roots(roots);

    let mut properties = project.properties;
    let report = run_import(&resolver, &PomReader::new(), Some(&project.boms), &mut properties)?;

    if let Some(path) = output {
        write_properties(path, &properties)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    CopyResult {
        report,
        properties,
        output_file: output.map(|p| p.display().to_string()),
    }
    .render(mode);

    Ok(())
}
