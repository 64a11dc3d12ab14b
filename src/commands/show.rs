//! Show the properties declared by one BOM

use std::collections::BTreeMap;
use std::path::PathBuf;

use bomprops::adapters::maven::RepositoryChain;
use bomprops::adapters::pom::PomReader;
use bomprops::config::GlobalConfig;
use bomprops::core::models::Coordinates;
use bomprops::core::services::{BomLoader, KeyPattern, matches_any};
use bomprops::output::{BomListing, OutputMode};

/// Include/exclude globs for `show`
#[derive(Debug, Clone)]
pub struct Filter {
    /// Keys must match one of these; empty means "everything"
    pub includes: Vec<String>,
    /// Keys matching any of these are hidden
    pub excludes: Vec<String>,
    /// Case mode for both lists
    pub case_sensitive: bool,
}

impl Filter {
    fn compile(&self) -> anyhow::Result<(Vec<KeyPattern>, Vec<KeyPattern>)> {
        let compile = |patterns: &[String]| -> anyhow::Result<Vec<KeyPattern>> {
            patterns
                .iter()
                .map(|p| KeyPattern::new(p, self.case_sensitive).map_err(Into::into))
                .collect()
        };

        let includes = if self.includes.is_empty() {
            vec![KeyPattern::new("*", self.case_sensitive)?]
        } else {
            compile(&self.includes)?
        };
        Ok((includes, compile(&self.excludes)?))
    }
}

/// Resolve one BOM and print its (filtered) property table
pub fn show(
    coordinates: &str,
    repos: &[PathBuf],
    filter: &Filter,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let coordinates: Coordinates = coordinates.parse()?;
    let (includes, excludes) = filter.compile()?;

    let resolver = RepositoryChain::from_roots(GlobalConfig::load().repository_roots(repos, &[]));
    let reader = PomReader::new();
    let table = BomLoader::new(&resolver, &reader).load(&coordinates)?;

    let declared = table.len();
    let properties: BTreeMap<String, String> = table
        .into_iter()
        .filter(|(key, _)| matches_any(&includes, key) && !matches_any(&excludes, key))
        .collect();

    BomListing {
        bom: coordinates.to_string(),
        declared,
        properties,
    }
    .render(mode);

    Ok(())
}
