//! Property importer - the `copy-properties` driver
//!
//! For each configured BOM, in order: validate it, load its property table,
//! keep the keys that match an include and no exclude, and insert them into
//! the project map as `prefix.key`.
//!
//! The first failing BOM aborts the run. Properties written by earlier BOMs
//! stay in the map; there is no rollback.

use thiserror::Error;

use super::loader::{BomLoader, LoadError};
use super::validator::{ValidBom, ValidationError, validate};
use crate::core::models::{BomImport, BomSpec, ImportReport, PropertyTable};
use crate::core::ports::{ArtifactResolver, DescriptorReader, ProjectProperties};

/// Terminal failure of an import run
#[derive(Debug, Error)]
pub enum ImportError {
    /// A BOM spec is misconfigured
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A BOM could not be resolved or parsed
    #[error("Failed to process {bom}")]
    Failed {
        /// `groupId:artifactId:version` of the failing BOM
        bom: String,
        /// The original cause
        #[source]
        source: LoadError,
    },
}

/// Imports BOM properties into a project property map
#[derive(Debug)]
pub struct PropertyImporter<'a, R: ?Sized, D: ?Sized> {
    loader: BomLoader<'a, R, D>,
}

impl<'a, R, D> PropertyImporter<'a, R, D>
where
    R: ArtifactResolver + ?Sized,
    D: DescriptorReader + ?Sized,
{
    /// Create an importer over the given collaborators
    pub const fn new(resolver: &'a R, reader: &'a D) -> Self {
        Self {
            loader: BomLoader::new(resolver, reader),
        }
    }

    /// Run the import for every configured BOM, in order
    ///
    /// `None` and an empty list are both "nothing configured" and succeed
    /// without touching `props`.
    pub fn run<P>(&self, boms: Option<&[BomSpec]>, props: &mut P) -> Result<ImportReport, ImportError>
    where
        P: ProjectProperties + ?Sized,
    {
        let mut report = ImportReport::default();

        let boms = match boms {
            Some(boms) if !boms.is_empty() => boms,
            _ => {
                log::info!("No BOMs configured");
                return Ok(report);
            },
        };

        for spec in boms {
            log::info!("Processing BOM: {}", spec.id());
            let bom = validate(spec)?;

            let table = self.loader.load(&bom.coordinates).map_err(|source| {
                log::error!("Failed to process {}: {source}", bom.id());
                ImportError::Failed {
                    bom: bom.id(),
                    source,
                }
            })?;

            let count = merge(&bom, table, props);
            log::info!("Added {count} properties with prefix: {}", bom.prefix);

            report.boms.push(BomImport {
                bom: bom.id(),
                prefix: bom.prefix,
                count,
            });
        }

        Ok(report)
    }
}

/// Insert the accepted keys of `table` into `props`, returning how many
fn merge<P>(bom: &ValidBom, table: PropertyTable, props: &mut P) -> usize
where
    P: ProjectProperties + ?Sized,
{
    let mut count = 0;
    for (key, value) in table {
        if !bom.accepts(&key) {
            continue;
        }
        let prefixed = bom.prefixed(&key);
        if let Some(previous) = props.insert_property(prefixed.clone(), value) {
            log::debug!("Overwrote {prefixed} (was '{previous}')");
        }
        count += 1;
    }
    count
}

/// Run the import with the given collaborators
///
/// Shorthand for [`PropertyImporter::new`] followed by
/// [`PropertyImporter::run`].
pub fn copy_properties<R, D, P>(
    resolver: &R,
    reader: &D,
    boms: Option<&[BomSpec]>,
    props: &mut P,
) -> Result<ImportReport, ImportError>
where
    R: ArtifactResolver + ?Sized,
    D: DescriptorReader + ?Sized,
    P: ProjectProperties + ?Sized,
{
    PropertyImporter::new(resolver, reader).run(boms, props)
}
