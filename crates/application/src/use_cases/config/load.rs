use crate::ports::{LegacyConfigSource, ResolverArguments, StructuredConfigStore};
use ferrous_ftl_domain::ConfigRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Where the configuration in the registry came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Structured(PathBuf),
    Legacy(PathBuf),
    Defaults,
}

impl LoadOutcome {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            LoadOutcome::Structured(path) | LoadOutcome::Legacy(path) => Some(path),
            LoadOutcome::Defaults => None,
        }
    }
}

/// Populate the registry: defaults first, then the structured file, and only
/// if that is absent or unparseable a one-time import of the legacy file.
///
/// A successful legacy import is written back in the structured format so
/// the next start reads the structured file. An unparseable structured file
/// is never overwritten; it stays in place for the user to repair.
pub struct LoadConfigUseCase {
    structured: Arc<dyn StructuredConfigStore>,
    legacy: Arc<dyn LegacyConfigSource>,
}

impl LoadConfigUseCase {
    pub fn new(
        structured: Arc<dyn StructuredConfigStore>,
        legacy: Arc<dyn LegacyConfigSource>,
    ) -> Self {
        Self { structured, legacy }
    }

    pub fn execute(
        &self,
        registry: &mut ConfigRegistry,
        resolver_args: &mut dyn ResolverArguments,
    ) -> LoadOutcome {
        registry.reset_to_defaults();

        let structured_present = match self.structured.load(registry) {
            Ok(Some(path)) => return LoadOutcome::Structured(path),
            Ok(None) => false,
            Err(e) => {
                error!(error = %e, "Structured config unusable, trying legacy config");
                // Values read before the parser gave up must not leak into the import
                registry.reset_to_defaults();
                true
            }
        };

        match self.legacy.import(registry, resolver_args) {
            Ok(Some(path)) => {
                info!(path = %path.display(), "Imported legacy config");
                if structured_present {
                    warn!("Keeping unparseable structured config, legacy values are not written back");
                } else {
                    self.migrate(registry);
                }
                LoadOutcome::Legacy(path)
            }
            Ok(None) => {
                info!("No config file found, using defaults");
                LoadOutcome::Defaults
            }
            Err(e) => {
                warn!(error = %e, "Legacy config unreadable, using defaults");
                registry.reset_to_defaults();
                LoadOutcome::Defaults
            }
        }
    }

    fn migrate(&self, registry: &ConfigRegistry) {
        match self.structured.save(registry) {
            Ok(written) => {
                info!(path = %written.display(), "Migrated legacy config to structured format")
            }
            Err(e) => warn!(error = %e, "Could not write migrated config"),
        }
    }
}
