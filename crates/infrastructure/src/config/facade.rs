use ferrous_ftl_application::ports::ResolverArguments;
use ferrous_ftl_application::use_cases::{
    LoadConfigUseCase, LoadOutcome, PreloadSettingsUseCase, SaveConfigUseCase,
};
use ferrous_ftl_domain::{BlockingMode, ConfigError, ConfigRegistry, PrivacyLevel};
use std::path::PathBuf;
use std::sync::Arc;

use super::legacy::LegacyFileSource;
use super::paths::ConfigPaths;
use super::structured::TomlConfigStore;

/// The configuration of one daemon instance: the registry plus the file
/// adapters and use cases that fill and persist it.
pub struct FtlConfig {
    registry: ConfigRegistry,
    paths: ConfigPaths,
    load: LoadConfigUseCase,
    save: SaveConfigUseCase,
    preload: PreloadSettingsUseCase,
}

impl FtlConfig {
    pub fn new(paths: ConfigPaths) -> Self {
        let structured = Arc::new(TomlConfigStore::new(
            paths.structured.clone(),
            paths.structured_target.clone(),
        ));
        let legacy = Arc::new(LegacyFileSource::new(paths.legacy.clone()));

        Self {
            registry: ConfigRegistry::new(),
            load: LoadConfigUseCase::new(structured.clone(), legacy.clone()),
            save: SaveConfigUseCase::new(structured.clone()),
            preload: PreloadSettingsUseCase::new(structured, legacy),
            paths,
        }
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ConfigRegistry {
        &mut self.registry
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Structured file, else a one-time legacy import, else defaults
    pub fn load(&mut self, resolver_args: &mut dyn ResolverArguments) -> LoadOutcome {
        self.load.execute(&mut self.registry, resolver_args)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        self.save.execute(&self.registry)
    }

    pub fn privacy_level(&mut self) -> Option<PrivacyLevel> {
        self.preload.privacy_level(&mut self.registry)
    }

    pub fn blocking_mode(&mut self) -> Option<BlockingMode> {
        self.preload.blocking_mode(&mut self.registry)
    }

    pub fn log_file_path(&mut self) -> Option<String> {
        self.preload.log_file_path(&mut self.registry)
    }
}

impl Default for FtlConfig {
    fn default() -> Self {
        Self::new(ConfigPaths::standard())
    }
}
