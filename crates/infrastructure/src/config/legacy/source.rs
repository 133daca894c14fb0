use ferrous_ftl_application::ports::{LegacyConfigSource, ResolverArguments};
use ferrous_ftl_domain::{BlockingMode, ConfigError, ConfigRegistry, PrivacyLevel};
use std::path::PathBuf;
use tracing::info;

use super::file::LegacyConfigFile;
use super::reader;

/// Legacy file adapter. Every call opens and parses the file anew, so the
/// single-value queries work before anything else is loaded.
#[derive(Debug, Clone)]
pub struct LegacyFileSource {
    candidates: Vec<PathBuf>,
}

impl LegacyFileSource {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    fn open(&self) -> Result<Option<LegacyConfigFile>, ConfigError> {
        LegacyConfigFile::open(&self.candidates)
    }
}

impl LegacyConfigSource for LegacyFileSource {
    fn import(
        &self,
        registry: &mut ConfigRegistry,
        resolver_args: &mut dyn ResolverArguments,
    ) -> Result<Option<PathBuf>, ConfigError> {
        let Some(file) = self.open()? else {
            return Ok(None);
        };

        info!(path = %file.path().display(), keys = file.len(), "Reading legacy config file");
        reader::import(&file, registry, resolver_args);
        Ok(Some(file.path().to_path_buf()))
    }

    fn read_privacy_level(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<PrivacyLevel>, ConfigError> {
        Ok(self
            .open()?
            .and_then(|file| reader::read_privacy_level(&file, registry)))
    }

    fn read_blocking_mode(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<BlockingMode>, ConfigError> {
        Ok(self
            .open()?
            .and_then(|file| reader::read_blocking_mode(&file, registry)))
    }

    fn read_log_file_path(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<String>, ConfigError> {
        Ok(self
            .open()?
            .and_then(|file| reader::read_log_file_path(&file, registry)))
    }
}
