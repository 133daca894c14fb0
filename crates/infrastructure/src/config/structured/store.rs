use ferrous_ftl_application::ports::StructuredConfigStore;
use ferrous_ftl_domain::{ConfigError, ConfigRegistry, ConfigValue};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use toml::Table;
use tracing::{error, info};

use super::reader::{parse_document, read_item, read_registry, ItemRead};
use super::writer::write_registry;
use crate::config::paths::open_first;

/// TOML file adapter. Reads from the first existing candidate, writes to a
/// fixed target.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    candidates: Vec<PathBuf>,
    target: PathBuf,
}

impl TomlConfigStore {
    pub fn new(candidates: Vec<PathBuf>, target: PathBuf) -> Self {
        Self { candidates, target }
    }

    pub fn target(&self) -> &PathBuf {
        &self.target
    }

    fn open_document(&self) -> Result<Option<(PathBuf, Table)>, ConfigError> {
        let Some((path, mut file)) = open_first(&self.candidates) else {
            return Ok(None);
        };

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        match parse_document(&text) {
            Ok(doc) => Ok(Some((path, doc))),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Cannot parse config file");
                Err(e)
            }
        }
    }
}

impl StructuredConfigStore for TomlConfigStore {
    fn load(&self, registry: &mut ConfigRegistry) -> Result<Option<PathBuf>, ConfigError> {
        let Some((path, doc)) = self.open_document()? else {
            return Ok(None);
        };

        read_registry(&doc, registry);
        info!(path = %path.display(), "Read structured config file");
        Ok(Some(path))
    }

    fn read_single(
        &self,
        registry: &mut ConfigRegistry,
        key: &str,
    ) -> Result<Option<ConfigValue>, ConfigError> {
        let item = registry
            .get_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let Some((_, doc)) = self.open_document()? else {
            return Ok(None);
        };

        match read_item(&doc, item) {
            ItemRead::Applied => Ok(Some(item.value().clone())),
            ItemRead::Absent | ItemRead::Invalid => Ok(None),
        }
    }

    fn save(&self, registry: &ConfigRegistry) -> Result<PathBuf, ConfigError> {
        let io_error = |e: std::io::Error| ConfigError::Io(format!("{}: {}", self.target.display(), e));

        let file = File::create(&self.target).map_err(io_error)?;
        let mut out = BufWriter::new(file);
        write_registry(&mut out, registry).map_err(io_error)?;
        out.flush().map_err(io_error)?;

        info!(path = %self.target.display(), "Wrote structured config file");
        Ok(self.target.clone())
    }
}
