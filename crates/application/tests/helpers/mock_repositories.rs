#![allow(dead_code)]

use ferrous_ftl_application::ports::{
    LegacyConfigSource, ResolverArguments, StructuredConfigStore,
};
use ferrous_ftl_domain::config::{dns, files, misc};
use ferrous_ftl_domain::{
    BlockingMode, ConfigError, ConfigRegistry, ConfigValue, PrivacyLevel,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock StructuredConfigStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockStructuredStore {
    /// Values the "file" contains; `None` means the file does not exist
    values: Arc<Mutex<Option<Vec<(&'static str, ConfigValue)>>>>,
    parse_error: Arc<Mutex<bool>>,
    saved: Arc<Mutex<Vec<ConfigRegistry>>>,
}

impl MockStructuredStore {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_values(values: Vec<(&'static str, ConfigValue)>) -> Self {
        let store = Self::default();
        *store.values.lock().unwrap() = Some(values);
        store
    }

    pub fn broken() -> Self {
        let store = Self::with_values(vec![(dns::BLOCK_TTL, ConfigValue::UInt(99))]);
        *store.parse_error.lock().unwrap() = true;
        store
    }

    pub fn saved(&self) -> Vec<ConfigRegistry> {
        self.saved.lock().unwrap().clone()
    }
}

impl StructuredConfigStore for MockStructuredStore {
    fn load(&self, registry: &mut ConfigRegistry) -> Result<Option<PathBuf>, ConfigError> {
        let values = self.values.lock().unwrap().clone();
        let Some(values) = values else {
            return Ok(None);
        };

        for (key, value) in values {
            let _ = registry.set(key, value);
        }

        if *self.parse_error.lock().unwrap() {
            return Err(ConfigError::Parse("unexpected end of table".to_string()));
        }
        Ok(Some(PathBuf::from("mock.toml")))
    }

    fn read_single(
        &self,
        registry: &mut ConfigRegistry,
        key: &str,
    ) -> Result<Option<ConfigValue>, ConfigError> {
        if *self.parse_error.lock().unwrap() {
            return Err(ConfigError::Parse("unexpected end of table".to_string()));
        }
        let values = self.values.lock().unwrap().clone().unwrap_or_default();
        for (k, value) in values {
            if k == key && registry.set(key, value.clone()).is_ok() {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn save(&self, registry: &ConfigRegistry) -> Result<PathBuf, ConfigError> {
        self.saved.lock().unwrap().push(registry.clone());
        Ok(PathBuf::from("mock.toml"))
    }
}

// ============================================================================
// Mock LegacyConfigSource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockLegacySource {
    values: Option<Vec<(&'static str, ConfigValue)>>,
    debug: bool,
}

impl MockLegacySource {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_values(values: Vec<(&'static str, ConfigValue)>) -> Self {
        Self {
            values: Some(values),
            debug: false,
        }
    }

    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    fn lookup(&self, key: &str) -> Option<ConfigValue> {
        self.values
            .as_ref()?
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    }
}

impl LegacyConfigSource for MockLegacySource {
    fn import(
        &self,
        registry: &mut ConfigRegistry,
        resolver_args: &mut dyn ResolverArguments,
    ) -> Result<Option<PathBuf>, ConfigError> {
        let Some(values) = &self.values else {
            return Ok(None);
        };
        for (key, value) in values {
            let _ = registry.set(key, value.clone());
        }
        if self.debug {
            resolver_args.enable_debug_logging();
        }
        Ok(Some(PathBuf::from("mock.conf")))
    }

    fn read_privacy_level(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<PrivacyLevel>, ConfigError> {
        match self.lookup(misc::PRIVACY_LEVEL) {
            Some(ConfigValue::PrivacyLevel(level)) => {
                registry.set(misc::PRIVACY_LEVEL, level)?;
                Ok(Some(level))
            }
            _ => Ok(None),
        }
    }

    fn read_blocking_mode(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<BlockingMode>, ConfigError> {
        match self.lookup(dns::BLOCKING_MODE) {
            Some(ConfigValue::BlockingMode(mode)) => {
                registry.set(dns::BLOCKING_MODE, mode)?;
                Ok(Some(mode))
            }
            _ => Ok(None),
        }
    }

    fn read_log_file_path(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<String>, ConfigError> {
        match self.lookup(files::LOG) {
            Some(ConfigValue::String(path)) => {
                registry.set(files::LOG, path.clone())?;
                Ok(Some(path))
            }
            _ => Ok(None),
        }
    }
}

// ============================================================================
// Mock ResolverArguments
// ============================================================================

#[derive(Debug, Default)]
pub struct MockResolverArgs {
    pub args: Vec<String>,
}

impl ResolverArguments for MockResolverArgs {
    fn set(&mut self, index: usize, value: &str) {
        if self.args.len() <= index {
            self.args.resize(index + 1, String::new());
        }
        self.args[index] = value.to_string();
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
