use crate::ports::StructuredConfigStore;
use ferrous_ftl_domain::{ConfigError, ConfigRegistry};
use std::path::PathBuf;
use std::sync::Arc;

pub struct SaveConfigUseCase {
    store: Arc<dyn StructuredConfigStore>,
}

impl SaveConfigUseCase {
    pub fn new(store: Arc<dyn StructuredConfigStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, registry: &ConfigRegistry) -> Result<PathBuf, ConfigError> {
        self.store.save(registry)
    }
}
