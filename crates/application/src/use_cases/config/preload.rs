use crate::ports::{LegacyConfigSource, StructuredConfigStore};
use ferrous_ftl_domain::config::{dns, files, misc};
use ferrous_ftl_domain::{BlockingMode, ConfigRegistry, ConfigValue, PrivacyLevel};
use std::sync::Arc;
use tracing::warn;

/// Single-value queries that are safe before the full config is loaded.
///
/// Each query opens, parses and closes the structured file on its own and
/// falls back to the matching legacy key. `None` means neither file had a
/// usable value; the caller keeps its default.
pub struct PreloadSettingsUseCase {
    structured: Arc<dyn StructuredConfigStore>,
    legacy: Arc<dyn LegacyConfigSource>,
}

impl PreloadSettingsUseCase {
    pub fn new(
        structured: Arc<dyn StructuredConfigStore>,
        legacy: Arc<dyn LegacyConfigSource>,
    ) -> Self {
        Self { structured, legacy }
    }

    pub fn privacy_level(&self, registry: &mut ConfigRegistry) -> Option<PrivacyLevel> {
        if let Some(ConfigValue::PrivacyLevel(level)) =
            self.structured_value(registry, misc::PRIVACY_LEVEL)
        {
            return Some(level);
        }

        self.legacy
            .read_privacy_level(registry)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Cannot read legacy privacy level");
                None
            })
    }

    pub fn blocking_mode(&self, registry: &mut ConfigRegistry) -> Option<BlockingMode> {
        if let Some(ConfigValue::BlockingMode(mode)) =
            self.structured_value(registry, dns::BLOCKING_MODE)
        {
            return Some(mode);
        }

        self.legacy
            .read_blocking_mode(registry)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Cannot read legacy blocking mode");
                None
            })
    }

    pub fn log_file_path(&self, registry: &mut ConfigRegistry) -> Option<String> {
        if let Some(ConfigValue::String(path)) = self.structured_value(registry, files::LOG) {
            return Some(path);
        }

        self.legacy
            .read_log_file_path(registry)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Cannot read legacy log file path");
                None
            })
    }

    fn structured_value(&self, registry: &mut ConfigRegistry, key: &str) -> Option<ConfigValue> {
        match self.structured.read_single(registry, key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, key, "Cannot read structured config");
                None
            }
        }
    }
}
