use ferrous_ftl_domain::{ConfigError, ConfigRegistry, ConfigValue};
use std::path::PathBuf;

/// Port for the structured (TOML) configuration file.
///
/// Reads never fail because of a single bad value: invalid fields are
/// logged and keep their defaults. Only a missing file or a document that
/// cannot be parsed at all is reported to the caller.
pub trait StructuredConfigStore: Send + Sync {
    /// Read the whole document into `registry`.
    ///
    /// Returns `Ok(None)` when no file exists, `Ok(Some(path))` with the file
    /// that was read, and `Err(ConfigError::Parse)` for a syntax error.
    fn load(&self, registry: &mut ConfigRegistry) -> Result<Option<PathBuf>, ConfigError>;

    /// Open, parse and close the file to extract the single item `key`.
    ///
    /// Returns the value now stored in `registry` if the file contained a
    /// valid entry for it, `Ok(None)` if the file or the entry is absent.
    fn read_single(
        &self,
        registry: &mut ConfigRegistry,
        key: &str,
    ) -> Result<Option<ConfigValue>, ConfigError>;

    /// Serialize the full registry; returns the path written.
    fn save(&self, registry: &ConfigRegistry) -> Result<PathBuf, ConfigError>;
}
