use ferrous_ftl_domain::{BlockingMode, ConfigError, ConfigRegistry, PrivacyLevel};
use std::path::PathBuf;

use super::ResolverArguments;

/// Port for the legacy flat `KEY=value` configuration file.
pub trait LegacyConfigSource: Send + Sync {
    /// Import every known legacy key into `registry`.
    ///
    /// Returns `Ok(None)` when no legacy file exists. When any debug flag is
    /// enabled afterwards, `resolver_args` is told to run the resolver verbosely.
    fn import(
        &self,
        registry: &mut ConfigRegistry,
        resolver_args: &mut dyn ResolverArguments,
    ) -> Result<Option<PathBuf>, ConfigError>;

    /// Read only `PRIVACYLEVEL`. The level never decreases.
    fn read_privacy_level(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<PrivacyLevel>, ConfigError>;

    /// Read only `BLOCKINGMODE`.
    fn read_blocking_mode(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<BlockingMode>, ConfigError>;

    /// Read only `LOGFILE`. An empty string means syslog.
    fn read_log_file_path(
        &self,
        registry: &mut ConfigRegistry,
    ) -> Result<Option<String>, ConfigError>;
}
