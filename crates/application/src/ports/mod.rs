pub mod legacy_config;
pub mod resolver_arguments;
pub mod structured_config;

pub use legacy_config::LegacyConfigSource;
pub use resolver_arguments::{ResolverArguments, LOG_DEBUG_ARGUMENT, LOG_DEBUG_SLOT};
pub use structured_config::StructuredConfigStore;
