//! Ferrous FTL Infrastructure Layer
pub mod config;
pub mod system;

#[cfg(test)]
mod test_support;

pub use config::{ConfigPaths, FtlConfig, LegacyFileSource, TomlConfigStore};
pub use system::DnsmasqArguments;
