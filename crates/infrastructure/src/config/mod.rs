//! File-backed configuration adapters
//!
//! - `paths`: where config files are searched and written
//! - `legacy`: the flat `KEY=value` file
//! - `structured`: the TOML file, reader and writer
//! - `facade`: one object wiring the use cases to these adapters

pub mod facade;
pub mod legacy;
pub mod paths;
pub mod structured;

pub use facade::FtlConfig;
pub use legacy::LegacyFileSource;
pub use paths::ConfigPaths;
pub use structured::TomlConfigStore;
