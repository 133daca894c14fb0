//! Legacy flat `KEY=value` config file

pub mod file;
pub mod reader;
pub mod scan;
pub mod source;

pub use file::LegacyConfigFile;
pub use source::LegacyFileSource;
