//! Structured TOML config file

pub mod escape;
pub mod reader;
pub mod store;
pub mod writer;

pub use store::TomlConfigStore;
