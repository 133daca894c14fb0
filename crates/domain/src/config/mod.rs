//! Typed configuration model
//!
//! This module contains the generic value model and the static schema,
//! organized by section of the structured config file:
//! - `value`: the tagged value type and its kind
//! - `enums`: closed enumerations and their name tables
//! - `item`: a single typed, validated config item
//! - `registry`: the complete, fixed set of items
//! - `dns`, `resolver`, `database`, `http`, `files`, `misc`, `debug`: schema sections

pub mod database;
pub mod debug;
pub mod dns;
pub mod enums;
pub mod files;
pub mod http;
pub mod item;
pub mod misc;
pub mod registry;
pub mod resolver;
pub mod value;

pub use enums::{BlockingMode, BusyReply, ConfigEnum, PrivacyLevel, PtrType, RefreshHostnames};
pub use item::{ConfigItem, Validator};
pub use registry::{ConfigRegistry, MAX_CONFIG_PATH_DEPTH};
pub use value::{ConfigValue, ValueKind};

/// Every config item in registry order, at its default value.
///
/// Sections appear in the order they are written to the structured file.
pub fn schema() -> Vec<ConfigItem> {
    let mut items = Vec::new();
    items.extend(dns::items());
    items.extend(resolver::items());
    items.extend(database::items());
    items.extend(http::items());
    items.extend(files::items());
    items.extend(misc::items());
    items.extend(debug::items());
    items
}
