//! Ferrous FTL Domain Layer
pub mod config;
pub mod debug;
pub mod errors;
pub mod validators;

pub use config::{
    BlockingMode, BusyReply, ConfigEnum, ConfigItem, ConfigRegistry, ConfigValue, PrivacyLevel,
    PtrType, RefreshHostnames, ValueKind,
};
pub use debug::{DebugFlag, DebugFlags};
pub use errors::ConfigError;
