use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::enums::{BlockingMode, BusyReply, ConfigEnum, PrivacyLevel, PtrType, RefreshHostnames};

/// Type tag of a config item, fixed by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    UInt,
    Long,
    ULong,
    String,
    Ipv4,
    Ipv6,
    PtrType,
    BusyReply,
    BlockingMode,
    RefreshHostnames,
    PrivacyLevel,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::UInt => "unsigned integer",
            ValueKind::Long => "long integer",
            ValueKind::ULong => "unsigned long integer",
            ValueKind::String => "string",
            ValueKind::Ipv4 => "IPv4 address",
            ValueKind::Ipv6 => "IPv6 address",
            ValueKind::PtrType => "PTR reply type",
            ValueKind::BusyReply => "busy reply policy",
            ValueKind::BlockingMode => "blocking mode",
            ValueKind::RefreshHostnames => "hostname refresh policy",
            ValueKind::PrivacyLevel => "privacy level",
        }
    }

    /// Kinds stored as a name from a closed table
    pub fn is_named_enum(&self) -> bool {
        matches!(
            self,
            ValueKind::PtrType
                | ValueKind::BusyReply
                | ValueKind::BlockingMode
                | ValueKind::RefreshHostnames
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed configuration value. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    String(String),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    PtrType(PtrType),
    BusyReply(BusyReply),
    BlockingMode(BlockingMode),
    RefreshHostnames(RefreshHostnames),
    PrivacyLevel(PrivacyLevel),
}

impl ConfigValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Int(_) => ValueKind::Int,
            ConfigValue::UInt(_) => ValueKind::UInt,
            ConfigValue::Long(_) => ValueKind::Long,
            ConfigValue::ULong(_) => ValueKind::ULong,
            ConfigValue::String(_) => ValueKind::String,
            ConfigValue::Ipv4(_) => ValueKind::Ipv4,
            ConfigValue::Ipv6(_) => ValueKind::Ipv6,
            ConfigValue::PtrType(_) => ValueKind::PtrType,
            ConfigValue::BusyReply(_) => ValueKind::BusyReply,
            ConfigValue::BlockingMode(_) => ValueKind::BlockingMode,
            ConfigValue::RefreshHostnames(_) => ValueKind::RefreshHostnames,
            ConfigValue::PrivacyLevel(_) => ValueKind::PrivacyLevel,
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        ConfigValue::String(s.into())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            ConfigValue::UInt(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ConfigValue::ULong(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            ConfigValue::Ipv4(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn as_ipv6(&self) -> Option<Ipv6Addr> {
        match self {
            ConfigValue::Ipv6(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Name of an enum value as written to the structured file
    pub fn enum_name(&self) -> Option<&'static str> {
        match self {
            ConfigValue::PtrType(v) => Some(v.as_str()),
            ConfigValue::BusyReply(v) => Some(v.as_str()),
            ConfigValue::BlockingMode(v) => Some(v.as_str()),
            ConfigValue::RefreshHostnames(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::UInt(u) => write!(f, "{u}"),
            ConfigValue::Long(l) => write!(f, "{l}"),
            ConfigValue::ULong(u) => write!(f, "{u}"),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Ipv4(addr) => write!(f, "{addr}"),
            ConfigValue::Ipv6(addr) => write!(f, "{addr}"),
            ConfigValue::PtrType(v) => f.write_str(v.as_str()),
            ConfigValue::BusyReply(v) => f.write_str(v.as_str()),
            ConfigValue::BlockingMode(v) => f.write_str(v.as_str()),
            ConfigValue::RefreshHostnames(v) => f.write_str(v.as_str()),
            ConfigValue::PrivacyLevel(v) => write!(f, "{}", v.level()),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Int(i) => serializer.serialize_i32(*i),
            ConfigValue::UInt(u) => serializer.serialize_u32(*u),
            ConfigValue::Long(l) => serializer.serialize_i64(*l),
            ConfigValue::ULong(u) => serializer.serialize_u64(*u),
            ConfigValue::PrivacyLevel(v) => serializer.serialize_u8(v.level()),
            other => serializer.collect_str(other),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::UInt(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Long(value)
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        ConfigValue::ULong(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<Ipv4Addr> for ConfigValue {
    fn from(value: Ipv4Addr) -> Self {
        ConfigValue::Ipv4(value)
    }
}

impl From<Ipv6Addr> for ConfigValue {
    fn from(value: Ipv6Addr) -> Self {
        ConfigValue::Ipv6(value)
    }
}

impl From<PtrType> for ConfigValue {
    fn from(value: PtrType) -> Self {
        ConfigValue::PtrType(value)
    }
}

impl From<BusyReply> for ConfigValue {
    fn from(value: BusyReply) -> Self {
        ConfigValue::BusyReply(value)
    }
}

impl From<BlockingMode> for ConfigValue {
    fn from(value: BlockingMode) -> Self {
        ConfigValue::BlockingMode(value)
    }
}

impl From<RefreshHostnames> for ConfigValue {
    fn from(value: RefreshHostnames) -> Self {
        ConfigValue::RefreshHostnames(value)
    }
}

impl From<PrivacyLevel> for ConfigValue {
    fn from(value: PrivacyLevel) -> Self {
        ConfigValue::PrivacyLevel(value)
    }
}
