use rustc_hash::{FxHashMap, FxHashSet};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::enums::{BlockingMode, BusyReply, PrivacyLevel, PtrType, RefreshHostnames};
use super::item::ConfigItem;
use super::value::ConfigValue;
use super::{dns, misc, schema};
use crate::errors::ConfigError;

/// Deepest nesting any config key may have (`dns.reply.host.v4`)
pub const MAX_CONFIG_PATH_DEPTH: usize = 4;

/// The complete, fixed set of configuration items.
///
/// Built once at start-up from the static schema. Items are addressable by
/// dotted key and by their stable position. A load pass takes `&mut self`,
/// a save pass `&self`, so one writer excludes all readers.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    items: Vec<ConfigItem>,
    index: FxHashMap<&'static str, usize>,
}

impl ConfigRegistry {
    /// Registry of every known item, all at their defaults
    pub fn new() -> Self {
        Self::build(schema())
    }

    /// Build a registry from an arbitrary item list, checking key uniqueness
    /// and nesting depth.
    pub fn from_items(items: Vec<ConfigItem>) -> Result<Self, ConfigError> {
        let mut seen = FxHashSet::default();
        for item in &items {
            let depth = item.depth();
            if depth > MAX_CONFIG_PATH_DEPTH {
                return Err(ConfigError::PathTooDeep {
                    key: item.key().to_string(),
                    depth,
                    max: MAX_CONFIG_PATH_DEPTH,
                });
            }
            if !seen.insert(item.key()) {
                return Err(ConfigError::DuplicateKey(item.key().to_string()));
            }
        }
        Ok(Self::build(items))
    }

    fn build(items: Vec<ConfigItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.key(), i))
            .collect();
        Self { items, index }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ConfigItem> {
        self.items.iter_mut()
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn by_index(&self, index: usize) -> Option<&ConfigItem> {
        self.items.get(index)
    }

    pub fn by_index_mut(&mut self, index: usize) -> Option<&mut ConfigItem> {
        self.items.get_mut(index)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigItem> {
        let i = self.index_of(key)?;
        self.items.get(i)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigItem> {
        let i = self.index_of(key)?;
        self.items.get_mut(i)
    }

    /// Set the current value of `key`; see [`ConfigItem::set_value`]
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) -> Result<(), ConfigError> {
        self.get_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?
            .set_value(value)
    }

    pub fn reset(&mut self, key: &str) -> Result<(), ConfigError> {
        self.get_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?
            .reset();
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        for item in &mut self.items {
            item.reset();
        }
    }

    pub fn value(&self, key: &str) -> Option<&ConfigValue> {
        self.get(key).map(ConfigItem::value)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(ConfigValue::as_bool)
    }

    pub fn i32(&self, key: &str) -> Option<i32> {
        self.value(key).and_then(ConfigValue::as_i32)
    }

    pub fn u32(&self, key: &str) -> Option<u32> {
        self.value(key).and_then(ConfigValue::as_u32)
    }

    pub fn i64(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(ConfigValue::as_i64)
    }

    pub fn u64(&self, key: &str) -> Option<u64> {
        self.value(key).and_then(ConfigValue::as_u64)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(ConfigValue::as_str)
    }

    pub fn ipv4(&self, key: &str) -> Option<Ipv4Addr> {
        self.value(key).and_then(ConfigValue::as_ipv4)
    }

    pub fn ipv6(&self, key: &str) -> Option<Ipv6Addr> {
        self.value(key).and_then(ConfigValue::as_ipv6)
    }

    pub fn ptr_type(&self, key: &str) -> Option<PtrType> {
        match self.value(key) {
            Some(ConfigValue::PtrType(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn busy_reply(&self, key: &str) -> Option<BusyReply> {
        match self.value(key) {
            Some(ConfigValue::BusyReply(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn refresh_hostnames(&self, key: &str) -> Option<RefreshHostnames> {
        match self.value(key) {
            Some(ConfigValue::RefreshHostnames(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn blocking_mode(&self) -> BlockingMode {
        match self.value(dns::BLOCKING_MODE) {
            Some(ConfigValue::BlockingMode(v)) => *v,
            _ => BlockingMode::default(),
        }
    }

    pub fn privacy_level(&self) -> PrivacyLevel {
        match self.value(misc::PRIVACY_LEVEL) {
            Some(ConfigValue::PrivacyLevel(v)) => *v,
            _ => PrivacyLevel::default(),
        }
    }

    /// Items whose current value differs from the default
    pub fn changed(&self) -> impl Iterator<Item = &ConfigItem> {
        self.items.iter().filter(|item| !item.is_default())
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ConfigRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a.key() == b.key() && a.value() == b.value())
    }
}
