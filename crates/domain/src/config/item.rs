use std::fmt;

use super::enums::{BlockingMode, BusyReply, ConfigEnum, PrivacyLevel, PtrType, RefreshHostnames};
use super::value::{ConfigValue, ValueKind};
use crate::errors::ConfigError;

/// Predicate deciding whether a candidate value is acceptable for an item.
pub type Validator = fn(&ConfigValue) -> bool;

/// One named, typed, validated configuration field.
///
/// The key is a dotted path into the structured document
/// (`dns.reply.host.v4`). The tag of `value` is fixed by `default` at
/// construction and can never change afterwards.
#[derive(Clone)]
pub struct ConfigItem {
    key: &'static str,
    help: &'static str,
    default: ConfigValue,
    value: ConfigValue,
    validator: Option<Validator>,
}

impl fmt::Debug for ConfigItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigItem")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("default", &self.default)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

impl ConfigItem {
    pub fn new(key: &'static str, default: impl Into<ConfigValue>, help: &'static str) -> Self {
        let default = default.into();
        Self {
            key,
            help,
            value: default.clone(),
            default,
            validator: None,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        debug_assert!(
            validator(&self.default),
            "default of {} fails its own validator",
            self.key
        );
        self.validator = Some(validator);
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Path segments, outermost table first
    pub fn path(&self) -> impl Iterator<Item = &'static str> {
        self.key.split('.')
    }

    pub fn depth(&self) -> usize {
        self.path().count()
    }

    /// Tables that must be descended before reaching the leaf key
    pub fn tables(&self) -> Vec<&'static str> {
        let mut segments: Vec<&'static str> = self.path().collect();
        segments.pop();
        segments
    }

    /// Last path segment, the key inside the innermost table
    pub fn leaf(&self) -> &'static str {
        self.key.rsplit('.').next().unwrap_or(self.key)
    }

    pub fn kind(&self) -> ValueKind {
        self.default.kind()
    }

    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    pub fn default_value(&self) -> &ConfigValue {
        &self.default
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    /// Legal values for enum-like items
    pub fn possible_values(&self) -> Option<String> {
        match self.kind() {
            ValueKind::PtrType => Some(PtrType::options()),
            ValueKind::BusyReply => Some(BusyReply::options()),
            ValueKind::BlockingMode => Some(BlockingMode::options()),
            ValueKind::RefreshHostnames => Some(RefreshHostnames::options()),
            ValueKind::PrivacyLevel => Some(PrivacyLevel::options()),
            _ => None,
        }
    }

    /// Text naming what the item accepts, used in warnings
    pub fn allowed(&self) -> String {
        self.possible_values()
            .unwrap_or_else(|| self.help.to_string())
    }

    /// Check a candidate without storing it.
    pub fn check(&self, candidate: &ConfigValue) -> Result<(), ConfigError> {
        if candidate.kind() != self.kind() {
            return Err(ConfigError::TypeMismatch {
                key: self.key.to_string(),
                expected: self.kind(),
                found: candidate.kind(),
            });
        }

        match self.validator {
            Some(validate) if !validate(candidate) => Err(ConfigError::Rejected {
                key: self.key.to_string(),
                value: candidate.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Store `candidate` if it has the item's tag and passes the validator.
    ///
    /// On error the current value is left untouched.
    pub fn set_value(&mut self, candidate: impl Into<ConfigValue>) -> Result<(), ConfigError> {
        let candidate = candidate.into();
        self.check(&candidate)?;
        self.value = candidate;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }
}
