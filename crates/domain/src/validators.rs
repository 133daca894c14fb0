use std::net::{Ipv4Addr, Ipv6Addr};

use crate::config::ConfigValue;

/// Largest number of days that still fits into an `i32` worth of seconds
pub const MAX_DB_DAYS: i32 = i32::MAX / 24 / 60 / 60;

/// 8760 days = 24 years
pub const MAX_DAY_COUNT: u32 = 8760;

pub const MAX_STARTUP_DELAY: u32 = 300;

/// Nice value that disables priority changes altogether
pub const NICE_DISABLED: i32 = -999;

/// 24 hours, the furthest back history is imported from the database
pub const MAX_HISTORY_SECONDS: u32 = 24 * 60 * 60;

/// Database flush interval bounds: 0.1 minutes up to once a day
pub const MIN_DB_INTERVAL: u32 = 6;
pub const MAX_DB_INTERVAL: u32 = 24 * 60 * 60;

pub fn is_percentage(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::UInt(v) if *v <= 100)
}

pub fn is_day_count(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::UInt(v) if *v <= MAX_DAY_COUNT)
}

/// `-1` keeps the database forever, `0` disables it
pub fn is_max_db_days(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::Int(v) if *v == -1 || (0..=MAX_DB_DAYS).contains(v))
}

pub fn is_startup_delay(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::UInt(v) if *v <= MAX_STARTUP_DELAY)
}

pub fn is_nice(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::Int(v) if *v == NICE_DISABLED || (-20..=19).contains(v))
}

pub fn is_max_history(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::UInt(v) if *v <= MAX_HISTORY_SECONDS)
}

pub fn is_db_interval(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::UInt(v) if (MIN_DB_INTERVAL..=MAX_DB_INTERVAL).contains(v))
}

/// `-1` disables the cache optimizer
pub fn is_cache_optimizer(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::Long(v) if *v >= -1)
}

/// TOML integers are signed 64 bit; larger unsigned values cannot be written back
pub fn fits_toml_integer(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::ULong(v) if i64::try_from(*v).is_ok())
}

/// Strict dotted-quad parse. No surrounding whitespace, no partial input.
pub fn parse_ipv4(text: &str) -> Option<Ipv4Addr> {
    text.parse().ok()
}

/// Strict colon-hex parse. No surrounding whitespace, no partial input.
pub fn parse_ipv6(text: &str) -> Option<Ipv6Addr> {
    text.parse().ok()
}
