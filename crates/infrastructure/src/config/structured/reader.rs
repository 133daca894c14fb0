//! Reads a parsed TOML document into the registry, one item at a time.
//!
//! A single bad entry never aborts the pass: the item keeps its previous
//! value and a diagnostic is logged. Only a syntax error in the document as
//! a whole is reported to the caller.

use ferrous_ftl_domain::validators::{parse_ipv4, parse_ipv6};
use ferrous_ftl_domain::{
    debug_log, BlockingMode, BusyReply, ConfigEnum, ConfigError, ConfigItem, ConfigRegistry,
    ConfigValue, DebugFlag, DebugFlags, PrivacyLevel, PtrType, RefreshHostnames, ValueKind,
};
use toml::{Table, Value};
use tracing::{debug, warn};

/// What happened to one item during a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRead {
    Applied,
    /// Missing table or key, or a value of the wrong TOML type
    Absent,
    /// Present but not acceptable; the item is unchanged
    Invalid,
}

pub fn parse_document(text: &str) -> Result<Table, ConfigError> {
    toml::from_str(text).map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))
}

/// Read every registry item from `doc`.
///
/// `debug.config` is applied first so the remainder of the pass already
/// emits config debug output when it is enabled.
pub fn read_registry(doc: &Table, registry: &mut ConfigRegistry) {
    if let Some(item) = registry.get_mut(DebugFlag::Config.key()) {
        read_item(doc, item);
    }
    DebugFlags::from_registry(registry).activate();
    debug_log!(DebugFlag::Config, "Reading structured config file");

    for item in registry.iter_mut() {
        read_item(doc, item);
    }

    let flags = DebugFlags::from_registry(registry);
    flags.activate();
    report_debug_flags(flags);
}

/// Descend to `item`'s table, extract its leaf and store it.
pub fn read_item(doc: &Table, item: &mut ConfigItem) -> ItemRead {
    let Some(table) = descend(doc, item) else {
        return ItemRead::Absent;
    };
    let Some(raw) = table.get(item.leaf()) else {
        debug_log!(DebugFlag::Config, key = item.key(), "Key does not exist");
        return ItemRead::Absent;
    };

    let candidate = match extract(item.kind(), raw) {
        Extracted::Found(value) => value,
        Extracted::WrongType => {
            debug_log!(
                DebugFlag::Config,
                key = item.key(),
                expected = %item.kind(),
                "Key is not of the expected type"
            );
            return ItemRead::Absent;
        }
        Extracted::Unknown(text) => {
            warn!(
                key = item.key(),
                value = %text,
                "Config setting is invalid, allowed options are: {}",
                item.allowed()
            );
            return ItemRead::Invalid;
        }
        Extracted::OutOfRange(value) => {
            warn!(
                key = item.key(),
                value,
                expected = %item.kind(),
                "Config setting does not fit, allowed: {}",
                item.help()
            );
            return ItemRead::Invalid;
        }
        Extracted::Unparseable => return ItemRead::Invalid,
    };

    match item.set_value(candidate) {
        Ok(()) => {
            debug_log!(DebugFlag::Config, key = item.key(), value = %item.value(), "Applied");
            ItemRead::Applied
        }
        Err(e) => {
            warn!(key = item.key(), error = %e, "Invalid value, allowed: {}", item.help());
            ItemRead::Invalid
        }
    }
}

fn descend<'a>(doc: &'a Table, item: &ConfigItem) -> Option<&'a Table> {
    let mut table = doc;
    for segment in item.tables() {
        match table.get(segment).and_then(Value::as_table) {
            Some(inner) => table = inner,
            None => {
                debug_log!(
                    DebugFlag::Config,
                    key = item.key(),
                    table = segment,
                    "Table does not exist"
                );
                return None;
            }
        }
    }
    Some(table)
}

enum Extracted {
    Found(ConfigValue),
    WrongType,
    /// A name or level outside the closed table
    Unknown(String),
    /// An integer outside the item's width or signedness
    OutOfRange(i64),
    /// An address that does not parse; dropped without a warning
    Unparseable,
}

fn extract(kind: ValueKind, raw: &Value) -> Extracted {
    match kind {
        ValueKind::Bool => raw
            .as_bool()
            .map_or(Extracted::WrongType, |b| Extracted::Found(ConfigValue::Bool(b))),
        ValueKind::Int => integer(raw, ConfigValue::Int),
        ValueKind::UInt => integer(raw, ConfigValue::UInt),
        ValueKind::Long => integer(raw, ConfigValue::Long),
        ValueKind::ULong => integer(raw, ConfigValue::ULong),
        ValueKind::String => raw
            .as_str()
            .map_or(Extracted::WrongType, |s| Extracted::Found(ConfigValue::string(s))),
        ValueKind::Ipv4 => match raw.as_str() {
            Some(s) => parse_ipv4(s)
                .map_or(Extracted::Unparseable, |a| Extracted::Found(ConfigValue::Ipv4(a))),
            None => Extracted::WrongType,
        },
        ValueKind::Ipv6 => match raw.as_str() {
            Some(s) => parse_ipv6(s)
                .map_or(Extracted::Unparseable, |a| Extracted::Found(ConfigValue::Ipv6(a))),
            None => Extracted::WrongType,
        },
        ValueKind::PtrType => named::<PtrType>(raw),
        ValueKind::BusyReply => named::<BusyReply>(raw),
        ValueKind::BlockingMode => named::<BlockingMode>(raw),
        ValueKind::RefreshHostnames => named::<RefreshHostnames>(raw),
        ValueKind::PrivacyLevel => match raw.as_integer() {
            Some(level) => PrivacyLevel::from_level(level).map_or_else(
                || Extracted::Unknown(level.to_string()),
                |l| Extracted::Found(l.into()),
            ),
            None => Extracted::WrongType,
        },
    }
}

/// Integers must fit the item's width and signedness exactly
fn integer<T: TryFrom<i64>>(raw: &Value, wrap: fn(T) -> ConfigValue) -> Extracted {
    match raw.as_integer() {
        Some(i) => T::try_from(i).map_or(Extracted::OutOfRange(i), |v| Extracted::Found(wrap(v))),
        None => Extracted::WrongType,
    }
}

fn named<E>(raw: &Value) -> Extracted
where
    E: ConfigEnum + Into<ConfigValue>,
{
    match raw.as_str() {
        Some(name) => E::from_name(name)
            .map_or_else(|| Extracted::Unknown(name.to_string()), |e| Extracted::Found(e.into())),
        None => Extracted::WrongType,
    }
}

fn report_debug_flags(flags: DebugFlags) {
    if !flags.any() {
        return;
    }
    debug!("************************");
    debug!("*    DEBUG SETTINGS    *");
    for flag in DebugFlag::all() {
        let state = if flags.contains(*flag) { "YES" } else { "NO " };
        debug!("* {:<16} {} *", flag.symbol().trim_start_matches("DEBUG_"), state);
    }
    debug!("************************");
}
