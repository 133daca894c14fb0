//! Per-key rules for importing the legacy file into the registry.
//!
//! A key that is missing or whose value does not parse leaves the item at
//! the value it already has, without a diagnostic. Keys are processed in a
//! fixed order because some rules depend on earlier ones (`DBFILE` can
//! override `MAXDBDAYS`, `REPLY_ADDR4` yields to `LOCAL_IPV4`).

use ferrous_ftl_application::ports::ResolverArguments;
use ferrous_ftl_domain::config::{database, dns, files, http, misc, resolver};
use ferrous_ftl_domain::debug::ALL_KEY;
use ferrous_ftl_domain::validators::{self, MAX_DAY_COUNT, MAX_STARTUP_DELAY, NICE_DISABLED};
use ferrous_ftl_domain::{
    debug_log, BlockingMode, BusyReply, ConfigEnum, ConfigRegistry, ConfigValue, DebugFlag,
    DebugFlags, PrivacyLevel, PtrType, RefreshHostnames,
};
use tracing::{info, warn};

use super::file::LegacyConfigFile;
use super::scan::{parse_bool, scan_float, scan_int, scan_pair, scan_token, scan_uint};

/// Legacy boolean keys and the item each one sets
const BOOLEAN_KEYS: &[(&str, &str)] = &[
    ("AAAA_QUERY_ANALYSIS", dns::ANALYZE_AAAA),
    ("RESOLVE_IPV6", resolver::RESOLVE_IPV6),
    ("RESOLVE_IPV4", resolver::RESOLVE_IPV4),
    ("IGNORE_LOCALHOST", dns::IGNORE_LOCALHOST),
    ("ANALYZE_ONLY_A_AND_AAAA", dns::ANALYZE_ONLY_A_AND_AAAA),
    ("DBIMPORT", database::DB_IMPORT),
    ("PARSE_ARP_CACHE", database::PARSE_ARP_CACHE),
    ("CNAME_DEEP_INSPECT", dns::CNAME_DEEP_INSPECT),
    ("BLOCK_ESNI", dns::BLOCK_ESNI),
    ("API_AUTH_FOR_LOCALHOST", http::LOCAL_API_AUTH),
    ("API_PRETTY_JSON", http::PRETTY_JSON),
    ("NAMES_FROM_NETDB", resolver::NETWORK_NAMES),
    ("EDNS0_ECS", dns::EDNS0_ECS),
    ("SHOW_DNSSEC", dns::SHOW_DNSSEC),
    ("MOZILLA_CANARY", dns::MOZILLA_CANARY),
    ("ADDR2LINE", misc::ADDR2LINE),
    ("BLOCK_ICLOUD_PR", dns::ICLOUD_PRIVATE_RELAY),
    ("CHECK_LOAD", misc::CHECK_LOAD),
];

/// Legacy keys naming a file or location; the first token is stored
const PATH_KEYS: &[(&str, &str)] = &[
    ("PIDFILE", files::PID),
    ("SETUPVARSFILE", files::SETUP_VARS),
    ("MACVENDORDB", files::MACVENDOR),
    ("GRAVITYDB", files::GRAVITY),
    ("WEBROOT", http::WEBROOT),
    ("WEBHOME", http::WEBHOME),
    ("API_ERROR_LOG", files::PH7_ERROR),
    ("API_INFO_LOG", files::HTTP_INFO),
    ("WEBDOMAIN", http::DOMAIN),
];

type AddressParser = fn(&str) -> Option<ConfigValue>;

/// Dedicated reply address keys: legacy key, overwrite flag, address item
const REPLY_ADDRESS_KEYS: &[(&str, &str, &str, AddressParser)] = &[
    ("LOCAL_IPV4", dns::REPLY_HOST_OVERWRITE_V4, dns::REPLY_HOST_V4, parse_v4),
    ("LOCAL_IPV6", dns::REPLY_HOST_OVERWRITE_V6, dns::REPLY_HOST_V6, parse_v6),
    ("BLOCK_IPV4", dns::REPLY_BLOCKING_OVERWRITE_V4, dns::REPLY_BLOCKING_V4, parse_v4),
    ("BLOCK_IPV6", dns::REPLY_BLOCKING_OVERWRITE_V6, dns::REPLY_BLOCKING_V6, parse_v6),
];

pub const DEBUG_ALL_KEY: &str = "DEBUG_ALL";

/// Import every known legacy key into `registry`.
pub fn import(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
    resolver_args: &mut dyn ResolverArguments,
) {
    read_debug_settings(file, registry, resolver_args);

    for (legacy_key, key) in BOOLEAN_KEYS {
        read_bool(file, registry, legacy_key, key);
    }

    read_max_db_days(file, registry);
    read_db_interval(file, registry);
    read_max_log_age(file, registry);
    read_db_file(file, registry);
    read_privacy_level(file, registry);
    read_blocking_mode(file, registry);

    for (legacy_key, key) in PATH_KEYS {
        read_path(file, registry, legacy_key, key);
    }
    read_log_file_path(file, registry);

    for (legacy_key, key, min, max) in [
        ("DELAY_STARTUP", misc::DELAY_STARTUP, 1, MAX_STARTUP_DELAY),
        ("API_SESSION_TIMEOUT", http::SESSION_TIMEOUT, 1, u32::MAX),
        ("MAXNETAGE", database::NETWORK_EXPIRE, 1, MAX_DAY_COUNT),
    ] {
        read_ranged_uint(file, registry, legacy_key, key, min, max);
    }
    read_nice(file, registry);
    read_block_ttl(file, registry);
    read_percentage(file, registry, "CHECK_SHMEM", misc::CHECK_SHMEM);
    read_percentage(file, registry, "CHECK_DISK", misc::CHECK_DISK);

    read_web_port(file, registry);
    if let Some(acl) = lookup(file, "WEBACL") {
        store(registry, http::ACL, acl);
    }

    read_refresh_hostnames(file, registry);
    read_pihole_ptr(file, registry);
    if let Some(reply) = lookup(file, "REPLY_WHEN_BUSY").and_then(BusyReply::from_name) {
        store(registry, dns::REPLY_WHEN_BUSY, reply);
    }
    read_rate_limit(file, registry);

    for (legacy_key, overwrite_key, address_key, parse) in REPLY_ADDRESS_KEYS {
        read_reply_address(file, registry, legacy_key, overwrite_key, address_key, *parse);
    }

    read_deprecated_reply_address(
        file,
        registry,
        "REPLY_ADDR4",
        [dns::REPLY_HOST_OVERWRITE_V4, dns::REPLY_HOST_V4],
        [dns::REPLY_BLOCKING_OVERWRITE_V4, dns::REPLY_BLOCKING_V4],
        parse_v4,
    );
    read_deprecated_reply_address(
        file,
        registry,
        "REPLY_ADDR6",
        [dns::REPLY_HOST_OVERWRITE_V6, dns::REPLY_HOST_V6],
        [dns::REPLY_BLOCKING_OVERWRITE_V6, dns::REPLY_BLOCKING_V6],
        parse_v6,
    );
}

/// `PRIVACYLEVEL`: accepted only when it raises the current level
pub fn read_privacy_level(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
) -> Option<PrivacyLevel> {
    let level = lookup(file, "PRIVACYLEVEL")
        .and_then(scan_int)
        .and_then(PrivacyLevel::from_level)?;

    if level > registry.privacy_level() && store(registry, misc::PRIVACY_LEVEL, level) {
        Some(level)
    } else {
        None
    }
}

/// `BLOCKINGMODE`: the item is reset first, so an unknown name means `NULL`
pub fn read_blocking_mode(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
) -> Option<BlockingMode> {
    let _ = registry.reset(dns::BLOCKING_MODE);

    let name = lookup(file, "BLOCKINGMODE")?;
    match BlockingMode::from_name(name) {
        Some(mode) if store(registry, dns::BLOCKING_MODE, mode) => Some(mode),
        _ => {
            warn!(
                value = name,
                allowed = %BlockingMode::options(),
                "Unknown BLOCKINGMODE, using {}",
                BlockingMode::default()
            );
            None
        }
    }
}

/// Debug categories. Clears every flag, applies `DEBUG_ALL`, then each
/// individual `DEBUG_<CATEGORY>` key. The result is activated process-wide.
pub fn read_debug_settings(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
    resolver_args: &mut dyn ResolverArguments,
) -> DebugFlags {
    let mut flags = DebugFlags::NONE;

    if lookup(file, DEBUG_ALL_KEY).and_then(parse_bool) == Some(true) {
        flags = DebugFlags::all();
    }

    for flag in DebugFlag::legacy() {
        match lookup(file, flag.symbol()).and_then(parse_bool) {
            Some(true) => flags.insert(flag),
            Some(false) => flags.remove(flag),
            None => {}
        }
    }

    for flag in DebugFlag::all() {
        store(registry, flag.key(), flags.contains(*flag));
    }
    let _ = registry.reset(ALL_KEY);

    flags.activate();
    if flags.any() {
        resolver_args.enable_debug_logging();
    }
    flags
}

/// `LOGFILE`: present but empty selects syslog
pub fn read_log_file_path(file: &LegacyConfigFile, registry: &mut ConfigRegistry) -> Option<String> {
    let value = lookup(file, "LOGFILE")?;
    let path = if value.is_empty() {
        ""
    } else {
        scan_token(value)?
    };

    if store(registry, files::LOG, path) {
        Some(path.to_string())
    } else {
        None
    }
}

fn lookup<'a>(file: &'a LegacyConfigFile, legacy_key: &str) -> Option<&'a str> {
    let value = file.get(legacy_key);
    if let Some(value) = value {
        debug_log!(DebugFlag::Config, key = legacy_key, value, "Legacy setting");
    }
    value
}

fn store(registry: &mut ConfigRegistry, key: &str, value: impl Into<ConfigValue>) -> bool {
    match registry.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            debug_log!(DebugFlag::Config, key, error = %e, "Legacy value not applied");
            false
        }
    }
}

fn read_bool(file: &LegacyConfigFile, registry: &mut ConfigRegistry, legacy_key: &str, key: &str) {
    if let Some(value) = lookup(file, legacy_key).and_then(parse_bool) {
        store(registry, key, value);
    }
}

fn read_max_db_days(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    let Some(days) = lookup(file, "MAXDBDAYS").and_then(scan_int) else {
        return;
    };
    let days = days.min(i64::from(validators::MAX_DB_DAYS));
    if days == -1 || days >= 0 {
        if let Ok(days) = i32::try_from(days) {
            store(registry, database::MAX_DB_DAYS, days);
        }
    }
}

/// `DBINTERVAL` is given in minutes
fn read_db_interval(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    if let Some(minutes) = lookup(file, "DBINTERVAL").and_then(scan_float) {
        if (0.1..=1440.0).contains(&minutes) {
            store(registry, database::DB_INTERVAL, (minutes * 60.0) as u32);
        }
    }
}

/// `MAXLOGAGE` is given in hours
fn read_max_log_age(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    if let Some(hours) = lookup(file, "MAXLOGAGE").and_then(scan_float) {
        if (0.0..=24.0).contains(&hours) {
            store(registry, database::MAX_HISTORY, (hours * 3600.0) as u32);
        }
    }
}

/// An empty `DBFILE` disables the database but keeps the default path
fn read_db_file(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    let Some(value) = lookup(file, "DBFILE") else {
        return;
    };
    match scan_token(value) {
        Some(path) => {
            store(registry, files::DATABASE, path);
        }
        None => {
            info!("DBFILE is empty, disabling the long-term database");
            store(registry, database::MAX_DB_DAYS, 0i32);
        }
    }
}

fn read_path(file: &LegacyConfigFile, registry: &mut ConfigRegistry, legacy_key: &str, key: &str) {
    let Some(value) = lookup(file, legacy_key) else {
        return;
    };
    match scan_token(value) {
        Some(path) => {
            store(registry, key, path);
        }
        None => info!(key = legacy_key, "Empty value in legacy config, keeping default"),
    }
}

fn read_ranged_uint(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
    legacy_key: &str,
    key: &str,
    min: u32,
    max: u32,
) {
    let value = lookup(file, legacy_key)
        .and_then(scan_uint)
        .and_then(|v| u32::try_from(v).ok());
    if let Some(value) = value.filter(|v| (min..=max).contains(v)) {
        store(registry, key, value);
    }
}

fn read_nice(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    let Some(nice) = lookup(file, "NICE").and_then(scan_int) else {
        return;
    };
    if (-20..=19).contains(&nice) || nice == i64::from(NICE_DISABLED) {
        if let Ok(nice) = i32::try_from(nice) {
            store(registry, misc::NICE, nice);
        }
    }
}

fn read_block_ttl(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    let _ = registry.reset(dns::BLOCK_TTL);
    let ttl = lookup(file, "BLOCK_TTL")
        .and_then(scan_uint)
        .and_then(|v| u32::try_from(v).ok());
    if let Some(ttl) = ttl {
        store(registry, dns::BLOCK_TTL, ttl);
    }
}

fn read_percentage(file: &LegacyConfigFile, registry: &mut ConfigRegistry, legacy_key: &str, key: &str) {
    let _ = registry.reset(key);
    let Some(percent) = lookup(file, legacy_key).and_then(scan_int) else {
        return;
    };
    if let Ok(percent) = u32::try_from(percent) {
        if percent <= 100 {
            store(registry, key, percent);
        }
    }
}

fn read_web_port(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    if let Some(port) = lookup(file, "WEBPORT").filter(|p| !p.is_empty()) {
        store(registry, http::PORT, port);
    }
}

/// Anything other than `ALL`, `NONE` or `UNKNOWN` means `IPV4_ONLY`
fn read_refresh_hostnames(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    if let Some(value) = lookup(file, "REFRESH_HOSTNAMES") {
        let refresh = RefreshHostnames::from_name(value).unwrap_or(RefreshHostnames::Ipv4Only);
        store(registry, resolver::REFRESH_NAMES, refresh);
    }
}

fn read_pihole_ptr(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    let Some(value) = lookup(file, "PIHOLE_PTR") else {
        return;
    };
    let ptr = if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("false") {
        Some(PtrType::None)
    } else if value.eq_ignore_ascii_case("hostname") {
        Some(PtrType::Hostname)
    } else if value.eq_ignore_ascii_case("hostnamefqdn") {
        Some(PtrType::HostnameFqdn)
    } else {
        None
    };
    if let Some(ptr) = ptr {
        store(registry, dns::PIHOLE_PTR, ptr);
    }
}

/// `RATE_LIMIT=count/interval`; both halves are required
fn read_rate_limit(file: &LegacyConfigFile, registry: &mut ConfigRegistry) {
    let Some((count, interval)) = lookup(file, "RATE_LIMIT").and_then(scan_pair) else {
        return;
    };
    if let (Ok(count), Ok(interval)) = (u32::try_from(count), u32::try_from(interval)) {
        store(registry, dns::RATE_LIMIT_COUNT, count);
        store(registry, dns::RATE_LIMIT_INTERVAL, interval);
    }
}

fn parse_v4(text: &str) -> Option<ConfigValue> {
    validators::parse_ipv4(text).map(ConfigValue::Ipv4)
}

fn parse_v6(text: &str) -> Option<ConfigValue> {
    validators::parse_ipv6(text).map(ConfigValue::Ipv6)
}

/// `LOCAL_IPV4` and friends: both items are reset, then set together
fn read_reply_address(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
    legacy_key: &str,
    overwrite_key: &str,
    address_key: &str,
    parse: AddressParser,
) {
    let _ = registry.reset(overwrite_key);
    let _ = registry.reset(address_key);

    if let Some(address) = lookup(file, legacy_key).and_then(parse) {
        store(registry, overwrite_key, true);
        store(registry, address_key, address);
    }
}

/// `REPLY_ADDR4`/`REPLY_ADDR6` set host and blocking replies at once, unless
/// either was configured by its dedicated key.
fn read_deprecated_reply_address(
    file: &LegacyConfigFile,
    registry: &mut ConfigRegistry,
    legacy_key: &str,
    host: [&str; 2],
    blocking: [&str; 2],
    parse: AddressParser,
) {
    let Some(address) = lookup(file, legacy_key).and_then(parse) else {
        return;
    };

    let host_set = registry.bool(host[0]).unwrap_or(false);
    let blocking_set = registry.bool(blocking[0]).unwrap_or(false);
    if host_set || blocking_set {
        warn!(
            key = legacy_key,
            "Ignoring {} as a dedicated host or blocking reply address is already configured",
            legacy_key
        );
        return;
    }

    for [overwrite_key, address_key] in [host, blocking] {
        store(registry, overwrite_key, true);
        store(registry, address_key, address.clone());
    }
}
