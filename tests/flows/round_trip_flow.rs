#[path = "../common/fixtures.rs"]
mod fixtures;

use ferrous_ftl_application::use_cases::LoadOutcome;
use ferrous_ftl_domain::config::{dns, http};
use ferrous_ftl_domain::{
    BlockingMode, BusyReply, ConfigEnum, ConfigItem, ConfigRegistry, ConfigValue, DebugFlags,
    PrivacyLevel, PtrType, RefreshHostnames,
};
use ferrous_ftl_infrastructure::DnsmasqArguments;
use fixtures::ConfigDir;
use std::net::{Ipv4Addr, Ipv6Addr};

fn other_enum<E: ConfigEnum>(current: E) -> E {
    E::all()
        .iter()
        .copied()
        .find(|v| *v != current)
        .unwrap_or(current)
}

/// Candidate values different from the default, tried in order until the
/// item's validator accepts one
fn alternatives(item: &ConfigItem) -> Vec<ConfigValue> {
    match item.default_value() {
        ConfigValue::Bool(b) => vec![ConfigValue::Bool(!b)],
        ConfigValue::Int(i) => vec![ConfigValue::Int(i + 1), ConfigValue::Int(-1), ConfigValue::Int(0)],
        ConfigValue::UInt(u) => vec![ConfigValue::UInt(u + 1), ConfigValue::UInt(u.saturating_sub(1))],
        ConfigValue::Long(l) => vec![ConfigValue::Long(l + 1)],
        ConfigValue::ULong(u) => vec![ConfigValue::ULong(u + 1)],
        ConfigValue::String(s) => vec![ConfigValue::string(format!("{s}/\"édité\"\t\\x"))],
        ConfigValue::Ipv4(_) => vec![ConfigValue::Ipv4(Ipv4Addr::new(203, 0, 113, 7))],
        ConfigValue::Ipv6(_) => vec![ConfigValue::Ipv6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 7))],
        ConfigValue::PtrType(v) => vec![ConfigValue::PtrType(other_enum::<PtrType>(*v))],
        ConfigValue::BusyReply(v) => vec![ConfigValue::BusyReply(other_enum::<BusyReply>(*v))],
        ConfigValue::BlockingMode(v) => {
            vec![ConfigValue::BlockingMode(other_enum::<BlockingMode>(*v))]
        }
        ConfigValue::RefreshHostnames(v) => {
            vec![ConfigValue::RefreshHostnames(other_enum::<RefreshHostnames>(*v))]
        }
        ConfigValue::PrivacyLevel(_) => vec![ConfigValue::PrivacyLevel(PrivacyLevel::MAX)],
    }
}

#[test]
fn test_every_item_changed_survives_save_and_load() {
    let dir = ConfigDir::new();
    let mut config = dir.config();

    let keys: Vec<&str> = config.registry().iter().map(ConfigItem::key).collect();
    for key in keys {
        let candidates = match config.registry().get(key) {
            Some(item) => alternatives(item),
            None => continue,
        };
        let accepted = candidates
            .into_iter()
            .any(|value| config.registry_mut().set(key, value).is_ok());
        assert!(accepted, "no alternative accepted for {key}");
    }
    assert!(config.registry().iter().all(|item| !item.is_default()));
    config.save().unwrap();

    let mut reloaded = dir.config();
    let outcome = reloaded.load(&mut DnsmasqArguments::new());
    DebugFlags::NONE.activate();

    assert_eq!(outcome, LoadOutcome::Structured(dir.structured_path()));
    for (saved, loaded) in config.registry().iter().zip(reloaded.registry().iter()) {
        assert_eq!(saved.value(), loaded.value(), "{}", saved.key());
    }
}

#[test]
fn test_defaults_survive_save_and_load() {
    let dir = ConfigDir::new();
    dir.config().save().unwrap();

    let mut reloaded = dir.config();
    reloaded.load(&mut DnsmasqArguments::new());

    assert_eq!(reloaded.registry(), &ConfigRegistry::new());
    assert!(!dir.read_structured().contains("### CHANGED"));
}

#[test]
fn test_unknown_keys_in_file_are_ignored() {
    let dir = ConfigDir::new();
    dir.write_structured("[dns]\nblockTTL = 8\nnotAKey = 1\n[elsewhere]\nx = \"y\"\n");

    let mut config = dir.config();
    config.load(&mut DnsmasqArguments::new());

    assert_eq!(config.registry().u32(dns::BLOCK_TTL), Some(8));
    assert_eq!(config.registry().changed().count(), 1);
}

#[test]
fn test_non_ascii_string_keeps_structured_file_readable() {
    let dir = ConfigDir::new();
    dir.write_legacy("BLOCK_TTL=20\n");

    let mut config = dir.config();
    config.registry_mut().set(http::DOMAIN, "pi.höle").unwrap();
    config.registry_mut().set(dns::BLOCK_TTL, 7u32).unwrap();
    config.save().unwrap();

    let text = dir.read_structured();
    assert!(text.contains("domain = \"pi.höle\""));

    let mut reloaded = dir.config();
    let outcome = reloaded.load(&mut DnsmasqArguments::new());

    assert_eq!(outcome, LoadOutcome::Structured(dir.structured_path()));
    assert_eq!(reloaded.registry().str(http::DOMAIN), Some("pi.höle"));
    assert_eq!(reloaded.registry().u32(dns::BLOCK_TTL), Some(7));
    assert_eq!(dir.read_structured(), text);
}
