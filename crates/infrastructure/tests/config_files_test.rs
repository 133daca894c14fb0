use ferrous_ftl_application::ports::{ResolverArguments, LOG_DEBUG_ARGUMENT, LOG_DEBUG_SLOT};
use ferrous_ftl_application::use_cases::LoadOutcome;
use ferrous_ftl_domain::config::{database, dns, files, http, misc, resolver};
use ferrous_ftl_domain::{
    BlockingMode, BusyReply, ConfigRegistry, ConfigValue, DebugFlags, PrivacyLevel, PtrType,
    RefreshHostnames,
};
use ferrous_ftl_infrastructure::{ConfigPaths, DnsmasqArguments, FtlConfig};
use std::fs;
use std::net::{Ipv4Addr, Ipv6Addr};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> FtlConfig {
    FtlConfig::new(ConfigPaths::in_dir(dir.path()))
}

fn write_legacy(dir: &TempDir, text: &str) {
    fs::write(dir.path().join("pihole-FTL.conf"), text).unwrap();
}

fn write_structured(dir: &TempDir, text: &str) {
    fs::write(dir.path().join("pihole-FTL.toml"), text).unwrap();
}

#[test]
fn test_no_files_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    let mut args = DnsmasqArguments::new();

    assert_eq!(config.load(&mut args), LoadOutcome::Defaults);
    assert_eq!(config.registry(), &ConfigRegistry::new());
    assert!(!dir.path().join("pihole-FTL.toml").exists());
}

#[test]
fn test_every_kind_survives_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);

    let changes: Vec<(&str, ConfigValue)> = vec![
        (dns::IGNORE_LOCALHOST, ConfigValue::Bool(true)),
        (misc::NICE, ConfigValue::Int(5)),
        (database::MAX_DB_DAYS, ConfigValue::Int(-1)),
        (dns::BLOCK_TTL, ConfigValue::UInt(3600)),
        (dns::CACHE_OPTIMIZER, ConfigValue::Long(-1)),
        (dns::CACHE_SIZE, ConfigValue::ULong(i64::MAX as u64)),
        (http::ACL, ConfigValue::string("+0.0.0.0/0 \"quoted\"\\path\tand\nlines")),
        (http::DOMAIN, ConfigValue::string("")),
        (dns::REPLY_HOST_V4, ConfigValue::Ipv4(Ipv4Addr::new(192, 168, 2, 1))),
        (dns::REPLY_HOST_V6, ConfigValue::Ipv6("2001:db8::53".parse().unwrap())),
        (dns::PIHOLE_PTR, ConfigValue::PtrType(PtrType::HostnameFqdn)),
        (dns::REPLY_WHEN_BUSY, ConfigValue::BusyReply(BusyReply::Refuse)),
        (dns::BLOCKING_MODE, ConfigValue::BlockingMode(BlockingMode::IpNodataAaaa)),
        (resolver::REFRESH_NAMES, ConfigValue::RefreshHostnames(RefreshHostnames::Unknown)),
        (misc::PRIVACY_LEVEL, ConfigValue::PrivacyLevel(PrivacyLevel::NoStats)),
    ];
    for (key, value) in &changes {
        config.registry_mut().set(key, value.clone()).unwrap();
    }
    config.save().unwrap();

    let mut reloaded = config_in(&dir);
    let outcome = reloaded.load(&mut DnsmasqArguments::new());

    assert!(matches!(outcome, LoadOutcome::Structured(_)));
    for (key, value) in &changes {
        assert_eq!(reloaded.registry().value(key), Some(value), "{key}");
    }
    assert_eq!(reloaded.registry(), config.registry());
}

#[test]
fn test_legacy_import_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(
        &dir,
        "BLOCKINGMODE=nxdomain\nMAXDBDAYS=999999999\nPRIVACYLEVEL=1\nLOCAL_IPV6=fe80::2\n",
    );

    let mut config = config_in(&dir);
    let outcome = config.load(&mut DnsmasqArguments::new());

    assert_eq!(outcome, LoadOutcome::Legacy(dir.path().join("pihole-FTL.conf")));
    assert_eq!(config.registry().blocking_mode(), BlockingMode::Nxdomain);
    assert_eq!(config.registry().i32(database::MAX_DB_DAYS), Some(24855));
    assert_eq!(config.registry().privacy_level(), PrivacyLevel::HideDomains);

    // The next start reads the migrated structured file
    let mut next = config_in(&dir);
    let outcome = next.load(&mut DnsmasqArguments::new());
    assert_eq!(outcome, LoadOutcome::Structured(dir.path().join("pihole-FTL.toml")));
    assert_eq!(next.registry(), config.registry());
    assert_eq!(
        next.registry().ipv6(dns::REPLY_HOST_V6),
        "fe80::2".parse::<Ipv6Addr>().ok()
    );
}

#[test]
fn test_structured_file_wins_over_legacy() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(&dir, "BLOCK_TTL=20\n");
    write_structured(&dir, "[dns]\nblockTTL = 10\n");

    let mut config = config_in(&dir);
    config.load(&mut DnsmasqArguments::new());

    assert_eq!(config.registry().u32(dns::BLOCK_TTL), Some(10));
}

#[test]
fn test_broken_structured_file_falls_back_to_legacy() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(&dir, "BLOCK_TTL=20\n");
    write_structured(&dir, "[dns]\nblockingmode = \"IP\"\n[misc\n");

    let mut config = config_in(&dir);
    let outcome = config.load(&mut DnsmasqArguments::new());

    assert!(matches!(outcome, LoadOutcome::Legacy(_)));
    assert_eq!(config.registry().u32(dns::BLOCK_TTL), Some(20));
    assert_eq!(config.registry().blocking_mode(), BlockingMode::Null);
}

#[test]
fn test_invalid_fields_do_not_abort_the_load() {
    let dir = tempfile::tempdir().unwrap();
    write_structured(
        &dir,
        "[dns]\nblockingmode = \"bogus\"\nblockTTL = 7\n[misc]\nprivacylevel = 12\nnice = 4\n",
    );

    let mut config = config_in(&dir);
    config.load(&mut DnsmasqArguments::new());

    assert_eq!(config.registry().blocking_mode(), BlockingMode::Null);
    assert_eq!(config.registry().u32(dns::BLOCK_TTL), Some(7));
    assert_eq!(config.registry().privacy_level(), PrivacyLevel::ShowAll);
    assert_eq!(config.registry().i32(misc::NICE), Some(4));
}

#[test]
fn test_reply_addr4_yields_to_local_ipv4() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(&dir, "LOCAL_IPV4=192.168.1.5\nREPLY_ADDR4=10.0.0.9\n");

    let mut config = config_in(&dir);
    config.load(&mut DnsmasqArguments::new());

    let registry = config.registry();
    assert_eq!(registry.ipv4(dns::REPLY_HOST_V4), Some(Ipv4Addr::new(192, 168, 1, 5)));
    assert_eq!(registry.bool(dns::REPLY_BLOCKING_OVERWRITE_V4), Some(false));
}

#[test]
fn test_reply_addr4_alone_fills_host_and_blocking() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(&dir, "REPLY_ADDR4=10.0.0.9\n");

    let mut config = config_in(&dir);
    config.load(&mut DnsmasqArguments::new());

    let registry = config.registry();
    let addr = Ipv4Addr::new(10, 0, 0, 9);
    assert_eq!(registry.ipv4(dns::REPLY_HOST_V4), Some(addr));
    assert_eq!(registry.ipv4(dns::REPLY_BLOCKING_V4), Some(addr));
    assert_eq!(registry.bool(dns::REPLY_HOST_OVERWRITE_V4), Some(true));
    assert_eq!(registry.bool(dns::REPLY_BLOCKING_OVERWRITE_V4), Some(true));
}

#[test]
fn test_legacy_debug_flag_reaches_resolver() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(&dir, "DEBUG_QUERIES=true\n");

    let mut config = config_in(&dir);
    let mut args = DnsmasqArguments::new();
    config.load(&mut args);

    assert_eq!(args.get(LOG_DEBUG_SLOT), Some(LOG_DEBUG_ARGUMENT));
    DebugFlags::NONE.activate();
}

#[test]
fn test_preload_queries() {
    let dir = tempfile::tempdir().unwrap();
    write_structured(&dir, "[misc]\nprivacylevel = 3\n");
    write_legacy(&dir, "BLOCKINGMODE=NODATA\nLOGFILE=\nPRIVACYLEVEL=1\n");

    let mut config = config_in(&dir);

    assert_eq!(config.privacy_level(), Some(PrivacyLevel::Maximum));
    assert_eq!(config.blocking_mode(), Some(BlockingMode::Nodata));
    assert_eq!(config.log_file_path().as_deref(), Some(""));
    assert_eq!(config.registry().str(files::LOG), Some(""));
}

#[test]
fn test_preload_without_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);

    assert_eq!(config.privacy_level(), None);
    assert_eq!(config.blocking_mode(), None);
    assert_eq!(config.log_file_path(), None);
}
