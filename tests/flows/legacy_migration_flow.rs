#[path = "../common/fixtures.rs"]
mod fixtures;

use ferrous_ftl_application::use_cases::LoadOutcome;
use ferrous_ftl_domain::config::{database, dns, files, http, misc, resolver};
use ferrous_ftl_domain::{BlockingMode, BusyReply, PrivacyLevel, PtrType, RefreshHostnames};
use ferrous_ftl_infrastructure::DnsmasqArguments;
use fixtures::{ConfigDir, LEGACY_V5};
use std::net::{Ipv4Addr, Ipv6Addr};

#[test]
fn test_v5_file_is_imported_key_by_key() {
    let dir = ConfigDir::new();
    dir.write_legacy(LEGACY_V5);

    let mut config = dir.config();
    let outcome = config.load(&mut DnsmasqArguments::new());
    assert_eq!(outcome, LoadOutcome::Legacy(dir.legacy_path()));

    let r = config.registry();
    assert_eq!(r.blocking_mode(), BlockingMode::IpNodataAaaa);
    assert_eq!(r.privacy_level(), PrivacyLevel::HideDomains);
    assert_eq!(r.i32(database::MAX_DB_DAYS), Some(91));
    assert_eq!(r.u32(database::DB_INTERVAL), Some(60));
    assert_eq!(r.u32(database::MAX_HISTORY), Some(45000));
    assert_eq!(r.str(files::DATABASE), Some("/srv/pihole/pihole-FTL.db"));
    assert_eq!(r.bool(resolver::RESOLVE_IPV6), Some(false));
    assert_eq!(r.bool(dns::ANALYZE_AAAA), Some(false));
    assert_eq!(r.bool(dns::IGNORE_LOCALHOST), Some(true));
    assert_eq!(r.ptr_type(dns::PIHOLE_PTR), Some(PtrType::Hostname));
    assert_eq!(r.busy_reply(dns::REPLY_WHEN_BUSY), Some(BusyReply::Refuse));
    assert_eq!(r.u32(dns::RATE_LIMIT_COUNT), Some(500));
    assert_eq!(r.u32(dns::RATE_LIMIT_INTERVAL), Some(10));
    assert_eq!(
        r.refresh_hostnames(resolver::REFRESH_NAMES),
        Some(RefreshHostnames::Unknown)
    );
    assert_eq!(r.ipv4(dns::REPLY_HOST_V4), Some(Ipv4Addr::new(192, 168, 178, 2)));
    assert_eq!(r.bool(dns::REPLY_BLOCKING_OVERWRITE_V4), Some(false));
    assert_eq!(r.ipv6(dns::REPLY_BLOCKING_V6), Some(Ipv6Addr::LOCALHOST));
    assert_eq!(r.str(http::PORT), Some("80o,443os,[::]:80o"));
    assert_eq!(r.str(http::ACL), Some("+0.0.0.0/0"));
    assert_eq!(r.i32(misc::NICE), Some(-999));
    assert_eq!(r.u32(misc::CHECK_DISK), Some(75));
    assert_eq!(r.u32(dns::BLOCK_TTL), Some(10));
    assert_eq!(r.str(files::LOG), Some("/var/log/ftl-custom.log"));
}

#[test]
fn test_import_happens_once() {
    let dir = ConfigDir::new();
    dir.write_legacy(LEGACY_V5);

    let mut first = dir.config();
    first.load(&mut DnsmasqArguments::new());
    assert!(dir.structured_path().exists());

    // Later edits to the legacy file are no longer picked up
    dir.write_legacy("BLOCKINGMODE=NODATA\nBLOCK_TTL=99\n");

    let mut second = dir.config();
    let outcome = second.load(&mut DnsmasqArguments::new());

    assert_eq!(outcome, LoadOutcome::Structured(dir.structured_path()));
    assert_eq!(second.registry().blocking_mode(), BlockingMode::IpNodataAaaa);
    assert_eq!(second.registry().u32(dns::BLOCK_TTL), Some(10));
    assert_eq!(second.registry(), first.registry());
}

#[test]
fn test_migrated_file_marks_changed_values() {
    let dir = ConfigDir::new();
    dir.write_legacy(LEGACY_V5);
    dir.config().load(&mut DnsmasqArguments::new());

    let text = dir.read_structured();
    assert!(text.contains("blockingmode = \"IP-NODATA-AAAA\" ### CHANGED, default = \"NULL\""));
    assert!(text.contains("resolveIPv4 = true\n"));
    assert!(toml::from_str::<toml::Table>(&text).is_ok());
}

#[test]
fn test_unparseable_structured_file_triggers_reimport() {
    let dir = ConfigDir::new();
    let broken = "[misc]\nprivacylevel = 1\n[dns\n";
    dir.write_legacy("PRIVACYLEVEL=3\n");
    dir.write_structured(broken);

    let mut config = dir.config();
    let outcome = config.load(&mut DnsmasqArguments::new());

    assert_eq!(outcome, LoadOutcome::Legacy(dir.legacy_path()));
    assert_eq!(config.registry().privacy_level(), PrivacyLevel::Maximum);
    assert_eq!(dir.read_structured(), broken);
}
