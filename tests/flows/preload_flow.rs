#[path = "../common/fixtures.rs"]
mod fixtures;

use ferrous_ftl_domain::{BlockingMode, PrivacyLevel};
use ferrous_ftl_infrastructure::DnsmasqArguments;
use fixtures::{ConfigDir, LEGACY_V5};

#[test]
fn test_preload_from_legacy_only() {
    let dir = ConfigDir::new();
    dir.write_legacy(LEGACY_V5);

    let mut config = dir.config();
    assert_eq!(config.privacy_level(), Some(PrivacyLevel::HideDomains));
    assert_eq!(config.blocking_mode(), Some(BlockingMode::IpNodataAaaa));
    assert_eq!(config.log_file_path().as_deref(), Some("/var/log/ftl-custom.log"));

    // Pre-load queries never write the structured file
    assert!(!dir.structured_path().exists());
}

#[test]
fn test_preload_agrees_with_full_load() {
    let dir = ConfigDir::new();
    dir.write_structured(
        "[dns]\nblockingmode = \"nodata\"\n[files]\nlog = \"/tmp/ftl.log\"\n[misc]\nprivacylevel = 2\n",
    );

    let mut early = dir.config();
    let privacy = early.privacy_level();
    let blocking = early.blocking_mode();
    let log_file = early.log_file_path();

    let mut full = dir.config();
    full.load(&mut DnsmasqArguments::new());

    assert_eq!(privacy, Some(full.registry().privacy_level()));
    assert_eq!(blocking, Some(full.registry().blocking_mode()));
    assert_eq!(log_file.as_deref(), full.registry().str("files.log"));
}

#[test]
fn test_structured_value_shadows_legacy_key() {
    let dir = ConfigDir::new();
    dir.write_structured("[misc]\nprivacylevel = 0\n");
    dir.write_legacy("PRIVACYLEVEL=3\n");

    let mut config = dir.config();
    assert_eq!(config.privacy_level(), Some(PrivacyLevel::ShowAll));
}
