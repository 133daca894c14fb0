use super::enums::PrivacyLevel;
use super::item::ConfigItem;
use crate::validators;

pub const PRIVACY_LEVEL: &str = "misc.privacylevel";
pub const DELAY_STARTUP: &str = "misc.delay_startup";
pub const NICE: &str = "misc.nice";
pub const ADDR2LINE: &str = "misc.addr2line";
pub const CHECK_LOAD: &str = "misc.check.load";
pub const CHECK_SHMEM: &str = "misc.check.shmem";
pub const CHECK_DISK: &str = "misc.check.disk";

pub(crate) fn items() -> Vec<ConfigItem> {
    vec![
        ConfigItem::new(
            PRIVACY_LEVEL,
            PrivacyLevel::ShowAll,
            "How much detail about queries is recorded and exposed?",
        ),
        ConfigItem::new(
            DELAY_STARTUP,
            0u32,
            "Seconds to wait before starting the resolver (0 - 300)",
        )
        .with_validator(validators::is_startup_delay),
        ConfigItem::new(
            NICE,
            -10i32,
            "Niceness of the daemon (-20 - 19), -999 leaves the priority untouched",
        )
        .with_validator(validators::is_nice),
        ConfigItem::new(
            ADDR2LINE,
            true,
            "Should addr2line be used to resolve addresses in backtraces?",
        ),
        ConfigItem::new(
            CHECK_LOAD,
            true,
            "Warn when the 15 minute load average exceeds the number of CPU cores",
        ),
        ConfigItem::new(
            CHECK_SHMEM,
            90u32,
            "Shared memory usage (percent) above which a warning is logged (0 disables)",
        )
        .with_validator(validators::is_percentage),
        ConfigItem::new(
            CHECK_DISK,
            90u32,
            "Disk usage (percent) above which a warning is logged (0 disables)",
        )
        .with_validator(validators::is_percentage),
    ]
}
