use super::item::ConfigItem;
use crate::validators;

pub const DB_IMPORT: &str = "database.DBimport";
pub const MAX_DB_DAYS: &str = "database.maxDBdays";
pub const MAX_HISTORY: &str = "database.maxHistory";
pub const DB_INTERVAL: &str = "database.DBinterval";
pub const PARSE_ARP_CACHE: &str = "database.network.parseARPcache";
pub const NETWORK_EXPIRE: &str = "database.network.expire";

pub(crate) fn items() -> Vec<ConfigItem> {
    vec![
        ConfigItem::new(
            DB_IMPORT,
            true,
            "Should queries be imported from the database on start-up?",
        ),
        ConfigItem::new(
            MAX_DB_DAYS,
            365i32,
            "How long should queries be kept in the database [days]?\n-1 keeps them forever, 0 disables the database",
        )
        .with_validator(validators::is_max_db_days),
        ConfigItem::new(
            MAX_HISTORY,
            validators::MAX_HISTORY_SECONDS,
            "Up to how many seconds in the past should queries be imported from the database?",
        )
        .with_validator(validators::is_max_history),
        ConfigItem::new(
            DB_INTERVAL,
            60u32,
            "How often are queries stored in the database [seconds]?",
        )
        .with_validator(validators::is_db_interval),
        ConfigItem::new(
            PARSE_ARP_CACHE,
            true,
            "Should the ARP cache be parsed into the network table?",
        ),
        ConfigItem::new(
            NETWORK_EXPIRE,
            365u32,
            "Network table entries older than this many days are removed (0 - 8760)",
        )
        .with_validator(validators::is_day_count),
    ]
}
