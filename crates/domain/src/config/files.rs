use super::item::ConfigItem;

pub const PID: &str = "files.pid";
pub const DATABASE: &str = "files.database";
pub const GRAVITY: &str = "files.gravity";
pub const MACVENDOR: &str = "files.macvendor";
pub const SETUP_VARS: &str = "files.setupVars";
pub const HTTP_INFO: &str = "files.http_info";
pub const PH7_ERROR: &str = "files.ph7_error";
pub const LOG: &str = "files.log";

pub const DEFAULT_LOG: &str = "/var/log/pihole/FTL.log";

pub(crate) fn items() -> Vec<ConfigItem> {
    vec![
        ConfigItem::new(PID, "/run/pihole-FTL.pid", "Location of the PID file"),
        ConfigItem::new(
            DATABASE,
            "/etc/pihole/pihole-FTL.db",
            "Location of the long-term query database",
        ),
        ConfigItem::new(
            GRAVITY,
            "/etc/pihole/gravity.db",
            "Location of the gravity (blocklist) database",
        ),
        ConfigItem::new(
            MACVENDOR,
            "/etc/pihole/macvendor.db",
            "Location of the MAC vendor database",
        ),
        ConfigItem::new(
            SETUP_VARS,
            "/etc/pihole/setupVars.conf",
            "Location of the setupVars file",
        ),
        ConfigItem::new(
            HTTP_INFO,
            "/var/log/pihole/HTTP_info.log",
            "Web server access log",
        ),
        ConfigItem::new(
            PH7_ERROR,
            "/var/log/pihole/PH7.log",
            "Script engine error log",
        ),
        ConfigItem::new(
            LOG,
            DEFAULT_LOG,
            "Log file of the daemon. An empty path logs to syslog",
        ),
    ]
}
