use super::item::ConfigItem;

pub const DOMAIN: &str = "http.domain";
pub const ACL: &str = "http.acl";
pub const PORT: &str = "http.port";
pub const LOCAL_API_AUTH: &str = "http.localAPIauth";
pub const SESSION_TIMEOUT: &str = "http.sessionTimeout";
pub const PRETTY_JSON: &str = "http.prettyJSON";
pub const WEBROOT: &str = "http.paths.webroot";
pub const WEBHOME: &str = "http.paths.webhome";

pub(crate) fn items() -> Vec<ConfigItem> {
    vec![
        ConfigItem::new(
            DOMAIN,
            "pi.hole",
            "Domain the web interface is reachable at",
        ),
        ConfigItem::new(
            ACL,
            "",
            "Comma separated list of subnets prefixed with + (allow) or - (deny).\nThe last match wins, an empty list allows everyone",
        ),
        ConfigItem::new(
            PORT,
            "8080",
            "Port(s) the web server listens on",
        ),
        ConfigItem::new(
            LOCAL_API_AUTH,
            true,
            "Do local clients need to authenticate to access the API?",
        ),
        ConfigItem::new(
            SESSION_TIMEOUT,
            300u32,
            "Seconds a session stays valid after login",
        ),
        ConfigItem::new(
            PRETTY_JSON,
            false,
            "Should API responses be pretty-printed?",
        ),
        ConfigItem::new(
            WEBROOT,
            "/var/www/html",
            "Server root directory of the web interface",
        ),
        ConfigItem::new(
            WEBHOME,
            "/admin/",
            "Sub-directory of the root containing the web interface",
        ),
    ]
}
