use super::enums::RefreshHostnames;
use super::item::ConfigItem;

pub const RESOLVE_IPV4: &str = "resolver.resolveIPv4";
pub const RESOLVE_IPV6: &str = "resolver.resolveIPv6";
pub const NETWORK_NAMES: &str = "resolver.networkNames";
pub const REFRESH_NAMES: &str = "resolver.refreshNames";

pub(crate) fn items() -> Vec<ConfigItem> {
    vec![
        ConfigItem::new(
            RESOLVE_IPV4,
            true,
            "Should host names of IPv4 clients be resolved?",
        ),
        ConfigItem::new(
            RESOLVE_IPV6,
            true,
            "Should host names of IPv6 clients be resolved?",
        ),
        ConfigItem::new(
            NETWORK_NAMES,
            true,
            "Fall back to names of other addresses of the same device found in the network table",
        ),
        ConfigItem::new(
            REFRESH_NAMES,
            RefreshHostnames::Ipv4Only,
            "Which client host names should be refreshed periodically?",
        ),
    ]
}
