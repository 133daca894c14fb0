use std::net::{Ipv4Addr, Ipv6Addr};

use super::enums::{BlockingMode, BusyReply, PtrType};
use super::item::ConfigItem;
use crate::validators;

pub const CNAME_DEEP_INSPECT: &str = "dns.CNAMEdeepInspect";
pub const BLOCK_ESNI: &str = "dns.blockESNI";
pub const EDNS0_ECS: &str = "dns.EDNS0ECS";
pub const IGNORE_LOCALHOST: &str = "dns.ignoreLocalhost";
pub const SHOW_DNSSEC: &str = "dns.showDNSSEC";
pub const ANALYZE_AAAA: &str = "dns.analyzeAAAA";
pub const ANALYZE_ONLY_A_AND_AAAA: &str = "dns.analyzeOnlyAandAAAA";
pub const PIHOLE_PTR: &str = "dns.piholePTR";
pub const REPLY_WHEN_BUSY: &str = "dns.replyWhenBusy";
pub const BLOCK_TTL: &str = "dns.blockTTL";
pub const BLOCKING_MODE: &str = "dns.blockingmode";

pub const CACHE_SIZE: &str = "dns.cache.size";
pub const CACHE_OPTIMIZER: &str = "dns.cache.optimizer";

pub const MOZILLA_CANARY: &str = "dns.specialDomains.mozillaCanary";
pub const ICLOUD_PRIVATE_RELAY: &str = "dns.specialDomains.iCloudPrivateRelay";

pub const REPLY_HOST_OVERWRITE_V4: &str = "dns.reply.host.overwrite_v4";
pub const REPLY_HOST_V4: &str = "dns.reply.host.v4";
pub const REPLY_HOST_OVERWRITE_V6: &str = "dns.reply.host.overwrite_v6";
pub const REPLY_HOST_V6: &str = "dns.reply.host.v6";

pub const REPLY_BLOCKING_OVERWRITE_V4: &str = "dns.reply.blocking.overwrite_v4";
pub const REPLY_BLOCKING_V4: &str = "dns.reply.blocking.v4";
pub const REPLY_BLOCKING_OVERWRITE_V6: &str = "dns.reply.blocking.overwrite_v6";
pub const REPLY_BLOCKING_V6: &str = "dns.reply.blocking.v6";

pub const RATE_LIMIT_COUNT: &str = "dns.rateLimit.count";
pub const RATE_LIMIT_INTERVAL: &str = "dns.rateLimit.interval";

pub(crate) fn items() -> Vec<ConfigItem> {
    vec![
        ConfigItem::new(
            CNAME_DEEP_INSPECT,
            true,
            "Use this option to control deep CNAME inspection. Disabling it might be beneficial\nfor very low-end devices",
        ),
        ConfigItem::new(
            BLOCK_ESNI,
            true,
            "Should _esni. subdomains be blocked by default? Encrypted Server Name Indication\n(ESNI) would allow clients to hide the domain they connect to from the resolver",
        ),
        ConfigItem::new(
            EDNS0_ECS,
            true,
            "Should we overwrite the query source when client information is provided through\nEDNS0 client subnet (ECS) information?",
        ),
        ConfigItem::new(
            IGNORE_LOCALHOST,
            false,
            "Should queries from localhost be ignored in the statistics?",
        ),
        ConfigItem::new(
            SHOW_DNSSEC,
            true,
            "Should automatically generated DNSSEC queries be shown in the query log?",
        ),
        ConfigItem::new(
            ANALYZE_AAAA,
            true,
            "Should AAAA queries be analyzed?",
        ),
        ConfigItem::new(
            ANALYZE_ONLY_A_AND_AAAA,
            false,
            "Should only A and AAAA queries be analyzed? All other query types are still\nresolved but not counted",
        ),
        ConfigItem::new(
            PIHOLE_PTR,
            PtrType::PiHole,
            "How should PTR requests for the addresses of this host be answered?",
        ),
        ConfigItem::new(
            REPLY_WHEN_BUSY,
            BusyReply::Allow,
            "How should queries be answered while the gravity database is not available?",
        ),
        ConfigItem::new(
            BLOCK_TTL,
            2u32,
            "Time-to-live (seconds) handed out with blocked replies",
        ),
        ConfigItem::new(
            BLOCKING_MODE,
            BlockingMode::Null,
            "How should blocked queries be answered?",
        ),
        ConfigItem::new(
            CACHE_SIZE,
            10_000u64,
            "Number of entries the DNS cache can hold",
        )
        .with_validator(validators::fits_toml_integer),
        ConfigItem::new(
            CACHE_OPTIMIZER,
            3600i64,
            "Seconds stale cache entries may still be served while being refreshed\n(-1 disables the optimizer)",
        )
        .with_validator(validators::is_cache_optimizer),
        ConfigItem::new(
            MOZILLA_CANARY,
            true,
            "Should use-application-dns.net always be answered with NXDOMAIN?",
        ),
        ConfigItem::new(
            ICLOUD_PRIVATE_RELAY,
            true,
            "Should the iCloud Private Relay domains always be answered with NXDOMAIN?",
        ),
        ConfigItem::new(
            REPLY_HOST_OVERWRITE_V4,
            false,
            "Use a fixed IPv4 address for A queries of this host's own name",
        ),
        ConfigItem::new(
            REPLY_HOST_V4,
            Ipv4Addr::UNSPECIFIED,
            "IPv4 address used when overwrite_v4 is enabled",
        ),
        ConfigItem::new(
            REPLY_HOST_OVERWRITE_V6,
            false,
            "Use a fixed IPv6 address for AAAA queries of this host's own name",
        ),
        ConfigItem::new(
            REPLY_HOST_V6,
            Ipv6Addr::UNSPECIFIED,
            "IPv6 address used when overwrite_v6 is enabled",
        ),
        ConfigItem::new(
            REPLY_BLOCKING_OVERWRITE_V4,
            false,
            "Use a fixed IPv4 address for IP blocking mode replies",
        ),
        ConfigItem::new(
            REPLY_BLOCKING_V4,
            Ipv4Addr::UNSPECIFIED,
            "IPv4 address used when overwrite_v4 is enabled",
        ),
        ConfigItem::new(
            REPLY_BLOCKING_OVERWRITE_V6,
            false,
            "Use a fixed IPv6 address for IP blocking mode replies",
        ),
        ConfigItem::new(
            REPLY_BLOCKING_V6,
            Ipv6Addr::UNSPECIFIED,
            "IPv6 address used when overwrite_v6 is enabled",
        ),
        ConfigItem::new(
            RATE_LIMIT_COUNT,
            1000u32,
            "Number of queries a single client may send within the rate limit interval\n(0 disables rate limiting)",
        ),
        ConfigItem::new(
            RATE_LIMIT_INTERVAL,
            60u32,
            "Rate limit interval in seconds",
        ),
    ]
}
