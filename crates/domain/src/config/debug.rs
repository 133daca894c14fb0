use super::item::ConfigItem;
use crate::debug::{DebugFlag, ALL_KEY};

fn help(flag: DebugFlag) -> &'static str {
    match flag {
        DebugFlag::Database => "Print debugging information about database actions",
        DebugFlag::Networking => "Print information about detected interfaces",
        DebugFlag::Locks => "Print information about shared memory locks",
        DebugFlag::Queries => "Print extensive query information (domains, types, replies)",
        DebugFlag::Flags => "Print flags of queries received by the resolver",
        DebugFlag::Shmem => "Print information about shared memory buffers",
        DebugFlag::Gc => "Print information about the garbage collection",
        DebugFlag::Arp => "Print information about ARP table processing",
        DebugFlag::Regex => "Print details about regex matching",
        DebugFlag::Api => "Print extra debugging information concerning API calls",
        DebugFlag::Overtime => "Print information about overTime memory operations",
        DebugFlag::Status => "Print information about status changes of individual queries",
        DebugFlag::Caps => "Print information about capabilities granted to the daemon",
        DebugFlag::Dnssec => "Print information about DNSSEC activity",
        DebugFlag::Vectors => "Print vector operations",
        DebugFlag::Resize => "Print information about shared memory resizing",
        DebugFlag::Edns0 => "Print debugging information about received EDNS(0) data",
        DebugFlag::Clients => "Log various important client events",
        DebugFlag::AliasClients => "Log information related to alias-client processing",
        DebugFlag::Events => "Log information regarding event queue processing",
        DebugFlag::Helper => "Log information about script helpers",
        DebugFlag::Config => "Print config parsing details",
        DebugFlag::Extra => "Temporary flag used for extra debugging output",
    }
}

pub(crate) fn items() -> Vec<ConfigItem> {
    let mut items: Vec<ConfigItem> = DebugFlag::all()
        .iter()
        .map(|flag| ConfigItem::new(flag.key(), false, help(*flag)))
        .collect();

    items.push(ConfigItem::new(
        ALL_KEY,
        false,
        "Set all debug flags at once",
    ));
    items
}
