//! Debug categories and the process-wide verbosity bitmask.
//!
//! Every category is a boolean item under `[debug]` in the structured file
//! and a `DEBUG_<NAME>` key in the legacy file. The active mask is stored in
//! a static so that diagnostics emitted later in the same load already
//! honour flags read earlier.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::ConfigRegistry;

static ACTIVE_DEBUG_FLAGS: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DebugFlag {
    Database = 1 << 0,
    Networking = 1 << 1,
    Locks = 1 << 2,
    Queries = 1 << 3,
    Flags = 1 << 4,
    Shmem = 1 << 5,
    Gc = 1 << 6,
    Arp = 1 << 7,
    Regex = 1 << 8,
    Api = 1 << 9,
    Overtime = 1 << 10,
    Status = 1 << 11,
    Caps = 1 << 12,
    Dnssec = 1 << 13,
    Vectors = 1 << 14,
    Resize = 1 << 15,
    Edns0 = 1 << 16,
    Clients = 1 << 17,
    AliasClients = 1 << 18,
    Events = 1 << 19,
    Helper = 1 << 20,
    Config = 1 << 21,
    Extra = 1 << 22,
}

impl DebugFlag {
    pub fn all() -> &'static [DebugFlag] {
        &[
            DebugFlag::Database,
            DebugFlag::Networking,
            DebugFlag::Locks,
            DebugFlag::Queries,
            DebugFlag::Flags,
            DebugFlag::Shmem,
            DebugFlag::Gc,
            DebugFlag::Arp,
            DebugFlag::Regex,
            DebugFlag::Api,
            DebugFlag::Overtime,
            DebugFlag::Status,
            DebugFlag::Caps,
            DebugFlag::Dnssec,
            DebugFlag::Vectors,
            DebugFlag::Resize,
            DebugFlag::Edns0,
            DebugFlag::Clients,
            DebugFlag::AliasClients,
            DebugFlag::Events,
            DebugFlag::Helper,
            DebugFlag::Config,
            DebugFlag::Extra,
        ]
    }

    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Symbol used by the legacy file, e.g. `DEBUG_DATABASE`
    pub fn symbol(self) -> &'static str {
        match self {
            DebugFlag::Database => "DEBUG_DATABASE",
            DebugFlag::Networking => "DEBUG_NETWORKING",
            DebugFlag::Locks => "DEBUG_LOCKS",
            DebugFlag::Queries => "DEBUG_QUERIES",
            DebugFlag::Flags => "DEBUG_FLAGS",
            DebugFlag::Shmem => "DEBUG_SHMEM",
            DebugFlag::Gc => "DEBUG_GC",
            DebugFlag::Arp => "DEBUG_ARP",
            DebugFlag::Regex => "DEBUG_REGEX",
            DebugFlag::Api => "DEBUG_API",
            DebugFlag::Overtime => "DEBUG_OVERTIME",
            DebugFlag::Status => "DEBUG_STATUS",
            DebugFlag::Caps => "DEBUG_CAPS",
            DebugFlag::Dnssec => "DEBUG_DNSSEC",
            DebugFlag::Vectors => "DEBUG_VECTORS",
            DebugFlag::Resize => "DEBUG_RESIZE",
            DebugFlag::Edns0 => "DEBUG_EDNS0",
            DebugFlag::Clients => "DEBUG_CLIENTS",
            DebugFlag::AliasClients => "DEBUG_ALIASCLIENTS",
            DebugFlag::Events => "DEBUG_EVENTS",
            DebugFlag::Helper => "DEBUG_HELPER",
            DebugFlag::Config => "DEBUG_CONFIG",
            DebugFlag::Extra => "DEBUG_EXTRA",
        }
    }

    /// Key of the matching item in the structured file
    pub fn key(self) -> &'static str {
        match self {
            DebugFlag::Database => "debug.database",
            DebugFlag::Networking => "debug.networking",
            DebugFlag::Locks => "debug.locks",
            DebugFlag::Queries => "debug.queries",
            DebugFlag::Flags => "debug.flags",
            DebugFlag::Shmem => "debug.shmem",
            DebugFlag::Gc => "debug.gc",
            DebugFlag::Arp => "debug.arp",
            DebugFlag::Regex => "debug.regex",
            DebugFlag::Api => "debug.api",
            DebugFlag::Overtime => "debug.overtime",
            DebugFlag::Status => "debug.status",
            DebugFlag::Caps => "debug.caps",
            DebugFlag::Dnssec => "debug.dnssec",
            DebugFlag::Vectors => "debug.vectors",
            DebugFlag::Resize => "debug.resize",
            DebugFlag::Edns0 => "debug.edns0",
            DebugFlag::Clients => "debug.clients",
            DebugFlag::AliasClients => "debug.aliasclients",
            DebugFlag::Events => "debug.events",
            DebugFlag::Helper => "debug.helper",
            DebugFlag::Config => "debug.config",
            DebugFlag::Extra => "debug.extra",
        }
    }

    /// Category name: the symbol without its `DEBUG_` prefix, lower case
    pub fn name(self) -> &'static str {
        &self.key()["debug.".len()..]
    }

    pub fn from_symbol(symbol: &str) -> Option<DebugFlag> {
        Self::all().iter().copied().find(|f| f.symbol() == symbol)
    }

    /// Categories the legacy file can toggle individually
    pub fn legacy() -> impl Iterator<Item = DebugFlag> {
        Self::all().iter().copied().filter(|f| *f != DebugFlag::Extra)
    }
}

/// Set of enabled debug categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugFlags(u32);

impl DebugFlags {
    pub const NONE: DebugFlags = DebugFlags(0);

    pub fn all() -> Self {
        DebugFlags(DebugFlag::all().iter().fold(0, |mask, f| mask | f.bit()))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, flag: DebugFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: DebugFlag) {
        self.0 |= flag.bit();
    }

    pub fn remove(&mut self, flag: DebugFlag) {
        self.0 &= !flag.bit();
    }

    pub fn any(&self) -> bool {
        self.0 != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = DebugFlag> + '_ {
        DebugFlag::all().iter().copied().filter(|f| self.contains(*f))
    }

    /// Derive the mask from the `[debug]` items. `debug.all` enables everything.
    pub fn from_registry(registry: &ConfigRegistry) -> Self {
        if registry.bool(ALL_KEY).unwrap_or(false) {
            return Self::all();
        }

        let mut flags = DebugFlags::NONE;
        for flag in DebugFlag::all() {
            if registry.bool(flag.key()).unwrap_or(false) {
                flags.insert(*flag);
            }
        }
        flags
    }

    /// Make this mask the process-wide active set
    pub fn activate(self) {
        ACTIVE_DEBUG_FLAGS.store(self.0, Ordering::Release);
    }

    pub fn active() -> Self {
        DebugFlags(ACTIVE_DEBUG_FLAGS.load(Ordering::Acquire))
    }
}

/// Key of the pseudo-flag that enables every category
pub const ALL_KEY: &str = "debug.all";

#[inline]
pub fn debug_enabled(flag: DebugFlag) -> bool {
    ACTIVE_DEBUG_FLAGS.load(Ordering::Relaxed) & flag.bit() != 0
}

/// Emit a `tracing::debug!` event only when `flag` is active.
///
/// ```
/// use ferrous_ftl_domain::{debug_log, DebugFlag};
///
/// debug_log!(DebugFlag::Config, key = "dns.blockingmode", "value read");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)+) => {
        if $crate::debug::debug_enabled($flag) {
            ::tracing::debug!(category = $flag.name(), $($arg)+);
        }
    };
}
