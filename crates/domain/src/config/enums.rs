use std::fmt;
use std::str::FromStr;

/// Case-insensitive comparison shared by every enum name lookup.
#[inline]
pub fn names_match(canonical: &str, candidate: &str) -> bool {
    canonical.eq_ignore_ascii_case(candidate)
}

/// Closed enumeration stored as a string in the config files.
///
/// Every implementor carries a static table of its variants; lookups by name
/// walk that table with [`names_match`].
pub trait ConfigEnum: Copy + PartialEq + Sized + 'static {
    /// All variants in canonical order
    fn all() -> &'static [Self];

    /// Canonical name as written to the structured config file
    fn as_str(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|variant| names_match(variant.as_str(), name))
    }

    /// Comma separated list of the accepted names, quoted
    fn options() -> String {
        Self::all()
            .iter()
            .map(|variant| format!("\"{}\"", variant.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Answer given to PTR requests for the addresses of the local host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PtrType {
    None,
    Hostname,
    HostnameFqdn,
    #[default]
    PiHole,
}

impl ConfigEnum for PtrType {
    fn all() -> &'static [Self] {
        &[
            PtrType::None,
            PtrType::Hostname,
            PtrType::HostnameFqdn,
            PtrType::PiHole,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            PtrType::None => "NONE",
            PtrType::Hostname => "HOSTNAME",
            PtrType::HostnameFqdn => "HOSTNAMEFQDN",
            PtrType::PiHole => "PI.HOLE",
        }
    }
}

/// Reply policy while the gravity database is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusyReply {
    Block,
    #[default]
    Allow,
    Refuse,
    Drop,
}

impl ConfigEnum for BusyReply {
    fn all() -> &'static [Self] {
        &[
            BusyReply::Block,
            BusyReply::Allow,
            BusyReply::Refuse,
            BusyReply::Drop,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            BusyReply::Block => "BLOCK",
            BusyReply::Allow => "ALLOW",
            BusyReply::Refuse => "REFUSE",
            BusyReply::Drop => "DROP",
        }
    }
}

/// How blocked queries are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockingMode {
    #[default]
    Null,
    IpNodataAaaa,
    Ip,
    Nxdomain,
    Nodata,
}

impl ConfigEnum for BlockingMode {
    fn all() -> &'static [Self] {
        &[
            BlockingMode::Null,
            BlockingMode::IpNodataAaaa,
            BlockingMode::Ip,
            BlockingMode::Nxdomain,
            BlockingMode::Nodata,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            BlockingMode::Null => "NULL",
            BlockingMode::IpNodataAaaa => "IP-NODATA-AAAA",
            BlockingMode::Ip => "IP",
            BlockingMode::Nxdomain => "NXDOMAIN",
            BlockingMode::Nodata => "NODATA",
        }
    }
}

/// Which client host names are periodically re-resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshHostnames {
    #[default]
    Ipv4Only,
    All,
    Unknown,
    None,
}

impl ConfigEnum for RefreshHostnames {
    fn all() -> &'static [Self] {
        &[
            RefreshHostnames::Ipv4Only,
            RefreshHostnames::All,
            RefreshHostnames::Unknown,
            RefreshHostnames::None,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RefreshHostnames::Ipv4Only => "IPV4_ONLY",
            RefreshHostnames::All => "ALL",
            RefreshHostnames::Unknown => "UNKNOWN",
            RefreshHostnames::None => "NONE",
        }
    }
}

/// Ordinal privacy setting. Higher levels hide strictly more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum PrivacyLevel {
    #[default]
    ShowAll = 0,
    HideDomains = 1,
    HideDomainsClients = 2,
    Maximum = 3,
    NoStats = 4,
}

impl PrivacyLevel {
    pub const MIN: PrivacyLevel = PrivacyLevel::ShowAll;
    pub const MAX: PrivacyLevel = PrivacyLevel::NoStats;

    pub fn all() -> &'static [PrivacyLevel] {
        &[
            PrivacyLevel::ShowAll,
            PrivacyLevel::HideDomains,
            PrivacyLevel::HideDomainsClients,
            PrivacyLevel::Maximum,
            PrivacyLevel::NoStats,
        ]
    }

    /// Map an integer onto the closed level range; anything outside is rejected.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(PrivacyLevel::ShowAll),
            1 => Some(PrivacyLevel::HideDomains),
            2 => Some(PrivacyLevel::HideDomainsClients),
            3 => Some(PrivacyLevel::Maximum),
            4 => Some(PrivacyLevel::NoStats),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrivacyLevel::ShowAll => "show everything",
            PrivacyLevel::HideDomains => "hide domains",
            PrivacyLevel::HideDomainsClients => "hide domains and clients",
            PrivacyLevel::Maximum => "anonymous mode",
            PrivacyLevel::NoStats => "no statistics",
        }
    }

    pub fn options() -> String {
        Self::all()
            .iter()
            .map(|level| format!("{} ({})", level.level(), level.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! display_and_parse {
    ($($ty:ident),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as ConfigEnum>::from_name(s).ok_or_else(|| {
                        format!(
                            "Invalid {}: {} (allowed: {})",
                            stringify!($ty),
                            s,
                            <$ty as ConfigEnum>::options()
                        )
                    })
                }
            }
        )+
    };
}

display_and_parse!(PtrType, BusyReply, BlockingMode, RefreshHostnames);

impl fmt::Display for PrivacyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}
