#![allow(dead_code)]

use ferrous_ftl_infrastructure::{ConfigPaths, FtlConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding both config files of one instance
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.dir.path().join("pihole-FTL.conf")
    }

    pub fn structured_path(&self) -> PathBuf {
        self.dir.path().join("pihole-FTL.toml")
    }

    pub fn write_legacy(&self, text: &str) {
        fs::write(self.legacy_path(), text).expect("write legacy config");
    }

    pub fn write_structured(&self, text: &str) {
        fs::write(self.structured_path(), text).expect("write structured config");
    }

    pub fn read_structured(&self) -> String {
        fs::read_to_string(self.structured_path()).expect("read structured config")
    }

    pub fn config(&self) -> FtlConfig {
        FtlConfig::new(ConfigPaths::in_dir(self.dir.path()))
    }
}

/// A v5 style legacy file touching most key families
pub const LEGACY_V5: &str = "\
# Pi-hole FTL config
;comment in ini style
BLOCKINGMODE=IP-NODATA-AAAA
PRIVACYLEVEL=1
MAXDBDAYS=91
DBINTERVAL=1.0
MAXLOGAGE=12.5
DBFILE=/srv/pihole/pihole-FTL.db
RESOLVE_IPV6=no
AAAA_QUERY_ANALYSIS=no
IGNORE_LOCALHOST=yes
PIHOLE_PTR=HOSTNAME
REPLY_WHEN_BUSY=REFUSE
RATE_LIMIT=500/10
REFRESH_HOSTNAMES=UNKNOWN
LOCAL_IPV4=192.168.178.2
REPLY_ADDR4=10.0.0.2
BLOCK_IPV6=::1
WEBPORT=80o,443os,[::]:80o
WEBACL=+0.0.0.0/0
NICE=-999
CHECK_DISK=75
BLOCK_TTL=10
LOGFILE=/var/log/ftl-custom.log
BLOCKINGMODE=NXDOMAIN
";
