use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LEGACY_LOCAL_PATH: &str = "pihole-FTL.conf";
pub const LEGACY_GLOBAL_PATH: &str = "/etc/pihole/pihole-FTL.conf";

pub const STRUCTURED_LOCAL_PATH: &str = "pihole-FTL.toml";
pub const STRUCTURED_GLOBAL_PATH: &str = "/etc/pihole/pihole-FTL.toml";

/// Search lists for both config formats plus the structured write target.
///
/// Candidates are tried in order; the first one that can be opened wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub structured: Vec<PathBuf>,
    pub legacy: Vec<PathBuf>,
    pub structured_target: PathBuf,
}

impl ConfigPaths {
    /// Working directory first, then `/etc/pihole`
    pub fn standard() -> Self {
        Self {
            structured: vec![
                PathBuf::from(STRUCTURED_LOCAL_PATH),
                PathBuf::from(STRUCTURED_GLOBAL_PATH),
            ],
            legacy: vec![
                PathBuf::from(LEGACY_LOCAL_PATH),
                PathBuf::from(LEGACY_GLOBAL_PATH),
            ],
            structured_target: PathBuf::from(STRUCTURED_GLOBAL_PATH),
        }
    }

    /// Both files inside `dir`, nothing else searched
    pub fn in_dir(dir: &Path) -> Self {
        let structured = dir.join(STRUCTURED_LOCAL_PATH);
        Self {
            structured: vec![structured.clone()],
            legacy: vec![dir.join(LEGACY_LOCAL_PATH)],
            structured_target: structured,
        }
    }

    /// Read and write the structured file at exactly `path`
    pub fn with_structured(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.structured = vec![path.clone()];
        self.structured_target = path;
        self
    }

    pub fn with_legacy(mut self, path: impl Into<PathBuf>) -> Self {
        self.legacy = vec![path.into()];
        self
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::standard()
    }
}

/// Open the first candidate that exists and is readable.
pub(crate) fn open_first(candidates: &[PathBuf]) -> Option<(PathBuf, File)> {
    for path in candidates {
        match File::open(path) {
            Ok(file) => return Some((path.clone(), file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not present");
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Config file not readable");
            }
        }
    }
    None
}
