use ferrous_ftl_domain::ConfigError;
use rustc_hash::FxHashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::paths::open_first;

/// A parsed legacy config file.
///
/// Lines are read once into a first-wins map of key to trimmed value, so
/// lookups afterwards never touch the file again.
#[derive(Debug, Clone, Default)]
pub struct LegacyConfigFile {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl LegacyConfigFile {
    /// Open the first readable candidate. `Ok(None)` if none exists.
    pub fn open(candidates: &[PathBuf]) -> Result<Option<Self>, ConfigError> {
        let Some((path, file)) = open_first(candidates) else {
            return Ok(None);
        };
        Self::from_reader(path, BufReader::new(file)).map(Some)
    }

    pub fn from_reader(path: PathBuf, mut reader: impl BufRead) -> Result<Self, ConfigError> {
        let mut entries = FxHashMap::default();
        let mut buffer = Vec::with_capacity(256);

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            if let Some((key, value)) = split_line(&line) {
                entries
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }

        Ok(Self { path, entries })
    }

    pub fn parse_str(text: &str) -> Self {
        let mut entries = FxHashMap::default();
        for line in text.lines() {
            if let Some((key, value)) = split_line(line) {
                entries
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
        Self {
            path: PathBuf::new(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed value of `key`; `Some("")` when the key is present but empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key, value.trim()))
}
