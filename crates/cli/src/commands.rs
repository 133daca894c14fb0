use anyhow::{bail, Context};
use ferrous_ftl_domain::{ConfigItem, ConfigValue};
use ferrous_ftl_infrastructure::config::structured::writer::write_registry;
use ferrous_ftl_infrastructure::FtlConfig;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

use crate::bootstrap::{config::outcome_label, load_config};

#[derive(Serialize)]
struct ItemView<'a> {
    key: &'a str,
    kind: &'static str,
    value: &'a ConfigValue,
    default: &'a ConfigValue,
    changed: bool,
}

impl<'a> From<&'a ConfigItem> for ItemView<'a> {
    fn from(item: &'a ConfigItem) -> Self {
        Self {
            key: item.key(),
            kind: item.kind().as_str(),
            value: item.value(),
            default: item.default_value(),
            changed: !item.is_default(),
        }
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    source: &'static str,
    path: Option<String>,
    resolver_args: Vec<&'a str>,
    changed: Vec<ItemView<'a>>,
}

pub fn check(config: &mut FtlConfig, json: bool) -> anyhow::Result<()> {
    let (outcome, resolver_args) = load_config(config);
    let report = CheckReport {
        source: outcome_label(&outcome),
        path: outcome.path().map(|p| p.display().to_string()),
        resolver_args: resolver_args.command_line(),
        changed: config.registry().changed().map(ItemView::from).collect(),
    };

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    match &report.path {
        Some(path) => writeln!(out, "Loaded {} config from {}", report.source, path)?,
        None => writeln!(out, "No config file found, using defaults")?,
    }
    writeln!(out, "Resolver arguments: {}", report.resolver_args.join(" "))?;
    writeln!(out, "{} item(s) differ from their defaults", report.changed.len())?;
    for item in &report.changed {
        writeln!(out, "  {} = {} (default {})", item.key, item.value, item.default)?;
    }
    Ok(())
}

pub fn dump(config: &mut FtlConfig) -> anyhow::Result<()> {
    load_config(config);
    let mut out = io::stdout().lock();
    write_registry(&mut out, config.registry())?;
    Ok(())
}

pub fn get(config: &mut FtlConfig, key: &str, json: bool) -> anyhow::Result<()> {
    load_config(config);
    let Some(item) = config.registry().get(key) else {
        bail!("Unknown config key: {key}");
    };

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &ItemView::from(item))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", item.value())?;
    }
    Ok(())
}

pub fn migrate(config: &mut FtlConfig) -> anyhow::Result<()> {
    let (outcome, _) = load_config(config);
    let path = config
        .save()
        .context("Failed to write structured config")?;

    info!(
        from = outcome_label(&outcome),
        path = %path.display(),
        "Structured config written"
    );
    println!("{}", path.display());
    Ok(())
}

pub fn preload(config: &mut FtlConfig) -> anyhow::Result<()> {
    let privacy = config.privacy_level();
    let blocking = config.blocking_mode();
    let log_file = config.log_file_path();

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "privacy level: {}",
        privacy.map_or("not set".to_string(), |p| format!("{} ({})", p, p.label()))
    )?;
    writeln!(
        out,
        "blocking mode: {}",
        blocking.map_or("not set".to_string(), |m| m.to_string())
    )?;
    writeln!(
        out,
        "log file: {}",
        match log_file.as_deref() {
            Some("") => "syslog".to_string(),
            Some(path) => path.to_string(),
            None => "not set".to_string(),
        }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_ftl_domain::config::dns;
    use ferrous_ftl_domain::BlockingMode;
    use ferrous_ftl_infrastructure::ConfigPaths;

    #[test]
    fn test_item_view_serializes_value_and_default() {
        let mut config = FtlConfig::new(ConfigPaths::in_dir(std::path::Path::new("/nonexistent")));
        config
            .registry_mut()
            .set(dns::BLOCKING_MODE, BlockingMode::Nxdomain)
            .unwrap();

        let item = config.registry().get(dns::BLOCKING_MODE).unwrap();
        let json = serde_json::to_value(ItemView::from(item)).unwrap();

        assert_eq!(json["key"], "dns.blockingmode");
        assert_eq!(json["value"], "NXDOMAIN");
        assert_eq!(json["default"], "NULL");
        assert_eq!(json["changed"], true);
    }

    #[test]
    fn test_migrate_writes_structured_target() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pihole-FTL.conf"), "BLOCK_TTL=4\n").unwrap();
        let mut config = FtlConfig::new(ConfigPaths::in_dir(dir.path()));

        migrate(&mut config).unwrap();

        let written = std::fs::read_to_string(dir.path().join("pihole-FTL.toml")).unwrap();
        assert!(written.contains("blockTTL = 4"));
    }
}
