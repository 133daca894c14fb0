use ferrous_ftl_application::use_cases::LoadOutcome;
use ferrous_ftl_infrastructure::{ConfigPaths, DnsmasqArguments, FtlConfig};
use std::path::PathBuf;
use tracing::info;

/// Standard search lists, narrowed by any command line override
pub fn config_paths(structured: Option<PathBuf>, legacy: Option<PathBuf>) -> ConfigPaths {
    let mut paths = ConfigPaths::standard();
    if let Some(path) = structured {
        paths = paths.with_structured(path);
    }
    if let Some(path) = legacy {
        paths = paths.with_legacy(path);
    }
    paths
}

pub fn load_config(config: &mut FtlConfig) -> (LoadOutcome, DnsmasqArguments) {
    let mut resolver_args = DnsmasqArguments::new();
    let outcome = config.load(&mut resolver_args);

    let registry = config.registry();
    info!(
        source = outcome_label(&outcome),
        path = ?outcome.path(),
        changed = registry.changed().count(),
        blocking_mode = %registry.blocking_mode(),
        privacy_level = %registry.privacy_level(),
        "Configuration loaded"
    );

    (outcome, resolver_args)
}

pub fn outcome_label(outcome: &LoadOutcome) -> &'static str {
    match outcome {
        LoadOutcome::Structured(_) => "structured",
        LoadOutcome::Legacy(_) => "legacy",
        LoadOutcome::Defaults => "defaults",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_narrow_search() {
        let paths = config_paths(Some(PathBuf::from("/tmp/x.toml")), None);
        assert_eq!(paths.structured, vec![PathBuf::from("/tmp/x.toml")]);
        assert_eq!(paths.legacy, ConfigPaths::standard().legacy);
    }

    #[test]
    fn test_load_from_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FtlConfig::new(ConfigPaths::in_dir(dir.path()));
        let (outcome, args) = load_config(&mut config);

        assert_eq!(outcome, LoadOutcome::Defaults);
        assert_eq!(outcome_label(&outcome), "defaults");
        assert_eq!(args.command_line(), vec!["dnsmasq", "-k"]);
    }
}
