use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use super::probe_config::{DirectorySettings, ProbeSettings, ServerSettings, SweepSettings};
use crate::error::ConfigError;

const DEFAULT_CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub probe: ProbeSettings,

    #[serde(default)]
    pub directory: DirectorySettings,

    #[serde(default)]
    pub sweep: SweepSettings,
}

impl AppConfig {
    /// Parse a configuration document. Missing sections take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document for a struct
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply environment overrides on top of the file values.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(addr) = parse_env(&lookup, "BIND_ADDR")? {
            self.server.bind_addr = addr;
        }
        if let Some(timeout) = parse_env(&lookup, "PROBE_TIMEOUT_SECONDS")? {
            self.probe.timeout_seconds = timeout;
        }
        if let Some(concurrency) = parse_env(&lookup, "SWEEP_CONCURRENCY")? {
            self.sweep.concurrency = concurrency;
        }
        if let Some(file) = lookup("DIRECTORY_FILE").filter(|f| !f.trim().is_empty()) {
            self.directory.file = Some(PathBuf::from(file));
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "probe.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if !(-23..=23).contains(&self.probe.utc_offset_hours) {
            return Err(ConfigError::Invalid(format!(
                "probe.utc_offset_hours must be between -23 and 23, got {}",
                self.probe.utc_offset_hours
            )));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value }),
    }
}

/// Load the application configuration from a YAML file and environment variables.
/// The file is named by `CONFIG_FILE`; when that is unset and `config.yml`
/// does not exist, built-in defaults are used. `BIND_ADDR`,
/// `PROBE_TIMEOUT_SECONDS`, `SWEEP_CONCURRENCY` and `DIRECTORY_FILE`
/// override the file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let explicit = env::var("CONFIG_FILE").ok();
    let path = PathBuf::from(explicit.as_deref().unwrap_or(DEFAULT_CONFIG_FILE));

    let mut config = if explicit.is_none() && !path.exists() {
        log::info!("No {DEFAULT_CONFIG_FILE} found, using default configuration");
        AppConfig::default()
    } else {
        read_config_file(&path)?
    };

    config.apply_env(|name| env::var(name).ok())?;
    config.validate()?;

    log::info!(
        "Probe timeout {}s, max redirects {}, sweep concurrency {}",
        config.probe.timeout_seconds,
        config.probe.max_redirects,
        config.sweep.concurrency
    );

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Using config file {}", path.display());
    AppConfig::from_yaml(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_full_config_deserialization() {
        let yaml = r#"
                    server:
                        bind_addr: 127.0.0.1:8080
                    probe:
                        timeout_seconds: 15
                        max_redirects: 5
                    directory:
                        file: /etc/sitecheck/services.yml
                    sweep:
                        concurrency: 4
                    "#;

        let config = AppConfig::from_yaml(yaml).expect("Invalid YAML");
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.probe.timeout_seconds, 15);
        assert_eq!(config.probe.max_redirects, 5);
        assert_eq!(config.probe.utc_offset_hours, 9);
        assert_eq!(
            config.directory.file.as_deref(),
            Some(Path::new("/etc/sitecheck/services.yml"))
        );
        assert_eq!(config.sweep.concurrency, 4);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("").unwrap();
        assert_eq!(config.probe.timeout_seconds, 10);
        assert_eq!(config.server.bind_addr.port(), 3000);
        assert!(config.directory.file.is_none());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig::from_yaml("probe:\n  timeout_seconds: 15\n").unwrap();
        config
            .apply_env(env_of(&[
                ("BIND_ADDR", "127.0.0.1:9999"),
                ("PROBE_TIMEOUT_SECONDS", " 3 "),
                ("SWEEP_CONCURRENCY", "8"),
                ("DIRECTORY_FILE", "services.yml"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind_addr.port(), 9999);
        assert_eq!(config.probe.timeout_seconds, 3);
        assert_eq!(config.sweep.concurrency, 8);
        assert_eq!(config.directory.file, Some(PathBuf::from("services.yml")));
    }

    #[test]
    fn test_malformed_env_override_is_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(env_of(&[("PROBE_TIMEOUT_SECONDS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { name: "PROBE_TIMEOUT_SECONDS", .. }
        ));
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = AppConfig::from_yaml("probe:\n  timeout_seconds: 0\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_out_of_range_offset_is_invalid() {
        let config = AppConfig::from_yaml("probe:\n  utc_offset_hours: 30\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_yaml_is_a_parse_error() {
        let err = AppConfig::from_yaml("server: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
